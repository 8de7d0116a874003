//! Format specifier scanner.
//!
//! Strictly left-to-right over the specifier bytes, four ordered phases
//! (flags, field width, precision, conversion letter), one character of
//! lookahead, no backtracking. Each phase either consumes a run and hands
//! the cursor forward or fails the whole scan; a failed scan never leaves
//! partial state behind.

use super::{FormatFlags, IntConv, IntFormat, Precision};

/// Why a specifier failed to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The specifier ended before a phase could finish.
    UnexpectedEnd,
    /// The same flag character appeared twice.
    RepeatedFlag,
    /// A width/precision digit run was too long or too large.
    BadDigitRun,
    /// `.` not followed by a digit.
    MissingPrecision,
    /// The conversion letter is not one of `d u b o x X`.
    BadConversion,
    /// Bytes left over after the conversion letter.
    TrailingBytes,
}

/// Decimal length of `u32::MAX`; longer runs can never fit.
const DIGIT_RUN_MAX: usize = 10;

fn set_once(flag: &mut bool) -> Result<(), ScanError> {
    if *flag {
        return Err(ScanError::RepeatedFlag);
    }
    *flag = true;
    Ok(())
}

/// Parses a maximal decimal digit run.
///
/// Saturates while summing so oversized values are detected, not wrapped;
/// anything above `i32::MAX` is rejected.
fn scan_digit_run(s: &[u8]) -> Result<(u32, usize), ScanError> {
    let ndigits = s.iter().take_while(|b| b.is_ascii_digit()).count();
    if ndigits == 0 || ndigits > DIGIT_RUN_MAX {
        return Err(ScanError::BadDigitRun);
    }

    let mut value: u32 = 0;
    for &b in &s[..ndigits] {
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    if value > i32::MAX as u32 {
        return Err(ScanError::BadDigitRun);
    }
    Ok((value, ndigits))
}

fn scan_flags(s: &[u8]) -> Result<(FormatFlags, usize), ScanError> {
    let mut flags = FormatFlags::default();
    let mut pos = 0;
    loop {
        if pos == s.len() {
            return Err(ScanError::UnexpectedEnd);
        }
        match s[pos] {
            b'#' => set_once(&mut flags.alt_prefix)?,
            b'$' => set_once(&mut flags.alt_sigil)?,
            b'0' => set_once(&mut flags.zero_pad)?,
            b'-' => set_once(&mut flags.left_adjust)?,
            b' ' => set_once(&mut flags.blank_sign)?,
            b'+' => set_once(&mut flags.force_sign)?,
            _ => break,
        }
        pos += 1;
    }
    Ok((flags, pos))
}

fn scan_fieldwidth(s: &[u8]) -> Result<(u32, usize), ScanError> {
    if s.is_empty() {
        return Err(ScanError::UnexpectedEnd);
    }
    if !s[0].is_ascii_digit() {
        return Ok((0, 0));
    }
    scan_digit_run(s)
}

fn scan_precision(s: &[u8]) -> Result<(Precision, usize), ScanError> {
    if s.is_empty() {
        return Err(ScanError::UnexpectedEnd);
    }
    if s[0] != b'.' {
        return Ok((Precision::Unset, 0));
    }
    let rest = &s[1..];
    if rest.is_empty() {
        return Err(ScanError::UnexpectedEnd);
    }
    if !rest[0].is_ascii_digit() {
        return Err(ScanError::MissingPrecision);
    }
    let (value, ndigits) = scan_digit_run(rest)?;
    let precision = if value == 0 {
        Precision::Natural
    } else {
        Precision::Fixed(value)
    };
    Ok((precision, ndigits + 1))
}

fn scan_conv(s: &[u8]) -> Result<(IntConv, usize), ScanError> {
    if s.is_empty() {
        return Err(ScanError::UnexpectedEnd);
    }
    let conv = match s[0] {
        b'd' => IntConv::SignedDec,
        b'u' => IntConv::UnsignedDec,
        b'b' => IntConv::Binary,
        b'o' => IntConv::Octal,
        b'x' => IntConv::HexLower,
        b'X' => IntConv::HexUpper,
        _ => return Err(ScanError::BadConversion),
    };
    Ok((conv, 1))
}

/// Scans a complete specifier: `flags* width? ('.' digits)? conv`.
pub(super) fn scan_int_format(format: &[u8]) -> Result<IntFormat, ScanError> {
    let (flags, consumed) = scan_flags(format)?;
    let mut pos = consumed;

    let (width, consumed) = scan_fieldwidth(&format[pos..])?;
    pos += consumed;

    let (precision, consumed) = scan_precision(&format[pos..])?;
    pos += consumed;

    let (conv, consumed) = scan_conv(&format[pos..])?;
    pos += consumed;

    if pos != format.len() {
        return Err(ScanError::TrailingBytes);
    }
    Ok(IntFormat {
        flags,
        width,
        precision,
        conv,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> Result<IntFormat, ScanError> {
        scan_int_format(s.as_bytes())
    }

    #[test]
    fn test_bare_conversions() {
        for (s, conv) in [
            ("d", IntConv::SignedDec),
            ("u", IntConv::UnsignedDec),
            ("b", IntConv::Binary),
            ("o", IntConv::Octal),
            ("x", IntConv::HexLower),
            ("X", IntConv::HexUpper),
        ] {
            let spec = scan(s).unwrap();
            assert_eq!(spec.conv, conv);
            assert_eq!(spec.width, 0);
            assert_eq!(spec.precision, Precision::Unset);
            assert_eq!(spec.flags, FormatFlags::default());
        }
    }

    #[test]
    fn test_all_flags_once() {
        let spec = scan("#$0- +7.3X").unwrap();
        assert!(spec.flags.alt_prefix);
        assert!(spec.flags.alt_sigil);
        assert!(spec.flags.zero_pad);
        assert!(spec.flags.left_adjust);
        assert!(spec.flags.blank_sign);
        assert!(spec.flags.force_sign);
        assert_eq!(spec.width, 7);
        assert_eq!(spec.precision, Precision::Fixed(3));
        assert_eq!(spec.conv, IntConv::HexUpper);
    }

    #[test]
    fn test_repeated_flag_rejected() {
        assert_eq!(scan("##x"), Err(ScanError::RepeatedFlag));
        assert_eq!(scan("00d"), Err(ScanError::RepeatedFlag));
        assert_eq!(scan("--d"), Err(ScanError::RepeatedFlag));
    }

    #[test]
    fn test_zero_is_a_flag_not_a_width() {
        let spec = scan("08x").unwrap();
        assert!(spec.flags.zero_pad);
        assert_eq!(spec.width, 8);
    }

    #[test]
    fn test_width_parses_maximal_run() {
        assert_eq!(scan("123d").unwrap().width, 123);
        assert_eq!(scan("1d").unwrap().width, 1);
    }

    #[test]
    fn test_precision_forms() {
        assert_eq!(scan(".5u").unwrap().precision, Precision::Fixed(5));
        assert_eq!(scan(".0u").unwrap().precision, Precision::Natural);
        assert_eq!(scan(".00u").unwrap().precision, Precision::Natural);
        assert_eq!(scan("u").unwrap().precision, Precision::Unset);
    }

    #[test]
    fn test_bare_dot_rejected() {
        assert_eq!(scan("5.d"), Err(ScanError::MissingPrecision));
        assert_eq!(scan("."), Err(ScanError::UnexpectedEnd));
    }

    #[test]
    fn test_truncated_specifiers() {
        assert_eq!(scan(""), Err(ScanError::UnexpectedEnd));
        assert_eq!(scan("+"), Err(ScanError::UnexpectedEnd));
        assert_eq!(scan("12"), Err(ScanError::UnexpectedEnd));
        assert_eq!(scan("12.3"), Err(ScanError::UnexpectedEnd));
    }

    #[test]
    fn test_bad_conversion_letter() {
        assert_eq!(scan("q"), Err(ScanError::BadConversion));
        assert_eq!(scan("5f"), Err(ScanError::BadConversion));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        assert_eq!(scan("dx"), Err(ScanError::TrailingBytes));
        assert_eq!(scan("5d "), Err(ScanError::TrailingBytes));
    }

    #[test]
    fn test_overlong_digit_run_rejected() {
        assert_eq!(scan("12345678901d"), Err(ScanError::BadDigitRun));
    }

    #[test]
    fn test_width_overflow_saturates_to_error() {
        // ten digits, larger than i32::MAX: detected, never wrapped
        assert_eq!(scan("4294967295d"), Err(ScanError::BadDigitRun));
        assert_eq!(scan("2147483647d").unwrap().width, i32::MAX as u32);
        assert_eq!(scan("2147483648d"), Err(ScanError::BadDigitRun));
    }

    #[test]
    fn test_flags_after_width_are_trailing_garbage() {
        assert_eq!(scan("5-d"), Err(ScanError::BadConversion));
    }

    #[test]
    fn test_scan_is_pure() {
        assert_eq!(scan("#08.4x"), scan("#08.4x"));
    }
}
