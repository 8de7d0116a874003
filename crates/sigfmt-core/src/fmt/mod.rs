//! Integer formatting engine.
//!
//! A specifier string is scanned once into an [`IntFormat`] record
//! (grammar: `flags* width? ('.' digits)? conv`), then the value is
//! rendered through a [`crate::writebuf::WriteBuf`]. Width and precision
//! are literal digits in the specifier; there are no runtime `*`
//! arguments, no `%` escapes, and no literal text — one specifier, one
//! value, per call.
//!
//! A malformed specifier makes the whole call emit nothing and return 0.
//! Rendering itself cannot fail; a short count only ever means the sink
//! refused bytes.

mod render;
mod scan;

pub use scan::ScanError;

use crate::writebuf::{RawWrite, WriteBuf};

// ---------------------------------------------------------------------------
// Specifier types
// ---------------------------------------------------------------------------

/// Flags parsed from a format specifier, each settable at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags {
    /// `#`: conventional base prefix (`0b`, `0`, `0x`; nothing for decimal).
    pub alt_prefix: bool,
    /// `$`: compact one-character base marker (`#`, `%`, `@`, `$`).
    pub alt_sigil: bool,
    /// `0`: pad to field width with zeros instead of spaces.
    pub zero_pad: bool,
    /// `-`: left-adjust within the field (always space padded).
    pub left_adjust: bool,
    /// space: blank in front of non-negative signed values.
    pub blank_sign: bool,
    /// `+`: explicit `+` in front of non-negative signed values.
    pub force_sign: bool,
}

/// Minimum digit count for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// No precision given: the value's natural digit count.
    Unset,
    /// `.0`: zero-extend to the type's full digit capacity.
    Natural,
    /// `.n` (n > 0): zero-extend short values to `n` digits.
    Fixed(u32),
}

/// Conversion kind, one per trailing specifier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntConv {
    /// `d`: two's-complement signed decimal.
    SignedDec,
    /// `u`: unsigned decimal.
    UnsignedDec,
    /// `b`: binary.
    Binary,
    /// `o`: octal.
    Octal,
    /// `x`: lowercase hexadecimal.
    HexLower,
    /// `X`: uppercase hexadecimal.
    HexUpper,
}

/// A fully scanned format specifier.
///
/// Produced fresh per formatting call and consumed immediately; the
/// conversion kind is always concrete by the time rendering starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFormat {
    pub flags: FormatFlags,
    /// Minimum field width; 0 means no minimum.
    pub width: u32,
    pub precision: Precision,
    pub conv: IntConv,
}

/// Parses a specifier string.
///
/// Parsing is pure and single-pass: the same input always yields the same
/// record, and the first malformed byte aborts the scan.
pub fn parse(format: &str) -> Result<IntFormat, ScanError> {
    scan::scan_int_format(format.as_bytes())
}

// ---------------------------------------------------------------------------
// Per-width entry points
// ---------------------------------------------------------------------------

/// An integer type the formatting engine accepts.
///
/// Each implementation adapts one machine width to the common rendering
/// domain: the value's two's-complement bit pattern, zero-extended, plus
/// its byte width. Signed types forward the bit pattern of their unsigned
/// twin, so `d` reproduces the original value by sign extension no matter
/// which width the caller had. Width resolution happens at compile time.
pub trait IntArg: Copy {
    /// Byte width of the value's representation.
    const BYTES: usize;

    /// The bit pattern, zero-extended into the common domain.
    fn widen(self) -> u128;
}

macro_rules! int_arg_impl {
    ($($ty:ty => $uns:ty),* $(,)?) => {$(
        impl IntArg for $ty {
            const BYTES: usize = size_of::<$ty>();

            #[inline]
            fn widen(self) -> u128 {
                (self as $uns) as u128
            }
        }
    )*};
}

int_arg_impl! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

/// Formats one integer through `wb` according to `format`.
///
/// Returns the number of bytes accepted by the buffer. A scan failure
/// emits nothing and returns 0; otherwise the count is
/// `max(content length, field width)` minus whatever the sink refused.
pub fn printf_int<S: RawWrite, T: IntArg>(wb: &mut WriteBuf<'_, S>, format: &str, value: T) -> usize {
    let spec = match scan::scan_int_format(format.as_bytes()) {
        Ok(spec) => spec,
        Err(_) => return 0,
    };
    render::render_int(wb, &spec, value.widen(), T::BYTES)
}

impl<S: RawWrite> WriteBuf<'_, S> {
    /// Method form of [`printf_int`].
    pub fn printf<T: IntArg>(&mut self, format: &str, value: T) -> usize {
        printf_int(self, format, value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
