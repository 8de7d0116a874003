//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single formatting fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Specifier string handed to the scanner.
    pub format: String,
    /// Value bit pattern as decimal text (parsed as u128).
    pub value: String,
    /// Byte width of the value: 1, 2, 4, 8, or 16.
    pub width_bytes: usize,
    /// Expected rendering; `None` means the scan must fail and nothing
    /// may be emitted.
    pub expected: Option<String>,
}

impl FixtureCase {
    fn new(name: &str, format: &str, value: u128, width_bytes: usize, expected: &str) -> Self {
        Self {
            name: name.to_string(),
            format: format.to_string(),
            value: value.to_string(),
            width_bytes,
            expected: Some(expected.to_string()),
        }
    }

    fn rejected(name: &str, format: &str) -> Self {
        Self {
            name: name.to_string(),
            format: format.to_string(),
            value: "0".to_string(),
            width_bytes: 1,
            expected: None,
        }
    }
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Case family name.
    pub family: String,
    /// Individual cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the fixture set to a file as pretty JSON.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builds the builtin reference case table.
///
/// Covers every conversion, both alternate-form styles, every sign state,
/// both pad characters and adjust directions, precision zero extension,
/// the widest and narrowest supported widths, and the scanner's rejection
/// paths.
pub fn builtin_fixture_set() -> FixtureSet {
    let mut cases = vec![
        FixtureCase::new("dec_plain", "d", 42, 1, "42"),
        FixtureCase::new("dec_negative_bits", "d", 0xFD, 1, "-3"),
        FixtureCase::new("dec_min_i8", "d", 0x80, 1, "-128"),
        FixtureCase::new("dec_min_i64", "d", 0x8000_0000_0000_0000, 8, "-9223372036854775808"),
        FixtureCase::new("dec_force_sign", "+d", 7, 1, "+7"),
        FixtureCase::new("dec_blank_sign", " d", 7, 1, " 7"),
        FixtureCase::new("udec_plain", "u", 255, 1, "255"),
        FixtureCase::new("udec_zero", "u", 0, 4, "0"),
        FixtureCase::new("bin_plain", "b", 5, 1, "101"),
        FixtureCase::new("bin_prefix", "#b", 5, 1, "0b101"),
        FixtureCase::new("bin_marker", "$b", 5, 1, "%101"),
        FixtureCase::new("oct_plain", "o", 8, 1, "10"),
        FixtureCase::new("oct_prefix", "#o", 8, 1, "010"),
        FixtureCase::new("oct_marker", "$o", 8, 1, "@10"),
        FixtureCase::new("hex_lower", "x", 0xDEAD_BEEF, 4, "deadbeef"),
        FixtureCase::new("hex_upper", "X", 0xDEAD_BEEF, 4, "DEADBEEF"),
        FixtureCase::new("hex_marker", "$x", 0xAB, 4, "$ab"),
        FixtureCase::new("hex_prefix_zero_pad", "#08x", 0xAB, 4, "0x0000ab"),
        FixtureCase::new("marker_force_sign", "$+5d", 0xFD, 1, "  #-3"),
        FixtureCase::new("width_space_right", "8x", 0xAB, 4, "      ab"),
        FixtureCase::new("width_zero_right", "08x", 0xAB, 4, "000000ab"),
        FixtureCase::new("width_left", "-8x", 0xAB, 4, "ab      "),
        FixtureCase::new("width_left_beats_zero", "0-8x", 0xAB, 4, "ab      "),
        FixtureCase::new("precision_extends", ".3u", 5, 1, "005"),
        FixtureCase::new("precision_natural", ".0u", 5, 1, "005"),
        FixtureCase::new("precision_natural_full", ".0u", 255, 1, "255"),
        FixtureCase::new("precision_overflow", ".6u", 5, 1, "000005"),
        FixtureCase::new("precision_in_width", "#8.4x", 0xAB, 4, "  0x00ab"),
        FixtureCase::new("u128_max", "u", u128::MAX, 16, &u128::MAX.to_string()),
        FixtureCase::new("hex_u32_max", "x", 0xFFFF_FFFF, 4, "ffffffff"),
        FixtureCase::rejected("reject_empty", ""),
        FixtureCase::rejected("reject_conversion", "q"),
        FixtureCase::rejected("reject_repeated_flag", "##x"),
        FixtureCase::rejected("reject_bare_dot", "5.d"),
        FixtureCase::rejected("reject_trailing", "dx"),
        FixtureCase::rejected("reject_width_overflow", "4294967295d"),
    ];

    // adjust x pad x sigil sweep over a fixed hex value
    let sweep: &[(&str, &str)] = &[
        ("8x", "      ab"),
        ("#8x", "    0xab"),
        ("$8x", "     $ab"),
        ("08x", "000000ab"),
        ("#08x", "0x0000ab"),
        ("$08x", "$00000ab"),
        ("-8x", "ab      "),
        ("#-8x", "0xab    "),
        ("$-8x", "$ab     "),
    ];
    for (i, (format, expected)) in sweep.iter().enumerate() {
        cases.push(FixtureCase::new(
            &format!("layout_sweep_{i}"),
            format,
            0xAB,
            4,
            expected,
        ));
    }

    FixtureSet {
        version: "1".to_string(),
        family: "printf_int".to_string(),
        cases,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
