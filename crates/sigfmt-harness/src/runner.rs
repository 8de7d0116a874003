//! Fixture execution engine.

use serde::Serialize;

use sigfmt_core::fmt::printf_int;
use sigfmt_core::writebuf::{RawWrite, WriteBuf};

use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};

/// In-memory sink used to capture rendered bytes.
#[derive(Debug, Default)]
pub struct MemSink {
    pub data: Vec<u8>,
}

impl RawWrite for MemSink {
    fn write_all(&mut self, buf: &[u8]) -> usize {
        self.data.extend_from_slice(buf);
        buf.len()
    }
}

/// Outcome of a single fixture case.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Renders one specifier/value pair and returns the emitted text.
///
/// A scan failure comes back as the empty string, which is exactly what a
/// rejected case expects.
pub fn render_case(format: &str, value: u128, width_bytes: usize) -> Result<String, HarnessError> {
    let mut storage = [0u8; 256];
    let mut wb = WriteBuf::new(MemSink::default(), &mut storage);
    match width_bytes {
        1 => printf_int(&mut wb, format, value as u8),
        2 => printf_int(&mut wb, format, value as u16),
        4 => printf_int(&mut wb, format, value as u32),
        8 => printf_int(&mut wb, format, value as u64),
        16 => printf_int(&mut wb, format, value),
        other => return Err(HarnessError::UnsupportedWidth(other)),
    };
    wb.flush();
    // output is ASCII by construction
    Ok(String::from_utf8_lossy(&wb.sink().data).into_owned())
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the verification campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return per-case results.
    pub fn run(&self, set: &FixtureSet) -> Result<Vec<VerificationResult>, HarnessError> {
        set.cases.iter().map(|case| self.run_case(case)).collect()
    }

    fn run_case(&self, case: &FixtureCase) -> Result<VerificationResult, HarnessError> {
        let value: u128 = case
            .value
            .parse()
            .map_err(|_| HarnessError::BadValue(case.value.clone()))?;
        let actual = render_case(&case.format, value, case.width_bytes)?;
        let expected = case.expected.clone().unwrap_or_default();
        Ok(VerificationResult {
            case_name: case.name.clone(),
            passed: actual == expected,
            expected,
            actual,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::builtin_fixture_set;

    #[test]
    fn test_builtin_set_verifies_clean() {
        let runner = TestRunner::new("unit");
        let results = runner.run(&builtin_fixture_set()).expect("run");
        let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "failing cases: {failures:?}");
    }

    #[test]
    fn test_render_case_truncates_value_to_width() {
        // only the low bytes of the recorded pattern participate
        let out = render_case("x", 0x1_00AB, 1).expect("render");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_render_case_rejects_odd_width() {
        assert!(matches!(
            render_case("x", 1, 3),
            Err(HarnessError::UnsupportedWidth(3))
        ));
    }

    #[test]
    fn test_bad_value_is_reported() {
        let runner = TestRunner::new("unit");
        let set = FixtureSet {
            version: "1".into(),
            family: "printf_int".into(),
            cases: vec![FixtureCase {
                name: "bad".into(),
                format: "d".into(),
                value: "not-a-number".into(),
                width_bytes: 1,
                expected: Some("0".into()),
            }],
        };
        assert!(matches!(runner.run(&set), Err(HarnessError::BadValue(_))));
    }
}
