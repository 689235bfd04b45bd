//! Period string scanner
//!
//! Splits the canonical period form into its four tokens:
//! - `C1-3P3D`    -> `C`, `1`, `3`, `P3D`
//! - `DP1DP2DP3D` -> `D`, `P1D`, `P2D`, `P3D`
//!
//! A bound token ends at the next `-` (consumed, category form) or else at
//! the next `P` (kept, duration form). Both searches start one byte past the
//! token start, so a bound is never empty. Whatever follows the second bound
//! is the result.
//!
//! The scanner does not validate the tokens. That is left to
//! `ConditionalPeriod`, which runs the same checks as for explicit fields.

use crate::error::{PeriodError, Result};
use crate::types::Operand;

/// The four tokens of a period string, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawPeriod {
    /// Type tag (first character)
    pub tag: String,
    /// Lower bound token (integer when purely numeric)
    pub lower: Operand,
    /// Upper bound token (integer when purely numeric)
    pub upper: Operand,
    /// Result token, taken verbatim
    pub result: Operand,
}

/// Parser for the canonical period form
#[derive(Debug, Default)]
pub struct PeriodParser;

impl PeriodParser {
    /// Split a period string into its raw tokens
    pub fn parse(input: &str) -> Result<RawPeriod> {
        let mut scanner = Scanner::new(input);

        let tag = scanner.tag()?;
        let lower = scanner.bound(1)?;
        let upper = scanner.bound(2)?;
        let result = scanner.remainder()?;

        log::trace!(
            "Scanned period '{}' -> tag={} lower={} upper={} result={}",
            input,
            tag,
            lower,
            upper,
            result
        );

        Ok(RawPeriod {
            tag: tag.to_string(),
            lower,
            upper,
            result: Operand::Text(result.to_string()),
        })
    }
}

struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    fn tag(&mut self) -> Result<&'a str> {
        let first = self.input.chars().next().ok_or_else(|| self.missing(1))?;
        self.cursor = first.len_utf8();
        Ok(&self.input[..self.cursor])
    }

    fn bound(&mut self, position: usize) -> Result<Operand> {
        let from = self.cursor + 1;

        let (end, next) = if let Some(dash) = self.find(b'-', from) {
            (dash, dash + 1)
        } else if let Some(p) = self.find(b'P', from) {
            (p, p)
        } else {
            return Err(self.missing(position));
        };

        let token = &self.input[self.cursor..end];
        self.cursor = next;
        Ok(classify(token))
    }

    fn remainder(&self) -> Result<&'a str> {
        if self.cursor >= self.input.len() {
            return Err(PeriodError::UnterminatedFormat {
                input: self.input.to_string(),
            });
        }
        Ok(&self.input[self.cursor..])
    }

    fn find(&self, byte: u8, from: usize) -> Option<usize> {
        self.input
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|b| *b == byte)
            .map(|offset| from + offset)
    }

    fn missing(&self, position: usize) -> PeriodError {
        PeriodError::MissingArgument {
            position,
            input: self.input.to_string(),
        }
    }
}

/// Purely numeric tokens become integers, everything else stays text
fn classify(token: &str) -> Operand {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = token.parse::<i64>() {
            return Operand::Integer(n);
        }
    }
    Operand::Text(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_category() {
        let raw = PeriodParser::parse("C1-3P3D").unwrap();
        assert_eq!(raw.tag, "C");
        assert_eq!(raw.lower, Operand::Integer(1));
        assert_eq!(raw.upper, Operand::Integer(3));
        assert_eq!(raw.result, Operand::Text("P3D".to_string()));
    }

    #[test]
    fn test_scan_category_multi_digit() {
        let raw = PeriodParser::parse("C10-200P1Y2M").unwrap();
        assert_eq!(raw.lower, Operand::Integer(10));
        assert_eq!(raw.upper, Operand::Integer(200));
        assert_eq!(raw.result, Operand::Text("P1Y2M".to_string()));
    }

    #[test]
    fn test_scan_duration() {
        let raw = PeriodParser::parse("DP1YP1Y2M3DP1Y2M3DT1H2M3S").unwrap();
        assert_eq!(raw.tag, "D");
        assert_eq!(raw.lower, Operand::Text("P1Y".to_string()));
        assert_eq!(raw.upper, Operand::Text("P1Y2M3D".to_string()));
        assert_eq!(raw.result, Operand::Text("P1Y2M3DT1H2M3S".to_string()));
    }

    #[test]
    fn test_scan_duration_zero_upper() {
        let raw = PeriodParser::parse("DP1DPT0SP1D").unwrap();
        assert_eq!(raw.lower, Operand::Text("P1D".to_string()));
        assert_eq!(raw.upper, Operand::Text("PT0S".to_string()));
        assert_eq!(raw.result, Operand::Text("P1D".to_string()));
    }

    #[test]
    fn test_scan_keeps_unknown_tag() {
        let raw = PeriodParser::parse("X1-3P3D").unwrap();
        assert_eq!(raw.tag, "X");
    }

    #[test]
    fn test_missing_first_argument() {
        let err = PeriodParser::parse("C13").unwrap_err();
        assert!(matches!(err, PeriodError::MissingArgument { position: 1, .. }));
    }

    #[test]
    fn test_missing_second_argument() {
        let err = PeriodParser::parse("C1-P3D").unwrap_err();
        assert!(matches!(err, PeriodError::MissingArgument { position: 2, .. }));
    }

    #[test]
    fn test_missing_result() {
        let err = PeriodParser::parse("DP1DP2D").unwrap_err();
        assert!(matches!(err, PeriodError::MissingArgument { position: 2, .. }));

        let err = PeriodParser::parse("C1-3-").unwrap_err();
        match err {
            PeriodError::UnterminatedFormat { input } => assert_eq!(input, "C1-3-"),
            other => panic!("Expected UnterminatedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let err = PeriodParser::parse("").unwrap_err();
        assert!(matches!(err, PeriodError::MissingArgument { position: 1, .. }));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("42"), Operand::Integer(42));
        assert_eq!(classify("P4D"), Operand::Text("P4D".to_string()));
        assert_eq!(classify("4a"), Operand::Text("4a".to_string()));
        assert_eq!(
            classify("99999999999999999999"),
            Operand::Text("99999999999999999999".to_string())
        );
    }
}
