//! Numeric coercion policy for data-file fields and typed input

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// How unparseable numeric text is handled.
///
/// `Lenient` turns bad text into zero, which is what the tool has always
/// done. `Strict` reports it instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

impl ParseMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ParseMode::Strict)
    }

    /// Parse a floating-point value. Returns `None` only in strict mode.
    pub fn parse_number(self, text: &str) -> Option<f64> {
        match text.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) if self.is_strict() => None,
            Err(_) => {
                log::debug!("Coercing non-numeric text {:?} to 0", text);
                Some(0.0)
            }
        }
    }

    /// Parse a signed index. Returns `None` only in strict mode.
    ///
    /// Integers too large for `i64` saturate so they still read as out of range.
    pub fn parse_index(self, text: &str) -> Option<i64> {
        match text.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
            Err(err) if *err.kind() == IntErrorKind::NegOverflow => Some(i64::MIN),
            Err(_) if self.is_strict() => None,
            Err(_) => {
                log::debug!("Coercing non-numeric selection {:?} to index 0", text);
                Some(0)
            }
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Lenient => write!(f, "lenient"),
            ParseMode::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(ParseMode::Lenient),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!(
                "'{}' is not a parse mode. Options: lenient, strict",
                other
            )),
        }
    }
}

/// First whitespace-separated token of an input line, or `""` for a blank line
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
