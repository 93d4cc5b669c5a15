//! Error types for catalog operations
//!
//! This module provides error types for hex color parsing and for loading
//! and querying the named-color catalog.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for catalog loading and lookup.
///
/// Row errors carry the 1-based line number of the offending row.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Row does not have the six `group,name,hex,r,g,b` fields
    MalformedRow {
        /// Line number of the row
        line: usize,
        /// Number of fields found
        fields: usize,
    },
    /// A quoted field is not closed before the end of the row
    UnterminatedQuote {
        /// Line number of the row
        line: usize,
    },
    /// Row has an empty name field
    EmptyName {
        /// Line number of the row
        line: usize,
    },
    /// A channel field is not an integer in `0..=255`
    InvalidChannel {
        /// Line number of the row
        line: usize,
        /// Which channel column ("r", "g" or "b")
        channel: &'static str,
        /// The raw field text
        value: String,
    },
    /// Nearest-color lookup on a catalog with no entries
    EmptyCatalog,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MalformedRow { line, fields } => write!(
                f,
                "line {}: expected 6 fields (group,name,hex,r,g,b), found {}",
                line, fields
            ),
            CatalogError::UnterminatedQuote { line } => {
                write!(f, "line {}: unterminated quoted field", line)
            }
            CatalogError::EmptyName { line } => {
                write!(f, "line {}: color name is empty", line)
            }
            CatalogError::InvalidChannel {
                line,
                channel,
                value,
            } => write!(
                f,
                "line {}: channel {} must be an integer in 0..=255, got {:?}",
                line, channel, value
            ),
            CatalogError::EmptyCatalog => write!(f, "color catalog has no entries"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    /// True for errors raised while parsing the catalog resource.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, CatalogError::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CatalogError::MalformedRow { line: 3, fields: 4 }.to_string(),
            "line 3: expected 6 fields (group,name,hex,r,g,b), found 4"
        );
        assert_eq!(
            CatalogError::InvalidChannel {
                line: 7,
                channel: "g",
                value: "300".to_string()
            }
            .to_string(),
            "line 7: channel g must be an integer in 0..=255, got \"300\""
        );
        assert_eq!(
            CatalogError::UnterminatedQuote { line: 2 }.to_string(),
            "line 2: unterminated quoted field"
        );
        assert_eq!(
            CatalogError::EmptyCatalog.to_string(),
            "color catalog has no entries"
        );
    }

    #[test]
    fn test_load_error_classification() {
        assert!(CatalogError::EmptyName { line: 1 }.is_load_error());
        assert!(!CatalogError::EmptyCatalog.is_load_error());
    }
}
