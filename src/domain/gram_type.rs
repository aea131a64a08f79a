//! GramType value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of tokens stored in a generated index field.
///
/// Each variant owns a short code that becomes the middle segment of a field
/// name (`fts_tri_title`, `ac_pre_title`). The codes are part of the stored
/// data format and must never change.
///
/// # Example
///
/// ```
/// use searchable_fields::domain::GramType;
///
/// assert_eq!(GramType::Trigram.code(), "tri");
/// assert_eq!("pre".parse::<GramType>().unwrap(), GramType::Prefix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GramType {
    /// Whitespace-delimited word prefixes
    Prefix,
    /// Two-unit sliding windows
    Bigram,
    /// Three-unit sliding windows
    Trigram,
}

impl GramType {
    /// Every gram type, in code-table order.
    pub const ALL: [GramType; 3] = [GramType::Prefix, GramType::Bigram, GramType::Trigram];

    /// Get the short code used in field names.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Prefix => "pre",
            Self::Bigram => "bi",
            Self::Trigram => "tri",
        }
    }

    /// Look up a gram type by its short code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Window size for sliding-window types, `None` for prefixes.
    pub const fn window(self) -> Option<usize> {
        match self {
            Self::Prefix => None,
            Self::Bigram => Some(2),
            Self::Trigram => Some(3),
        }
    }

    /// Look up the sliding-window type with window size `n`.
    pub fn from_window(n: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.window() == Some(n))
    }
}

impl FromStr for GramType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ValidationError::UnknownGramType(s.to_string()))
    }
}

// Serde support - serialize as the short code
impl Serialize for GramType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

// Serde support - deserialize from the short code with validation
impl<'de> Deserialize<'de> for GramType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for GramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_fixed() {
        assert_eq!(GramType::Prefix.code(), "pre");
        assert_eq!(GramType::Bigram.code(), "bi");
        assert_eq!(GramType::Trigram.code(), "tri");
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = GramType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), GramType::ALL.len());
    }

    #[test]
    fn test_from_code_inverts_code() {
        for t in GramType::ALL {
            assert_eq!(GramType::from_code(t.code()), Some(t));
        }
        assert_eq!(GramType::from_code("quad"), None);
        assert_eq!(GramType::from_code("TRI"), None);
    }

    #[test]
    fn test_window() {
        assert_eq!(GramType::Prefix.window(), None);
        assert_eq!(GramType::Bigram.window(), Some(2));
        assert_eq!(GramType::Trigram.window(), Some(3));
    }

    #[test]
    fn test_from_window() {
        assert_eq!(GramType::from_window(2), Some(GramType::Bigram));
        assert_eq!(GramType::from_window(3), Some(GramType::Trigram));
        assert_eq!(GramType::from_window(0), None);
        assert_eq!(GramType::from_window(1), None);
        assert_eq!(GramType::from_window(4), None);
    }

    #[test]
    fn test_parse_unknown_fails() {
        let err = "uni".parse::<GramType>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownGramType("uni".to_string()));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GramType::Bigram).unwrap();
        assert_eq!(json, "\"bi\"");

        let t: GramType = serde_json::from_str("\"tri\"").unwrap();
        assert_eq!(t, GramType::Trigram);

        let result: Result<GramType, _> = serde_json::from_str("\"four\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GramType::Prefix), "pre");
    }
}
