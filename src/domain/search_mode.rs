//! SearchMode value object.

use super::errors::ValidationError;
use super::gram_type::GramType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A search capability that can be requested for a field.
///
/// There are exactly two modes. Each one fixes the field-name prefix and the
/// kind of tokens indexed for it.
///
/// # Example
///
/// ```
/// use searchable_fields::domain::{GramType, SearchMode};
///
/// let mode: SearchMode = "autoComplete".parse().unwrap();
/// assert_eq!(mode.field_prefix(), "ac");
/// assert_eq!(mode.gram_type(), GramType::Prefix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchMode {
    /// Substring search over trigrams
    FullTextSearch,
    /// Word-prefix search
    AutoComplete,
}

impl SearchMode {
    /// Every mode, in the order the index builder evaluates them.
    pub const ALL: [SearchMode; 2] = [SearchMode::FullTextSearch, SearchMode::AutoComplete];

    /// Get the name used in requests (`"fullTextSearch"`, `"autoComplete"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTextSearch => "fullTextSearch",
            Self::AutoComplete => "autoComplete",
        }
    }

    /// Get the field-name prefix for this mode.
    pub const fn field_prefix(self) -> &'static str {
        match self {
            Self::FullTextSearch => "fts",
            Self::AutoComplete => "ac",
        }
    }

    /// Get the gram type indexed and queried for this mode.
    pub const fn gram_type(self) -> GramType {
        match self {
            Self::FullTextSearch => GramType::Trigram,
            Self::AutoComplete => GramType::Prefix,
        }
    }

    /// Look up a mode by its request name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Look up a mode by its field-name prefix.
    pub fn from_field_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.field_prefix() == prefix)
    }

    /// Resolve a query-side mode name.
    ///
    /// Anything other than `"fullTextSearch"` queries the autocomplete field.
    pub fn for_query(name: &str) -> Self {
        match Self::from_name(name) {
            Some(Self::FullTextSearch) => Self::FullTextSearch,
            _ => Self::AutoComplete,
        }
    }
}

impl FromStr for SearchMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}

// Serde support - serialize as the request name
impl Serialize for SearchMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Serde support - deserialize from the request name with validation
impl<'de> Deserialize<'de> for SearchMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
