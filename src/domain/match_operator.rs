//! MatchOperator value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Array containment operator of a search predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOperator {
    /// The indexed array contains the target (`"array-contains"`).
    ContainsOne,
    /// The indexed array shares at least one element with the target
    /// (`"array-contains-any"`).
    ContainsAny,
}

impl MatchOperator {
    /// Get the operator name understood by the database.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContainsOne => "array-contains",
            Self::ContainsAny => "array-contains-any",
        }
    }

    /// Pick the full-text operator for a strictness flag.
    pub const fn for_strictness(strict: bool) -> Self {
        if strict {
            Self::ContainsOne
        } else {
            Self::ContainsAny
        }
    }
}

impl FromStr for MatchOperator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array-contains" => Ok(Self::ContainsOne),
            "array-contains-any" => Ok(Self::ContainsAny),
            other => Err(ValidationError::UnknownOperator(other.to_string())),
        }
    }
}

impl Serialize for MatchOperator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchOperator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
