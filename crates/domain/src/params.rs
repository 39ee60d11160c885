//! Enumerated query parameter types
//!
//! Closed enumerations parsed from lowercase wire-format tokens. Parsing an
//! unrecognized token into a caller-supplied parameter is a configuration
//! error; tokens arriving in response bodies are handled leniently by the
//! data model instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Response verbosity requested via the `detail_level` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Identifiers and names only.
    Low,
    /// Adds descriptive fields.
    Medium,
    /// The full record.
    High,
}

impl DetailLevel {
    /// Returns the lowercase wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(DomainError::InvalidEnumToken {
                token: other.to_string(),
                kind: "detail level",
            }),
        }
    }
}

/// Field to sort listing results on, sent as the `sort_on` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Sort on creation date.
    Created,
    /// Sort on price.
    Price,
    /// Sort on relevancy score.
    Score,
}

impl SortField {
    /// Returns the lowercase wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Price => "price",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "price" => Ok(Self::Price),
            "score" => Ok(Self::Score),
            other => Err(DomainError::InvalidEnumToken {
                token: other.to_string(),
                kind: "sort field",
            }),
        }
    }
}

/// Direction of a sort, sent as the `sort_order` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Up,
    /// Descending.
    Down,
}

impl SortOrder {
    /// Returns the lowercase wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(DomainError::InvalidEnumToken {
                token: other.to_string(),
                kind: "sort order",
            }),
        }
    }
}

/// A user's self-reported gender, as it appears in user records.
///
/// Response bodies may carry values outside the documented set, so this
/// enum parses leniently via [`Gender::from_token`] instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Withheld by the user.
    Private,
    /// Absent or unrecognized on the wire.
    #[default]
    Unknown,
}

impl Gender {
    /// Parses a wire token, degrading to [`Gender::Unknown`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "female" => Self::Female,
            "male" => Self::Male,
            "private" => Self::Private,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detail_level_tokens() {
        assert_eq!(DetailLevel::Low.as_str(), "low");
        assert_eq!(DetailLevel::Medium.as_str(), "medium");
        assert_eq!(DetailLevel::High.as_str(), "high");
        assert_eq!("medium".parse::<DetailLevel>(), Ok(DetailLevel::Medium));
    }

    #[test]
    fn test_unknown_detail_level_is_an_error() {
        let err = "extreme".parse::<DetailLevel>().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidEnumToken {
                token: "extreme".to_string(),
                kind: "detail level",
            }
        );
    }

    #[test]
    fn test_sort_tokens() {
        assert_eq!(SortField::Created.as_str(), "created");
        assert_eq!(SortOrder::Down.as_str(), "down");
        assert_eq!("up".parse::<SortOrder>(), Ok(SortOrder::Up));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_gender_parses_leniently() {
        assert_eq!(Gender::from_token("female"), Gender::Female);
        assert_eq!(Gender::from_token(""), Gender::Unknown);
        assert_eq!(Gender::from_token("robot"), Gender::Unknown);
    }
}
