use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::core::types::ParseEnumError;
use crate::matching::engine::ScoredPosting;
use crate::matching::scoring::contains_ignore_case;

/// Location choices offered by the results page
pub const LOCATION_PRESETS: &[&str] = &["remote", "san francisco", "new york", "london", "seattle"];

/// Location visibility filter: everything, or postings whose location
/// contains the given text (case-insensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Contains(String),
}

impl LocationFilter {
    #[must_use]
    pub fn matches(&self, location: &str) -> bool {
        match self {
            Self::All => true,
            Self::Contains(text) => contains_ignore_case(location, text),
        }
    }
}

impl FromStr for LocationFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Contains(s.to_string()))
        }
    }
}

impl std::fmt::Display for LocationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Contains(text) => write!(f, "{text}"),
        }
    }
}

impl Serialize for LocationFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocationFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(text.parse().unwrap_or_default())
    }
}

/// Compensation visibility filter
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PayFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl PayFilter {
    #[must_use]
    pub fn matches(self, is_paid: bool) -> bool {
        match self {
            Self::All => true,
            Self::Paid => is_paid,
            Self::Unpaid => !is_paid,
        }
    }
}

impl FromStr for PayFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            _ => Err(ParseEnumError {
                kind: "pay filter",
                value: s.to_string(),
                expected: "all, paid, unpaid",
            }),
        }
    }
}

/// User-driven visibility filters over an already ranked result list.
///
/// All three predicates must pass for a posting to stay visible. Filtering
/// never re-scores or re-orders; the default value shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultFilter {
    /// Free text matched against title, company and description
    pub search: String,
    pub location: LocationFilter,
    pub pay: PayFilter,
}

impl ResultFilter {
    #[must_use]
    pub fn is_pass_all(&self) -> bool {
        self.search.is_empty() && self.location == LocationFilter::All && self.pay == PayFilter::All
    }

    /// Whether a single result is visible under this filter
    #[must_use]
    pub fn matches(&self, result: &ScoredPosting) -> bool {
        let posting = &result.posting;

        let search_ok = self.search.is_empty()
            || contains_ignore_case(&posting.title, &self.search)
            || contains_ignore_case(&posting.company, &self.search)
            || contains_ignore_case(&posting.description, &self.search);

        search_ok && self.location.matches(&posting.location) && self.pay.matches(posting.is_paid)
    }

    /// Visible results, in their original rank order
    #[must_use]
    pub fn apply<'a>(&self, results: &'a [ScoredPosting]) -> Vec<&'a ScoredPosting> {
        results.iter().filter(|r| self.matches(r)).collect()
    }
}
