use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a posting in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub String);

impl PostingId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when an enumerated profile or filter value is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Academic year of the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum YearOfStudy {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    Graduate,
}

impl YearOfStudy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Freshman => "freshman",
            Self::Sophomore => "sophomore",
            Self::Junior => "junior",
            Self::Senior => "senior",
            Self::Graduate => "graduate",
        }
    }
}

impl FromStr for YearOfStudy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "freshman" => Ok(Self::Freshman),
            "sophomore" => Ok(Self::Sophomore),
            "junior" => Ok(Self::Junior),
            "senior" => Ok(Self::Senior),
            "graduate" => Ok(Self::Graduate),
            _ => Err(ParseEnumError {
                kind: "year of study",
                value: s.to_string(),
                expected: "freshman, sophomore, junior, senior, graduate",
            }),
        }
    }
}

impl std::fmt::Display for YearOfStudy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Freshman => write!(f, "Freshman (1st Year)"),
            Self::Sophomore => write!(f, "Sophomore (2nd Year)"),
            Self::Junior => write!(f, "Junior (3rd Year)"),
            Self::Senior => write!(f, "Senior (4th Year)"),
            Self::Graduate => write!(f, "Graduate Student"),
        }
    }
}

/// Compensation preference stated in the profile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PaidPreference {
    Paid,
    Unpaid,
    #[default]
    Both,
}

impl PaidPreference {
    /// Whether a posting with the given compensation satisfies this preference
    #[must_use]
    pub fn accepts(self, is_paid: bool) -> bool {
        match self {
            Self::Both => true,
            Self::Paid => is_paid,
            Self::Unpaid => !is_paid,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Both => "both",
        }
    }
}

impl FromStr for PaidPreference {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "both" => Ok(Self::Both),
            _ => Err(ParseEnumError {
                kind: "paid preference",
                value: s.to_string(),
                expected: "paid, unpaid, both",
            }),
        }
    }
}

impl std::fmt::Display for PaidPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid Only"),
            Self::Unpaid => write!(f, "Unpaid Only"),
            Self::Both => write!(f, "Both Paid & Unpaid"),
        }
    }
}

/// How strong a match is, derived from its score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Fair,
    Good,
    Strong,
}

impl MatchTier {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Good
        } else {
            Self::Fair
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strong => write!(f, "STRONG"),
            Self::Good => write!(f, "GOOD"),
            Self::Fair => write!(f, "FAIR"),
        }
    }
}
