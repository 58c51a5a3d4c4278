use serde::{Deserialize, Serialize};

use crate::catalog::store::PostingCatalog;
use crate::core::posting::Posting;
use crate::core::profile::StudentProfile;
use crate::core::types::MatchTier;
use crate::matching::scoring::{MatchScore, ScoreBreakdown, MAX_SCORE};

/// A posting together with its score for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,

    /// Final score in `0..=100`
    pub match_score: u32,

    /// Profile skills that overlapped a required skill
    pub matched_skills: Vec<String>,

    /// Per-criterion points behind `match_score`
    #[serde(default)]
    pub breakdown: ScoreBreakdown,
}

impl ScoredPosting {
    #[must_use]
    pub fn new(posting: &Posting, score: MatchScore) -> Self {
        Self {
            posting: posting.clone(),
            match_score: score.score,
            matched_skills: score.matched_skills,
            breakdown: score.breakdown,
        }
    }

    #[must_use]
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

/// Default minimum score; results must score strictly above it
pub const DEFAULT_MIN_SCORE: u32 = 20;

/// Default maximum number of results
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingConfig {
    /// Postings scoring at or below this are dropped
    pub min_score: u32,
    /// Maximum number of results returned
    pub limit: usize,
    /// Scoring weights
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_RESULT_LIMIT,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

/// Points available to each scoring criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Skill overlap, split evenly across the profile's skills
    pub skills: f64,
    /// Field of study found in title or description
    pub field: f64,
    /// Location preference found in posting location
    pub location: f64,
    /// Compensation matches the paid preference
    pub compensation: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            field: 30.0,
            location: 20.0,
            compensation: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Scale weights so they sum to 100 points
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.skills + self.field + self.location + self.compensation;

        if total <= 0.0 || !total.is_finite() {
            return Self::default();
        }

        let scale = f64::from(MAX_SCORE) / total;
        Self {
            skills: self.skills * scale,
            field: self.field * scale,
            location: self.location * scale,
            compensation: self.compensation * scale,
        }
    }
}

/// Ranked results plus counts from each filtering stage
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Ranked results, best first
    pub results: Vec<ScoredPosting>,
    /// Postings scored
    pub evaluated: usize,
    /// Dropped because compensation did not match a strict paid preference
    pub excluded_by_pay: usize,
    /// Dropped for scoring at or below the minimum
    pub below_threshold: usize,
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    catalog: &'a PostingCatalog,
    /// Configuration including scoring weights and thresholds
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(catalog: &'a PostingCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(catalog: &'a PostingCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score a single posting without any filtering
    #[must_use]
    pub fn score_posting(&self, profile: &StudentProfile, posting: &Posting) -> ScoredPosting {
        let score =
            MatchScore::calculate_with_weights(profile, posting, &self.config.scoring_weights);
        ScoredPosting::new(posting, score)
    }

    /// Rank the catalog for a profile.
    ///
    /// Every posting is scored, then:
    /// 1. with a strict paid preference, postings of the other kind are dropped;
    /// 2. postings scoring `<= min_score` are dropped;
    /// 3. the rest are sorted by score descending, keeping catalog order for ties;
    /// 4. the list is cut to `limit` entries.
    #[must_use]
    pub fn find_matches(&self, profile: &StudentProfile) -> MatchReport {
        let scored: Vec<ScoredPosting> = self
            .catalog
            .postings
            .iter()
            .map(|posting| self.score_posting(profile, posting))
            .collect();
        let evaluated = scored.len();

        // Hard pay filter, applied on top of the compensation score term
        let preference = profile.paid_preference();
        let (kept, excluded): (Vec<_>, Vec<_>) = scored
            .into_iter()
            .partition(|s| preference.accepts(s.posting.is_paid));
        let excluded_by_pay = excluded.len();

        let before_threshold = kept.len();
        let mut results: Vec<ScoredPosting> = kept
            .into_iter()
            .filter(|s| s.match_score > self.config.min_score)
            .collect();
        let below_threshold = before_threshold - results.len();

        // Stable sort keeps catalog order among equal scores
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(self.config.limit);

        tracing::debug!(
            evaluated,
            excluded_by_pay,
            below_threshold,
            returned = results.len(),
            "Ranked postings for profile"
        );

        MatchReport {
            results,
            evaluated,
            excluded_by_pay,
            below_threshold,
        }
    }
}
