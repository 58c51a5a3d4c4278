//! Internship matching engine, scoring, and result filtering.
//!
//! - [`MatchingEngine`]: Scores the catalog for a profile and ranks the results
//! - [`MatchScore`]: Per-criterion score of one posting against one profile
//! - [`ResultFilter`]: Search / location / pay visibility filters over ranked results
//!
//! ## Scoring
//!
//! Each posting starts at zero and collects points from four criteria:
//!
//! | Criterion     | Points | Awarded when |
//! |---------------|--------|--------------|
//! | Skills        | 40     | `40 / n` per profile skill overlapping a required skill |
//! | Field         | 30     | field of study appears in title or description |
//! | Location      | 20     | preferred location appears in posting location |
//! | Compensation  | 10     | posting pay matches the paid preference (always for "both") |
//!
//! Skill overlap and all text tests are case-insensitive substring checks.
//! The total is clamped to 100 and rounded.
//!
//! ## Ranking
//!
//! A strict paid preference also removes postings of the other kind. Scores
//! of 20 or less are dropped, the rest are sorted best first (ties keep
//! catalog order) and cut to 20.
//!
//! ## Example
//!
//! ```rust
//! use internship_navigator::{MatchingEngine, PostingCatalog};
//! use internship_navigator::collector::ProfileForm;
//! use internship_navigator::core::YearOfStudy;
//!
//! let catalog = PostingCatalog::load_embedded().unwrap();
//!
//! let mut form = ProfileForm::new();
//! form.set_name("Jordan");
//! form.set_education("State University");
//! form.set_field_of_study("Data Science");
//! form.set_year_of_study(YearOfStudy::Senior);
//! form.add_skill("Python");
//! form.add_skill("Machine Learning");
//! let profile = form.submit().unwrap();
//!
//! let report = MatchingEngine::new(&catalog).find_matches(&profile);
//! for result in &report.results {
//!     println!("{}% {} at {}", result.match_score, result.posting.title, result.posting.company);
//! }
//! ```

pub mod engine;
pub mod filter;
pub mod scoring;

pub use engine::{MatchReport, MatchingConfig, MatchingEngine, ScoredPosting, ScoringWeights};
pub use filter::{LocationFilter, PayFilter, ResultFilter};
pub use scoring::MatchScore;
