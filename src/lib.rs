//! # internship-navigator
//!
//! A library for matching student profiles against a catalog of internship postings.
//!
//! A student describes themselves once: field of study, year, skills, and
//! location and pay preferences. Every posting in the catalog is scored
//! against that profile, weak and unwanted postings are dropped, and the rest
//! come back ranked best first. The ranked list can then be narrowed by
//! search text, location, and pay without being re-scored.
//!
//! ## Features
//!
//! - **Fuzzy skill matching**: Case-insensitive substring overlap in either direction
//! - **Weighted scoring**: Skills, field relevance, location, and compensation
//! - **Hard pay filter**: A strict paid/unpaid preference removes the other kind
//! - **Post-ranking filters**: Search, location, and pay visibility filters
//! - **Optional insight**: Best-effort advisory text from a remote service
//!
//! ## Example
//!
//! ```rust,no_run
//! use internship_navigator::{MatchingEngine, PostingCatalog, ProfileForm, ResultFilter};
//! use internship_navigator::core::YearOfStudy;
//!
//! // Load the embedded catalog of postings
//! let catalog = PostingCatalog::load_embedded().unwrap();
//!
//! // Collect a profile
//! let mut form = ProfileForm::new();
//! form.set_name("Jordan");
//! form.set_education("State University");
//! form.set_field_of_study("Data Science");
//! form.set_year_of_study(YearOfStudy::Senior);
//! form.add_skill("Python");
//! let profile = form.submit().unwrap();
//!
//! // Rank postings, then narrow to remote ones
//! let report = MatchingEngine::new(&catalog).find_matches(&profile);
//! let filter = ResultFilter { location: "remote".parse().unwrap(), ..ResultFilter::default() };
//!
//! for result in filter.apply(&report.results) {
//!     println!("{}: {}%", result.posting.title, result.match_score);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Posting catalog storage
//! - [`collector`]: Profile form and validation
//! - [`core`]: Core data types for postings and profiles
//! - [`matching`]: Matching engine, scoring, and result filters
//! - [`insight`]: Optional remote insight client
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based matching

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod core;
pub mod insight;
pub mod matching;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::PostingCatalog;
pub use collector::{ProfileError, ProfileForm};
pub use core::posting::Posting;
pub use core::profile::StudentProfile;
pub use matching::engine::{MatchReport, MatchingEngine, ScoredPosting};
pub use matching::filter::ResultFilter;
