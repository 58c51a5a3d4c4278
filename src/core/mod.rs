//! Core data types for internship matching.
//!
//! - [`Posting`]: An internship posting from the catalog
//! - [`StudentProfile`]: A validated student profile
//! - [`PostingId`], [`YearOfStudy`], [`PaidPreference`]: Identifier and enumerated fields
//! - [`MatchTier`]: Coarse classification of a match score

pub mod posting;
pub mod profile;
pub mod types;

pub use posting::Posting;
pub use profile::StudentProfile;
pub use types::{MatchTier, PaidPreference, PostingId, YearOfStudy};
