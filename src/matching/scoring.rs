use serde::{Deserialize, Serialize};

use crate::core::posting::Posting;
use crate::core::profile::StudentProfile;
use crate::core::types::MatchTier;
use crate::matching::engine::ScoringWeights;

/// Highest score a posting can receive
pub const MAX_SCORE: u32 = 100;

/// Safely convert usize to f64 for per-skill credit
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Points awarded by each criterion before rounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Skill overlap: `weight / skills.len()` per matching profile skill
    pub skills: f64,
    /// Field of study appears in title or description
    pub field: f64,
    /// Preferred location appears in posting location
    pub location: f64,
    /// Posting compensation satisfies the paid preference
    pub compensation: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.skills + self.field + self.location + self.compensation
    }
}

/// Score of one posting against one profile
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Per-criterion points
    pub breakdown: ScoreBreakdown,

    /// Final score: `round(min(total, 100))`
    pub score: u32,

    /// Profile skills that overlapped a required skill, in profile order
    pub matched_skills: Vec<String>,

    /// Tier derived from score
    pub tier: MatchTier,
}

impl MatchScore {
    /// Calculate match score with the default 40/30/20/10 weights
    #[must_use]
    pub fn calculate(profile: &StudentProfile, posting: &Posting) -> Self {
        Self::calculate_with_weights(profile, posting, &ScoringWeights::default())
    }

    /// Calculate match score with custom scoring weights
    #[must_use]
    pub fn calculate_with_weights(
        profile: &StudentProfile,
        posting: &Posting,
        weights: &ScoringWeights,
    ) -> Self {
        let weights = weights.normalized();

        let matched_skills = matching_skills(profile.skills(), &posting.skills_required);
        // Running sum, one credit per matched skill
        let mut skills = 0.0;
        if !profile.skills().is_empty() {
            let per_skill = weights.skills / count_to_f64(profile.skills().len());
            for _ in &matched_skills {
                skills += per_skill;
            }
        }

        let field_of_study = profile.field_of_study();
        let field = if contains_ignore_case(&posting.title, field_of_study)
            || contains_ignore_case(&posting.description, field_of_study)
        {
            weights.field
        } else {
            0.0
        };

        let location = match profile.location_preference() {
            Some(preferred) if contains_ignore_case(&posting.location, preferred) => {
                weights.location
            }
            _ => 0.0,
        };

        let compensation = if profile.paid_preference().accepts(posting.is_paid) {
            weights.compensation
        } else {
            0.0
        };

        let breakdown = ScoreBreakdown {
            skills,
            field,
            location,
            compensation,
        };
        let score = finalize_score(breakdown.total());

        Self {
            breakdown,
            score,
            matched_skills,
            tier: MatchTier::from_score(score),
        }
    }
}

/// Clamp to `[0, 100]` and round half away from zero
fn finalize_score(raw: f64) -> u32 {
    let clamped = raw.clamp(0.0, f64::from(MAX_SCORE));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
    {
        clamped.round() as u32
    }
}

/// Profile skills that overlap at least one required skill.
///
/// Two skills overlap when either contains the other, ignoring case. Each
/// profile skill is credited at most once no matter how many required
/// skills it overlaps.
#[must_use]
pub fn matching_skills(profile_skills: &[String], required: &[String]) -> Vec<String> {
    let required_lower: Vec<String> = required.iter().map(|r| r.to_lowercase()).collect();

    profile_skills
        .iter()
        .filter(|skill| {
            let skill_lower = skill.to_lowercase();
            required_lower
                .iter()
                .any(|req| req.contains(&skill_lower) || skill_lower.contains(req.as_str()))
        })
        .cloned()
        .collect()
}

/// Whether two skills overlap (case-insensitive containment in either direction)
#[must_use]
pub fn skills_overlap(a: &str, b: &str) -> bool {
    contains_ignore_case(a, b) || contains_ignore_case(b, a)
}

/// Case-insensitive substring test
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ProfileForm;
    use crate::core::types::{PaidPreference, YearOfStudy};

    fn profile(skills: &[&str], field: &str, location: &str, pay: PaidPreference) -> StudentProfile {
        let mut form = ProfileForm::new();
        form.set_name("Test Student");
        form.set_education("Test University");
        form.set_field_of_study(field);
        form.set_year_of_study(YearOfStudy::Junior);
        form.set_location_preference(location);
        form.set_paid_preference(pay);
        for skill in skills {
            form.add_skill(skill);
        }
        form.submit().unwrap()
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_matching_skills_substring_both_directions() {
        let required = skills(&["Machine Learning", "SQL"]);

        // Profile skill inside required skill
        assert_eq!(
            matching_skills(&skills(&["learning"]), &required),
            ["learning"]
        );
        // Required skill inside profile skill
        assert_eq!(
            matching_skills(&skills(&["PostgreSQL"]), &required),
            ["PostgreSQL"]
        );
        assert!(matching_skills(&skills(&["Rust"]), &required).is_empty());
    }

    #[test]
    fn test_profile_skill_credited_once() {
        // "R" overlaps several required skills but only counts once
        let required = skills(&["R", "React", "Research"]);
        let matched = matching_skills(&skills(&["R"]), &required);
        assert_eq!(matched, ["R"]);
    }

    #[test]
    fn test_data_science_example() {
        let student = profile(
            &["Python", "Machine Learning"],
            "Data Science",
            "",
            PaidPreference::Both,
        );
        let posting = Posting::new("2", "Data Science Intern", "Netflix", "Los Gatos, CA", true)
            .with_description("Help us understand user behavior.")
            .with_skills(["Python", "Machine Learning", "SQL", "Statistics", "R"]);

        let score = MatchScore::calculate(&student, &posting);
        assert_eq!(score.score, 80);
        assert_eq!(score.matched_skills, ["Python", "Machine Learning"]);
        assert!((score.breakdown.skills - 40.0).abs() < 1e-9);
        assert!((score.breakdown.field - 30.0).abs() < 1e-9);
        assert!(score.breakdown.location.abs() < 1e-9);
        assert!((score.breakdown.compensation - 10.0).abs() < 1e-9);
        assert_eq!(score.tier, MatchTier::Strong);
    }

    #[test]
    fn test_location_term_requires_preference() {
        let posting = Posting::new("x", "Intern", "Acme", "New York, NY", true);

        let anywhere = profile(&["Go"], "Law", "", PaidPreference::Both);
        assert!(MatchScore::calculate(&anywhere, &posting).breakdown.location.abs() < 1e-9);

        let nyc = profile(&["Go"], "Law", "new york", PaidPreference::Both);
        assert!((MatchScore::calculate(&nyc, &posting).breakdown.location - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_location_preference_matched_as_entered() {
        let sf = Posting::new("x", "Intern", "Acme", "San Francisco, CA", true);
        let remote = Posting::new("y", "Intern", "Acme", "Remote", true);

        // A lone space is a preference, and "San Francisco, CA" contains it
        let space = profile(&["Go"], "Law", " ", PaidPreference::Both);
        assert_eq!(MatchScore::calculate(&space, &sf).score, 30);

        // Leading whitespace is not trimmed away
        let padded = profile(&["Go"], "Law", " Remote", PaidPreference::Both);
        assert_eq!(MatchScore::calculate(&padded, &remote).score, 10);
    }

    #[test]
    fn test_compensation_term() {
        let unpaid_posting = Posting::new("x", "Intern", "Acme", "Remote", false);
        let wants_paid = profile(&["Go"], "Law", "", PaidPreference::Paid);
        let wants_unpaid = profile(&["Go"], "Law", "", PaidPreference::Unpaid);

        assert_eq!(MatchScore::calculate(&wants_paid, &unpaid_posting).score, 0);
        assert_eq!(MatchScore::calculate(&wants_unpaid, &unpaid_posting).score, 10);
    }

    #[test]
    fn test_skill_credit_accumulates_per_skill() {
        // 33 of 48 skills: the running sum is 27.49999999999999, so the total
        // of 87.49999999999999 rounds down; a single multiply would give 87.5
        let profile_skills: Vec<String> = (0..48).map(|i| format!("skill{i:02}")).collect();
        let refs: Vec<&str> = profile_skills.iter().map(String::as_str).collect();
        let student = profile(&refs, "Data Science", "San Francisco", PaidPreference::Both);
        let posting = Posting::new("x", "Data Science Intern", "Acme", "San Francisco, CA", true)
            .with_skills(profile_skills.iter().take(33).cloned());

        let score = MatchScore::calculate(&student, &posting);
        assert_eq!(score.matched_skills.len(), 33);
        assert!(score.breakdown.skills < 27.5);
        assert_eq!(score.score, 87);
    }

    #[test]
    fn test_partial_skill_credit_rounds() {
        // 1 of 3 skills: 40/3 = 13.33 + 10 (both) = 23.33 -> 23
        let student = profile(&["Python", "Rust", "Haskell"], "Law", "", PaidPreference::Both);
        let posting = Posting::new("x", "Intern", "Acme", "Remote", true).with_skills(["Python"]);
        assert_eq!(MatchScore::calculate(&student, &posting).score, 23);

        // 2 of 3 skills: 26.67 + 10 = 36.67 -> 37
        let posting = posting.with_skills(["Python", "Rust"]);
        assert_eq!(MatchScore::calculate(&student, &posting).score, 37);
    }

    #[test]
    fn test_full_score_is_100() {
        let student = profile(&["Python"], "Data", "Remote", PaidPreference::Paid);
        let posting = Posting::new("x", "Data Intern", "Acme", "Remote", true).with_skills(["Python"]);
        assert_eq!(MatchScore::calculate(&student, &posting).score, 100);
    }

    #[test]
    fn test_custom_weights_are_normalized() {
        let student = profile(&["Python"], "Data", "", PaidPreference::Both);
        let posting = Posting::new("x", "Intern", "Acme", "Remote", true).with_skills(["Python"]);

        // Skills only, doubled: normalized to skills=50, compensation=50
        let weights = ScoringWeights {
            skills: 2.0,
            field: 0.0,
            location: 0.0,
            compensation: 2.0,
        };
        let score = MatchScore::calculate_with_weights(&student, &posting, &weights);
        assert_eq!(score.score, 100);
        assert!((score.breakdown.skills - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_finalize_score_clamps() {
        assert_eq!(finalize_score(140.0), 100);
        assert_eq!(finalize_score(-5.0), 0);
        assert_eq!(finalize_score(20.5), 21);
        assert_eq!(finalize_score(20.49), 20);
    }

    #[test]
    fn test_skills_overlap() {
        assert!(skills_overlap("JavaScript", "java"));
        assert!(skills_overlap("java", "JavaScript"));
        assert!(!skills_overlap("C++", "C#"));
    }
}
