//! Request size limits for profile and filter input.
//!
//! These guard the web and CLI surfaces against oversized input. They do not
//! check content: names, locations and skills are free text.

use crate::collector::ProfileInput;
use crate::matching::filter::ResultFilter;

/// Maximum length of any single free-text profile field, in characters
pub const MAX_TEXT_FIELD_LENGTH: usize = 200;

/// Maximum number of skills in one profile
pub const MAX_SKILLS: usize = 50;

/// Maximum length of one skill, in characters
pub const MAX_SKILL_LENGTH: usize = 100;

/// Maximum length of the free-text search or location filter
pub const MAX_FILTER_LENGTH: usize = 200;

/// Maximum number of results accepted for re-filtering
pub const MAX_FILTER_RESULTS: usize = 100;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{field}' too long: exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Too many skills: exceeds {MAX_SKILLS}")]
    TooManySkills,
    #[error("Skill too long: exceeds {MAX_SKILL_LENGTH} characters")]
    SkillTooLong,
    #[error("Too many results: exceeds {MAX_FILTER_RESULTS}")]
    TooManyResults,
}

fn check_length(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::FieldTooLong { field, max })
    } else {
        Ok(())
    }
}

/// Check profile input against size limits before it reaches the form
///
/// # Errors
///
/// Returns the first limit that the input exceeds.
pub fn validate_profile_input(input: &ProfileInput) -> Result<(), ValidationError> {
    check_length(&input.name, "name", MAX_TEXT_FIELD_LENGTH)?;
    check_length(&input.education, "education", MAX_TEXT_FIELD_LENGTH)?;
    check_length(&input.field_of_study, "fieldOfStudy", MAX_TEXT_FIELD_LENGTH)?;
    if let Some(location) = &input.location_preference {
        check_length(location, "locationPreference", MAX_TEXT_FIELD_LENGTH)?;
    }

    if input.skills.len() > MAX_SKILLS {
        return Err(ValidationError::TooManySkills);
    }
    if input
        .skills
        .iter()
        .any(|s| s.chars().count() > MAX_SKILL_LENGTH)
    {
        return Err(ValidationError::SkillTooLong);
    }

    Ok(())
}

/// Check filter input against size limits
///
/// # Errors
///
/// Returns `FieldTooLong` if the search or location text is oversized.
pub fn validate_filter(filter: &ResultFilter) -> Result<(), ValidationError> {
    check_length(&filter.search, "search", MAX_FILTER_LENGTH)?;
    check_length(&filter.location.to_string(), "location", MAX_FILTER_LENGTH)
}

/// Check the number of results submitted for re-filtering
///
/// # Errors
///
/// Returns `TooManyResults` above [`MAX_FILTER_RESULTS`].
pub fn validate_result_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_FILTER_RESULTS {
        Err(ValidationError::TooManyResults)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfileInput {
        ProfileInput {
            name: "Alex".to_string(),
            education: "MIT".to_string(),
            field_of_study: "Physics".to_string(),
            year_of_study: Some("junior".to_string()),
            skills: vec!["Python".to_string()],
            location_preference: None,
            paid_preference: None,
        }
    }

    #[test]
    fn test_reasonable_input_passes() {
        assert_eq!(validate_profile_input(&input()), Ok(()));
    }

    #[test]
    fn test_long_field_rejected() {
        let mut long = input();
        long.education = "x".repeat(MAX_TEXT_FIELD_LENGTH + 1);
        assert_eq!(
            validate_profile_input(&long),
            Err(ValidationError::FieldTooLong {
                field: "education",
                max: MAX_TEXT_FIELD_LENGTH
            })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut wide = input();
        wide.name = "é".repeat(MAX_TEXT_FIELD_LENGTH);
        assert_eq!(validate_profile_input(&wide), Ok(()));
    }

    #[test]
    fn test_skill_limits() {
        let mut many = input();
        many.skills = (0..=MAX_SKILLS).map(|i| format!("skill{i}")).collect();
        assert_eq!(
            validate_profile_input(&many),
            Err(ValidationError::TooManySkills)
        );

        let mut long = input();
        long.skills = vec!["s".repeat(MAX_SKILL_LENGTH + 1)];
        assert_eq!(
            validate_profile_input(&long),
            Err(ValidationError::SkillTooLong)
        );
    }

    #[test]
    fn test_filter_limits() {
        let filter = ResultFilter {
            search: "q".repeat(MAX_FILTER_LENGTH + 1),
            ..ResultFilter::default()
        };
        assert!(validate_filter(&filter).is_err());
        assert!(validate_filter(&ResultFilter::default()).is_ok());
    }

    #[test]
    fn test_result_count_limit() {
        assert!(validate_result_count(MAX_FILTER_RESULTS).is_ok());
        assert_eq!(
            validate_result_count(MAX_FILTER_RESULTS + 1),
            Err(ValidationError::TooManyResults)
        );
    }
}
