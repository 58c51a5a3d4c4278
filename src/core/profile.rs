use serde::Serialize;

use crate::core::types::{PaidPreference, YearOfStudy};

/// A submitted student profile.
///
/// Profiles are only produced by [`crate::collector::ProfileForm::submit`],
/// which guarantees that the required fields are present and that at least
/// one skill was entered. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub(crate) name: String,
    pub(crate) education: String,
    pub(crate) field_of_study: String,
    pub(crate) year_of_study: YearOfStudy,
    pub(crate) skills: Vec<String>,
    pub(crate) location_preference: Option<String>,
    pub(crate) paid_preference: PaidPreference,
}

impl StudentProfile {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn education(&self) -> &str {
        &self.education
    }

    #[must_use]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    #[must_use]
    pub fn year_of_study(&self) -> YearOfStudy {
        self.year_of_study
    }

    /// Skills in entry order; never empty
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Preferred location, `None` when the student left it blank
    #[must_use]
    pub fn location_preference(&self) -> Option<&str> {
        self.location_preference.as_deref()
    }

    #[must_use]
    pub fn paid_preference(&self) -> PaidPreference {
        self.paid_preference
    }

    /// One-line summary: field, year and the first three skills
    #[must_use]
    pub fn summary(&self) -> String {
        let shown: Vec<&str> = self.skills.iter().take(3).map(String::as_str).collect();
        let mut line = format!(
            "{} • {} • {}",
            self.field_of_study,
            self.year_of_study.as_str(),
            shown.join(", ")
        );
        if self.skills.len() > 3 {
            line.push_str(&format!(" +{} more", self.skills.len() - 3));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_skills(skills: &[&str]) -> StudentProfile {
        StudentProfile {
            name: "Ada".to_string(),
            education: "State University".to_string(),
            field_of_study: "Computer Science".to_string(),
            year_of_study: YearOfStudy::Junior,
            skills: skills.iter().map(ToString::to_string).collect(),
            location_preference: None,
            paid_preference: PaidPreference::Both,
        }
    }

    #[test]
    fn test_summary_truncates_skills() {
        let profile = profile_with_skills(&["Rust", "Python", "SQL", "Git", "Docker"]);
        assert_eq!(
            profile.summary(),
            "Computer Science • junior • Rust, Python, SQL +2 more"
        );

        let short = profile_with_skills(&["Rust"]);
        assert_eq!(short.summary(), "Computer Science • junior • Rust");
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = profile_with_skills(&["Rust"]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["fieldOfStudy"], "Computer Science");
        assert_eq!(json["yearOfStudy"], "junior");
        assert_eq!(json["paidPreference"], "both");
        assert!(json["locationPreference"].is_null());
    }
}
