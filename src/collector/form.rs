use serde::Deserialize;
use thiserror::Error;

use crate::core::profile::StudentProfile;
use crate::core::types::{PaidPreference, ParseEnumError, YearOfStudy};

/// Required profile fields, in the order they are checked on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Education,
    FieldOfStudy,
    YearOfStudy,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Education => write!(f, "education"),
            Self::FieldOfStudy => write!(f, "field of study"),
            Self::YearOfStudy => write!(f, "year of study"),
        }
    }
}

/// Reasons a profile cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(RequiredField),

    #[error("Please add at least one skill")]
    NoSkills,

    #[error(transparent)]
    InvalidValue(#[from] ParseEnumError),
}

/// Raw profile fields as they arrive over the wire, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub name: String,
    pub education: String,
    pub field_of_study: String,
    pub year_of_study: Option<String>,
    pub skills: Vec<String>,
    pub location_preference: Option<String>,
    pub paid_preference: Option<String>,
}

/// Mutable form state that collects profile fields until submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    name: String,
    education: String,
    field_of_study: String,
    year_of_study: Option<YearOfStudy>,
    skills: Vec<String>,
    location_preference: String,
    paid_preference: PaidPreference,
}

impl ProfileForm {
    /// Blank form; compensation preference starts at "both"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a form from wire input.
    ///
    /// Skills go through [`ProfileForm::add_skill`], so blanks and duplicates
    /// are dropped exactly as they would be when typed in one by one.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidValue` if the year of study or the paid
    /// preference is present but not one of the recognised values.
    pub fn from_input(input: &ProfileInput) -> Result<Self, ProfileError> {
        let mut form = Self::new();
        form.set_name(&input.name);
        form.set_education(&input.education);
        form.set_field_of_study(&input.field_of_study);

        if let Some(year) = input.year_of_study.as_deref().filter(|y| !y.trim().is_empty()) {
            form.set_year_of_study(year.parse()?);
        }
        if let Some(pay) = input.paid_preference.as_deref().filter(|p| !p.trim().is_empty()) {
            form.set_paid_preference(pay.parse()?);
        }
        if let Some(location) = &input.location_preference {
            form.set_location_preference(location);
        }
        for skill in &input.skills {
            form.add_skill(skill);
        }

        Ok(form)
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_education(&mut self, education: &str) {
        self.education = education.to_string();
    }

    pub fn set_field_of_study(&mut self, field: &str) {
        self.field_of_study = field.to_string();
    }

    pub fn set_year_of_study(&mut self, year: YearOfStudy) {
        self.year_of_study = Some(year);
    }

    pub fn set_location_preference(&mut self, location: &str) {
        self.location_preference = location.to_string();
    }

    pub fn set_paid_preference(&mut self, preference: PaidPreference) {
        self.paid_preference = preference;
    }

    /// Add a skill after trimming it.
    ///
    /// Returns `false` (and leaves the form untouched) when the trimmed skill
    /// is empty or already present. Duplicate detection is case-sensitive.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Remove the first skill exactly equal to `skill`
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Validate the form and produce an immutable profile.
    ///
    /// The form itself is not modified, so a failed submission can be
    /// corrected and retried.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingField` for the first blank required
    /// field, or `ProfileError::NoSkills` when no skill has been added.
    pub fn submit(&self) -> Result<StudentProfile, ProfileError> {
        require(&self.name, RequiredField::Name)?;
        require(&self.education, RequiredField::Education)?;
        require(&self.field_of_study, RequiredField::FieldOfStudy)?;
        let year_of_study = self
            .year_of_study
            .ok_or(ProfileError::MissingField(RequiredField::YearOfStudy))?;

        if self.skills.is_empty() {
            return Err(ProfileError::NoSkills);
        }

        // Kept as entered; only an empty string means no preference
        let location_preference =
            Some(self.location_preference.clone()).filter(|l| !l.is_empty());

        Ok(StudentProfile {
            name: self.name.clone(),
            education: self.education.clone(),
            field_of_study: self.field_of_study.clone(),
            year_of_study,
            skills: self.skills.clone(),
            location_preference,
            paid_preference: self.paid_preference,
        })
    }
}

fn require(value: &str, field: RequiredField) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        Err(ProfileError::MissingField(field))
    } else {
        Ok(())
    }
}
