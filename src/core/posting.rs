use serde::{Deserialize, Serialize};

use crate::core::types::PostingId;

/// An internship posting in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Unique identifier
    pub id: PostingId,

    pub title: String,

    pub company: String,

    pub description: String,

    /// Skills the employer asks for, in display order
    pub skills_required: Vec<String>,

    /// Free-text location (e.g. "San Francisco, CA", "Remote")
    pub location: String,

    pub is_paid: bool,

    /// Salary text, only meaningful for paid postings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    /// Outbound link where the student applies
    pub application_link: String,
}

impl Posting {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        is_paid: bool,
    ) -> Self {
        Self {
            id: PostingId::new(id),
            title: title.into(),
            company: company.into(),
            description: String::new(),
            skills_required: Vec::new(),
            location: location.into(),
            is_paid,
            salary: None,
            application_link: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_required = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    #[must_use]
    pub fn with_application_link(mut self, link: impl Into<String>) -> Self {
        self.application_link = link.into();
        self
    }

    /// Compensation as shown to the student: the salary text when paid,
    /// "Paid" when no salary is listed, otherwise "Unpaid".
    #[must_use]
    pub fn compensation_label(&self) -> &str {
        if self.is_paid {
            self.salary.as_deref().unwrap_or("Paid")
        } else {
            "Unpaid"
        }
    }
}
