//! Profile collection and submission.
//!
//! A [`ProfileForm`] accumulates field edits and skill entries. Calling
//! [`ProfileForm::submit`] checks that name, education, field of study and
//! year of study are filled in and that at least one skill was added, then
//! returns an immutable [`crate::core::StudentProfile`].
//!
//! ```rust
//! use internship_navigator::collector::ProfileForm;
//! use internship_navigator::core::YearOfStudy;
//!
//! let mut form = ProfileForm::new();
//! form.set_name("Jordan");
//! form.set_education("State University");
//! form.set_field_of_study("Data Science");
//! form.set_year_of_study(YearOfStudy::Junior);
//! assert!(form.submit().is_err()); // no skills yet
//!
//! form.add_skill("Python");
//! let profile = form.submit().unwrap();
//! assert_eq!(profile.skills(), ["Python"]);
//! ```

pub mod form;

pub use form::{ProfileError, ProfileForm, ProfileInput, RequiredField};
