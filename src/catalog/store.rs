use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::posting::Posting;
use crate::core::types::PostingId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate posting id in catalog: {0}")]
    DuplicateId(PostingId),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub postings: Vec<Posting>,
}

/// The read-only posting catalog.
///
/// Postings keep the order they were loaded in; the matching engine relies
/// on that order to break score ties.
#[derive(Debug, Default)]
pub struct PostingCatalog {
    /// All postings, in catalog order
    pub postings: Vec<Posting>,

    /// Index: posting ID -> index in postings vec
    id_to_index: HashMap<PostingId, usize>,
}

impl PostingCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON cannot be parsed. `build.rs`
    /// validates it at compile time, so this only fails on a broken build.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/internships.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or duplicate posting ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for posting in data.postings {
            catalog.add_posting(posting)?;
        }

        tracing::debug!("Loaded catalog with {} postings", catalog.len());
        Ok(catalog)
    }

    /// Add a posting to the end of the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if a posting with the same id exists.
    pub fn add_posting(&mut self, posting: Posting) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&posting.id) {
            return Err(CatalogError::DuplicateId(posting.id));
        }
        self.id_to_index
            .insert(posting.id.clone(), self.postings.len());
        self.postings.push(posting);
        Ok(())
    }

    /// Get a posting by ID
    #[must_use]
    pub fn get(&self, id: &PostingId) -> Option<&Posting> {
        self.id_to_index.get(id).map(|&idx| &self.postings[idx])
    }

    /// Titles of the first `n` postings, in catalog order
    #[must_use]
    pub fn titles(&self, n: usize) -> Vec<&str> {
        self.postings
            .iter()
            .take(n)
            .map(|p| p.title.as_str())
            .collect()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            postings: self.postings.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of postings in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = PostingCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 25);
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = PostingCatalog::load_embedded().unwrap();

        let posting = catalog.get(&PostingId::new("2")).unwrap();
        assert_eq!(posting.title, "Data Science Intern");
        assert_eq!(posting.company, "Netflix");
        assert!(posting.is_paid);
        assert!(posting.skills_required.contains(&"Machine Learning".to_string()));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = PostingCatalog::load_embedded().unwrap();
        assert!(catalog.get(&PostingId::new("999")).is_none());
    }

    #[test]
    fn test_unpaid_postings_have_no_salary() {
        let catalog = PostingCatalog::load_embedded().unwrap();
        let unpaid: Vec<&str> = catalog
            .postings
            .iter()
            .filter(|p| !p.is_paid)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(unpaid, ["12", "19", "20"]);
        assert!(catalog
            .postings
            .iter()
            .filter(|p| !p.is_paid)
            .all(|p| p.salary.is_none()));
    }

    #[test]
    fn test_catalog_to_json_round_trips() {
        let catalog = PostingCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"postings\""));
        assert!(json.contains("\"skillsRequired\""));

        let reloaded = PostingCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.postings, catalog.postings);
    }

    #[test]
    fn test_titles_limited() {
        let catalog = PostingCatalog::load_embedded().unwrap();
        let titles = catalog.titles(10);
        assert_eq!(titles.len(), 10);
        assert_eq!(titles[0], "Software Engineering Intern");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{
            "version": "1.0.0",
            "postings": [
                {"id": "1", "title": "A", "company": "X", "description": "", "skillsRequired": [],
                 "location": "Remote", "isPaid": true, "applicationLink": "https://a"},
                {"id": "1", "title": "B", "company": "Y", "description": "", "skillsRequired": [],
                 "location": "Remote", "isPaid": false, "applicationLink": "https://b"}
            ]
        }"#;
        let err = PostingCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "1"));
    }

    #[test]
    fn test_add_posting() {
        let mut catalog = PostingCatalog::new();
        assert!(catalog.is_empty());

        catalog
            .add_posting(Posting::new("a", "Test Intern", "Acme", "Remote", true))
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(&PostingId::new("a")).unwrap().company,
            "Acme"
        );
    }
}
