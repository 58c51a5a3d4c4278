use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/internships.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let postings = catalog.get("postings").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'postings' field\n\
             The catalog must have a top-level 'postings' array.\n"
        );
    });

    let postings = postings.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'postings' must be an array\n\
             Got: {postings}\n"
        );
    });

    let total_skills = validate_postings(postings);

    println!(
        "cargo:warning=Validated catalog: {} postings, {total_skills} required skills",
        postings.len()
    );
}

fn validate_postings(postings: &[serde_json::Value]) -> usize {
    let mut seen_ids = HashSet::new();
    let mut total_skills = 0;

    for (i, posting) in postings.iter().enumerate() {
        let posting_id = posting
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_posting_fields(posting, posting_id, i);

        assert!(
            seen_ids.insert(posting_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate posting id '{posting_id}' (index {i})\n"
        );

        total_skills += validate_posting_skills(posting, posting_id);
    }

    total_skills
}

fn validate_posting_fields(posting: &serde_json::Value, posting_id: &str, index: usize) {
    for field in ["id", "title", "company", "description", "location", "applicationLink"] {
        let value = posting.get(field).and_then(|v| v.as_str());
        assert!(
            value.is_some(),
            "\n\nCATALOG BUILD ERROR: Posting '{posting_id}' (index {index}) missing string field '{field}'\n"
        );
    }

    assert!(
        posting.get("isPaid").is_some_and(serde_json::Value::is_boolean),
        "\n\nCATALOG BUILD ERROR: Posting '{posting_id}' (index {index}) missing boolean field 'isPaid'\n"
    );
}

fn validate_posting_skills(posting: &serde_json::Value, posting_id: &str) -> usize {
    let skills = posting
        .get("skillsRequired")
        .and_then(|s| s.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Posting '{posting_id}' missing 'skillsRequired' array\n"
            );
        });

    for (j, skill) in skills.iter().enumerate() {
        let text = skill.as_str().unwrap_or_default();
        assert!(
            !text.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Posting '{posting_id}' skill {j} is empty or not a string\n\
             Required skills must be non-empty text.\n"
        );
    }

    skills.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/internships.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
