//! Internship posting catalog.
//!
//! The catalog is a read-only list of postings. The default catalog is
//! compiled into the binary from `catalogs/internships.json` (checked by
//! `build.rs`); custom catalogs with the same layout can be loaded from disk.
//!
//! ## Example
//!
//! ```rust,no_run
//! use internship_navigator::PostingCatalog;
//! use internship_navigator::core::PostingId;
//! use std::path::Path;
//!
//! let catalog = PostingCatalog::load_embedded().unwrap();
//! for posting in &catalog.postings {
//!     println!("{}: {} at {}", posting.id, posting.title, posting.company);
//! }
//!
//! let netflix = catalog.get(&PostingId::new("2"));
//!
//! // Export, edit, load back
//! let json = catalog.to_json().unwrap();
//! let custom = PostingCatalog::load_from_file(Path::new("my_postings.json")).unwrap();
//! ```

pub mod store;
