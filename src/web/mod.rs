//! Web server for browser-based internship matching.
//!
//! This module provides an interactive web interface using Axum.
//! Students fill in a profile form, see ranked postings, and narrow them
//! with search, location, and pay filters.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! internship-navigator serve
//!
//! # Custom port and auto-open browser
//! internship-navigator serve --port 3000 --open
//!
//! # Bind to all interfaces
//! internship-navigator serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Profile form and results page
//! - `POST /api/match` - Rank the catalog for a profile, with optional filters
//! - `POST /api/filter` - Re-apply filters to a ranked list without re-scoring
//! - `GET /api/catalog` - List all postings in the catalog
//! - `GET /api/health` - Liveness check with the catalog size

pub mod server;
