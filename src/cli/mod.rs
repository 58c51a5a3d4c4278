//! Command-line interface for internship-navigator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Build a student profile from flags and rank the catalog against it
//! - **catalog**: List, show, or export internship postings
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Rank postings for a profile
//! internship-navigator search --name Jordan --education "State University" \
//!     --field "Data Science" --year senior --skill Python --skill "Machine Learning"
//!
//! # Only show remote, paid results
//! internship-navigator search ... --location-filter remote --pay-filter paid
//!
//! # JSON output for scripting
//! internship-navigator --format json search ...
//!
//! # Start web UI
//! internship-navigator serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::PostingCatalog;

pub mod catalog;
pub mod search;

#[derive(Parser)]
#[command(name = "internship-navigator")]
#[command(version)]
#[command(about = "Match student profiles against a catalog of internship postings")]
#[command(
    long_about = "internship-navigator ranks internship postings for a student profile.\n\nEach posting is scored on four criteria:\n- Skill overlap with the posting's required skills\n- Field of study relevance\n- Location preference\n- Compensation preference\n\nResults can be narrowed afterwards by free-text search, location, and pay without re-scoring."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank internship postings for a student profile
    Search(search::SearchArgs),

    /// Inspect the posting catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub insight: InsightArgs,
}

/// Flags for the optional insight service, shared by `search` and `serve`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InsightArgs {
    /// Insight service endpoint URL; no endpoint disables the insight
    #[arg(long, env = "INSIGHT_ENDPOINT")]
    pub insight_endpoint: Option<String>,

    /// Bearer token for the insight service
    #[arg(long, env = "INSIGHT_API_KEY", hide_env_values = true)]
    pub insight_api_key: Option<String>,
}

impl InsightArgs {
    #[must_use]
    pub fn to_config(&self) -> crate::insight::InsightConfig {
        crate::insight::InsightConfig {
            endpoint: self.insight_endpoint.clone(),
            api_key: self.insight_api_key.clone(),
            timeout: None,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a catalog from `path`, or the embedded one when no path is given
pub(crate) fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<PostingCatalog> {
    let catalog = if let Some(path) = path {
        PostingCatalog::load_from_file(path)?
    } else {
        PostingCatalog::load_embedded()?
    };
    Ok(catalog)
}
