use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};
use crate::core::posting::Posting;
use crate::core::types::PostingId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all postings in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only list paid postings
        #[arg(long, conflicts_with = "unpaid")]
        paid: bool,

        /// Only list unpaid postings
        #[arg(long)]
        unpaid: bool,
    },

    /// Show details of a specific posting
    Show {
        /// Posting ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            catalog,
            paid,
            unpaid,
        } => {
            let is_paid = match (paid, unpaid) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            run_list(catalog, is_paid, format, verbose)
        }
        CatalogCommands::Show { id, catalog } => run_show(&id, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    is_paid: Option<bool>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_ref())?;

    if verbose {
        eprintln!("Loaded catalog with {} postings", catalog.len());
    }

    let filtered: Vec<&Posting> = catalog
        .postings
        .iter()
        .filter(|p| is_paid.map_or(true, |paid| p.is_paid == paid))
        .collect();

    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = filtered
                .iter()
                .map(|p| p.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let title_width = filtered
                .iter()
                .map(|p| p.title.chars().count().min(35))
                .max()
                .unwrap_or(5)
                .max(5);
            let company_width = filtered
                .iter()
                .map(|p| p.company.chars().count().min(25))
                .max()
                .unwrap_or(7)
                .max(7);
            let location_width = filtered
                .iter()
                .map(|p| p.location.chars().count())
                .max()
                .unwrap_or(8)
                .max(8);

            let total_width = id_width + title_width + company_width + location_width + 14 + 4;

            println!("Internship Catalog ({} postings)\n", filtered.len());
            println!(
                "{:<id_w$} {:<title_w$} {:<co_w$} {:<loc_w$} {:>14}",
                "ID",
                "Title",
                "Company",
                "Location",
                "Compensation",
                id_w = id_width,
                title_w = title_width,
                co_w = company_width,
                loc_w = location_width
            );
            println!("{}", "-".repeat(total_width));

            for p in &filtered {
                println!(
                    "{:<id_w$} {:<title_w$} {:<co_w$} {:<loc_w$} {:>14}",
                    p.id,
                    truncate(&p.title, title_width),
                    truncate(&p.company, company_width),
                    p.location,
                    p.compensation_label(),
                    id_w = id_width,
                    title_w = title_width,
                    co_w = company_width,
                    loc_w = location_width
                );
                if verbose {
                    println!("  └─ Skills: {}", p.skills_required.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\ttitle\tcompany\tlocation\tis_paid\tcompensation\tskills");
            for p in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    p.id,
                    p.title,
                    p.company,
                    p.location,
                    p.is_paid,
                    p.compensation_label(),
                    p.skills_required.join(",")
                );
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_ref())?;

    let posting = catalog
        .get(&PostingId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Posting '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Posting: {}\n", posting.title);
            println!("ID:           {}", posting.id);
            println!("Company:      {}", posting.company);
            println!("Location:     {}", posting.location);
            println!("Compensation: {}", posting.compensation_label());
            println!("\nDescription: {}", posting.description);
            println!("\nRequired skills:");
            for skill in &posting.skills_required {
                println!("  - {skill}");
            }
            println!("\nApply: {}", posting.application_link);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(posting)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalue");
            println!("id\t{}", posting.id);
            println!("title\t{}", posting.title);
            println!("company\t{}", posting.company);
            println!("location\t{}", posting.location);
            println!("is_paid\t{}", posting.is_paid);
            println!("compensation\t{}", posting.compensation_label());
            println!("skills\t{}", posting.skills_required.join(","));
            println!("application_link\t{}", posting.application_link);
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_ref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} postings to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
