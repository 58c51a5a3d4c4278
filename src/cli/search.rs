use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::PostingCatalog;
use crate::cli::{load_catalog, InsightArgs, OutputFormat};
use crate::collector::{ProfileForm, ProfileInput};
use crate::core::profile::StudentProfile;
use crate::core::types::{PaidPreference, YearOfStudy};
use crate::insight::InsightClient;
use crate::matching::engine::{
    MatchReport, MatchingConfig, MatchingEngine, ScoredPosting, DEFAULT_MIN_SCORE,
    DEFAULT_RESULT_LIMIT,
};
use crate::matching::filter::{PayFilter, ResultFilter};
use crate::matching::scoring::skills_overlap;
use crate::utils::validation::{validate_filter, validate_profile_input};

#[derive(Args)]
pub struct SearchArgs {
    /// Student name
    #[arg(long, default_value = "")]
    pub name: String,

    /// School or university
    #[arg(long, default_value = "")]
    pub education: String,

    /// Field of study (e.g., "Data Science")
    #[arg(long = "field", default_value = "")]
    pub field_of_study: String,

    /// Year of study
    #[arg(long = "year", value_enum)]
    pub year_of_study: Option<YearOfStudy>,

    /// A skill; repeat for several (e.g., --skill Python --skill SQL)
    #[arg(short, long = "skill")]
    pub skills: Vec<String>,

    /// Preferred location (e.g., "San Francisco", "Remote")
    #[arg(long)]
    pub location: Option<String>,

    /// Compensation preference
    #[arg(long, value_enum, default_value = "both")]
    pub pay: PaidPreference,

    /// Only show results whose title, company, or description contains this text
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only show results whose location contains this text ("all" for no filter)
    #[arg(long, default_value = "all")]
    pub location_filter: String,

    /// Only show paid or unpaid results
    #[arg(long, value_enum, default_value = "all")]
    pub pay_filter: PayFilter,

    /// Maximum number of ranked results
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULT_LIMIT)]
    pub limit: usize,

    /// Results must score strictly above this
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u32,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub insight: InsightArgs,
}

impl SearchArgs {
    fn profile_input(&self) -> ProfileInput {
        ProfileInput {
            name: self.name.clone(),
            education: self.education.clone(),
            field_of_study: self.field_of_study.clone(),
            year_of_study: self.year_of_study.map(|y| y.as_str().to_string()),
            skills: self.skills.clone(),
            location_preference: self.location.clone(),
            paid_preference: Some(self.pay.as_str().to_string()),
        }
    }

    fn result_filter(&self) -> ResultFilter {
        ResultFilter {
            search: self.search.clone(),
            location: self.location_filter.parse().unwrap_or_default(),
            pay: self.pay_filter,
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let input = args.profile_input();
    validate_profile_input(&input)?;
    let profile = ProfileForm::from_input(&input)?.submit()?;

    let filter = args.result_filter();
    validate_filter(&filter)?;

    let catalog = load_catalog(args.catalog.as_ref())?;
    if verbose {
        eprintln!("Loaded catalog with {} postings", catalog.len());
        eprintln!("Profile: {}", profile.summary());
    }

    let config = MatchingConfig {
        min_score: args.min_score,
        limit: args.limit,
        ..MatchingConfig::default()
    };
    let engine = MatchingEngine::with_config(&catalog, config);
    let report = engine.find_matches(&profile);
    let visible = filter.apply(&report.results);

    if verbose {
        eprintln!(
            "Scored {} postings: {} excluded by pay preference, {} at or below {}",
            report.evaluated, report.excluded_by_pay, report.below_threshold, args.min_score
        );
        if !filter.is_pass_all() {
            eprintln!(
                "Filters hide {} of {} results",
                report.results.len() - visible.len(),
                report.results.len()
            );
        }
    }

    let insight = fetch_insight(&args.insight, &profile, &catalog);

    match format {
        OutputFormat::Text => print_text_results(&report, &visible, insight.as_deref(), verbose),
        OutputFormat::Json => print_json_results(&profile, &report, &visible, insight.as_deref())?,
        OutputFormat::Tsv => print_tsv_results(&visible),
    }

    Ok(())
}

/// Ask the insight service, when one is configured, on a one-off runtime.
///
/// Never fails: the ranking is already computed, so any problem here is
/// logged and the insight is left out.
fn fetch_insight(
    args: &InsightArgs,
    profile: &StudentProfile,
    catalog: &PostingCatalog,
) -> Option<String> {
    let client = InsightClient::from_config_or_warn(&args.to_config())?;
    match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(client.fetch_best_effort(profile, catalog)),
        Err(e) => {
            tracing::warn!("Could not start runtime for insight request: {e}");
            None
        }
    }
}

fn print_text_results(
    report: &MatchReport,
    visible: &[&ScoredPosting],
    insight: Option<&str>,
    verbose: bool,
) {
    println!("{} of {} results", visible.len(), report.results.len());

    if let Some(text) = insight {
        println!("\nInsight:\n{text}");
    }

    if report.results.is_empty() {
        println!("\nNo internships matched this profile.");
        println!("Try adding more skills or setting compensation to \"both\".");
        return;
    }
    if visible.is_empty() {
        println!("\nNo results match the current filters.");
        return;
    }

    for (i, result) in visible.iter().enumerate() {
        let posting = &result.posting;
        println!("{}", "─".repeat(60));
        println!(
            "\n#{} {} at {} ({}% {})",
            i + 1,
            posting.title,
            posting.company,
            result.match_score,
            result.tier()
        );
        println!("   Location:     {}", posting.location);
        println!("   Compensation: {}", posting.compensation_label());

        let required: Vec<String> = posting
            .skills_required
            .iter()
            .map(|skill| {
                if result
                    .matched_skills
                    .iter()
                    .any(|m| skills_overlap(m, skill))
                {
                    format!("{skill}*")
                } else {
                    skill.clone()
                }
            })
            .collect();
        println!("   Skills:       {}", required.join(", "));
        if !result.matched_skills.is_empty() {
            println!("   You match:    {}", result.matched_skills.join(", "));
        }

        if verbose {
            let b = &result.breakdown;
            println!(
                "   Breakdown:    skills {:.1}, field {:.1}, location {:.1}, compensation {:.1}",
                b.skills, b.field, b.location, b.compensation
            );
            println!("   {}", posting.description);
        }

        println!("   Apply:        {}", posting.application_link);
    }
    println!("{}", "─".repeat(60));
    println!("* required skill matching your profile");
}

fn print_json_results(
    profile: &StudentProfile,
    report: &MatchReport,
    visible: &[&ScoredPosting],
    insight: Option<&str>,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "profile": profile,
        "total": report.results.len(),
        "visibleCount": visible.len(),
        "evaluated": report.evaluated,
        "excludedByPay": report.excluded_by_pay,
        "belowThreshold": report.below_threshold,
        "insight": insight,
        "results": visible,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(visible: &[&ScoredPosting]) {
    println!("rank\tid\ttitle\tcompany\tlocation\tcompensation\tscore\ttier\tmatched_skills");
    for (i, result) in visible.iter().enumerate() {
        let posting = &result.posting;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            posting.id,
            posting.title,
            posting.company,
            posting.location,
            posting.compensation_label(),
            result.match_score,
            result.tier(),
            result.matched_skills.join(",")
        );
    }
}
