use crate::infra::parse_instant;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use talent_desk::config::{AppConfig, CatalogConfig};
use talent_desk::error::AppError;
use talent_desk::filter::FilterQuery;
use talent_desk::tracking::{Catalog, CategoryValue, Collection, Interview, ListBoard, Listing};

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Collection to search: jobs, candidates, interviews or messages
    pub(crate) collection: Collection,
    /// Case-insensitive text matched against the collection's search fields
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// Exact status (jobs, candidates, interviews)
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Exact department (jobs)
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Exact applied-for position (candidates)
    #[arg(long)]
    pub(crate) position: Option<String>,
    /// Exact interview round or message type
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    /// Reference instant for seeded timestamps (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Candidate CSV export to search instead of the seeded candidates
    /// (falls back to APP_CANDIDATES_CSV)
    #[arg(long)]
    pub(crate) candidates_csv: Option<PathBuf>,
    /// Print the full snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SearchArgs {
    fn filter_query(&self) -> FilterQuery {
        let selections = [
            ("status", &self.status),
            ("department", &self.department),
            ("applied_position", &self.position),
            ("type", &self.kind),
        ];

        selections.into_iter().fold(
            FilterQuery::new(self.query.clone().unwrap_or_default()),
            |query, (dimension, value)| match value {
                Some(value) => query.with_category(dimension, value.clone()),
                None => query,
            },
        )
    }

    fn catalog_config(&self) -> Result<CatalogConfig, AppError> {
        match &self.candidates_csv {
            Some(path) => Ok(CatalogConfig {
                candidates_csv: Some(path.clone()),
            }),
            None => Ok(AppConfig::load()?.catalog),
        }
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let now = args.now.unwrap_or_else(Utc::now);
    let catalog = Catalog::from_config(&args.catalog_config()?, now)?;

    let query = args.filter_query();
    match args.collection {
        Collection::Jobs => render_board(catalog.jobs(), &query, args.json, |_| None),
        Collection::Candidates => render_board(catalog.candidates(), &query, args.json, |_| None),
        Collection::Interviews if args.json => {
            let rows = catalog
                .interviews()
                .snapshot(&query)?
                .map_records(|interview| interview.row(now));
            print_json(&rows)
        }
        Collection::Interviews => render_board(
            catalog.interviews(),
            &query,
            args.json,
            |interview: &Interview| Some(interview.timing(now).label().to_string()),
        ),
        Collection::Messages => render_board(catalog.messages(), &query, args.json, |_| None),
    }
}

fn render_board<R, F>(
    board: &ListBoard<R>,
    query: &FilterQuery,
    json: bool,
    annotate: F,
) -> Result<(), AppError>
where
    R: Listing,
    F: Fn(&R) -> Option<String>,
{
    let snapshot = board.snapshot(query)?;

    if json {
        return print_json(&snapshot);
    }

    println!(
        "{} (showing {} of {})",
        snapshot.collection, snapshot.showing, snapshot.total
    );

    let badges: Vec<String> = snapshot
        .badges
        .iter()
        .map(|entry| format!("{} ({})", entry.value, entry.count))
        .collect();
    println!("{}: {}", snapshot.badge_dimension, badges.join(" | "));

    for (dimension, values) in &snapshot.options {
        println!("{dimension} options: {}", values.join(", "));
    }

    if snapshot.records.is_empty() {
        println!("- no records match the current filters");
        return Ok(());
    }

    for record in &snapshot.records {
        match annotate(*record) {
            Some(note) => println!("- [{}] {} ({note})", record.record_id(), record.summary_line()),
            None => println!("- [{}] {}", record.record_id(), record.summary_line()),
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let catalog = Catalog::from_config(&AppConfig::load()?.catalog, Utc::now())?;
    let report = catalog.hiring_report().view();
    let inbox = catalog.inbox_summary();
    let dashboard = catalog.dashboard();

    if args.json {
        let payload = serde_json::json!({
            "dashboard": dashboard,
            "hiring": report,
            "inbox": inbox,
        });
        return print_json(&payload);
    }

    println!("Dashboard");
    println!(
        "- {} active jobs | {} candidates ({} new) | {} interviews this week ({} today) | {:.1}% hired",
        dashboard.active_jobs,
        dashboard.total_candidates,
        dashboard.new_applications,
        dashboard.interviews_this_week,
        dashboard.interviews_today,
        dashboard.hire_rate_pct
    );
    println!("Recent activity:");
    for event in &dashboard.recent_activity {
        println!("  - {} [{}]", event.headline(), event.status);
    }
    println!("Recent jobs:");
    for job in &dashboard.recent_jobs {
        println!(
            "  - {} ({} applicants, {})",
            job.title,
            job.applicants,
            job.status.label()
        );
    }

    println!("\nHiring report");
    println!(
        "- {} days to hire | {} per hire | {}% offers accepted",
        report.headline.time_to_hire_days,
        report.headline.cost_per_hire_display(),
        report.headline.offer_acceptance_pct
    );
    println!(
        "- {} applications | {} hires | {:.1}% overall hire rate",
        report.total_applications, report.total_hires, report.overall_hire_rate_pct
    );
    println!("Source effectiveness:");
    for source in &report.sources {
        println!(
            "  - {}: {} applications, {} hires ({:.1}%)",
            source.source, source.applications, source.hires, source.hire_rate_pct
        );
    }
    println!("Hiring funnel:");
    for stage in &report.funnel {
        println!(
            "  - {}: {} ({:.1}%)",
            stage.stage, stage.count, stage.conversion_pct
        );
    }
    if let Some(best) = catalog.hiring_report().most_effective_source() {
        println!("Most effective source: {}", best.source);
    }

    println!(
        "\nInbox: {} messages | {} unread | {} starred",
        inbox.total, inbox.unread, inbox.starred
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(collection: Collection) -> SearchArgs {
        SearchArgs {
            collection,
            query: None,
            status: None,
            department: None,
            position: None,
            kind: None,
            now: None,
            candidates_csv: None,
            json: false,
        }
    }

    #[test]
    fn filter_query_only_sets_given_dimensions() {
        let mut search = args(Collection::Candidates);
        search.query = Some("react".to_string());
        search.position = Some("Senior Frontend Developer".to_string());

        let query = search.filter_query();
        assert_eq!(query.q, "react");
        assert_eq!(query.categories.len(), 1);
        assert_eq!(
            query.selection("applied_position"),
            "Senior Frontend Developer"
        );
    }

    #[test]
    fn search_rejects_dimensions_outside_the_collection() {
        let mut search = args(Collection::Messages);
        search.department = Some("Design".to_string());
        let error = run_search(search).expect_err("department is not a message dimension");
        assert!(matches!(error, AppError::Query(_)));
    }

    #[test]
    fn explicit_csv_flag_wins_over_environment() {
        let mut search = args(Collection::Candidates);
        search.candidates_csv = Some(PathBuf::from("exports/candidates.csv"));
        let config = search.catalog_config().expect("flag needs no environment");
        assert_eq!(
            config.candidates_csv,
            Some(PathBuf::from("exports/candidates.csv"))
        );
    }

    #[test]
    fn search_honours_configured_candidate_import() {
        let fixture = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../crates/talent-desk/tests/data/candidates.csv"
        );
        std::env::set_var("APP_CANDIDATES_CSV", fixture);
        let config = args(Collection::Candidates).catalog_config();
        std::env::remove_var("APP_CANDIDATES_CSV");

        let config = config.expect("config loads");
        assert_eq!(config.candidates_csv, Some(PathBuf::from(fixture)));
        let catalog = Catalog::from_config(&config, Utc::now()).expect("fixture imports");
        assert_eq!(catalog.candidates().len(), 4);
    }

    #[test]
    fn search_runs_for_every_collection() {
        for collection in [
            Collection::Jobs,
            Collection::Candidates,
            Collection::Interviews,
            Collection::Messages,
        ] {
            run_search(args(collection)).expect("search renders");
        }
    }
}
