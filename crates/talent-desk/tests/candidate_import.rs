use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use talent_desk::config::CatalogConfig;
use talent_desk::filter::FilterQuery;
use talent_desk::tracking::{
    CandidateCsvImporter, CandidateImportError, CandidateStatus, Catalog,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/candidates.csv")
}

#[test]
fn importer_reads_quoted_locations_and_skills() {
    let candidates = CandidateCsvImporter::from_path(fixture_path()).expect("import succeeds");
    assert_eq!(candidates.len(), 4);

    let omar = &candidates[1];
    assert_eq!(omar.location, "Denver, CO");
    assert_eq!(omar.skills, vec!["Kubernetes", "Terraform", "Go"]);
    assert_eq!(omar.status, CandidateStatus::Interview);
    assert_eq!(omar.applied_position, "Backend Engineer");

    let tom = &candidates[3];
    assert_eq!(tom.rating, 0.0);
    assert!(tom.phone.is_empty());
}

#[test]
fn imported_candidates_replace_the_seed() {
    let now = Utc
        .with_ymd_and_hms(2025, 10, 6, 9, 0, 0)
        .single()
        .expect("valid instant");
    let config = CatalogConfig {
        candidates_csv: Some(fixture_path()),
    };
    let catalog = Catalog::from_config(&config, now).expect("catalog loads");
    let board = catalog.candidates();

    assert_eq!(board.len(), 4);
    assert_eq!(
        board.options("applied_position").expect("options present"),
        ["QA Engineer", "Backend Engineer", "UX Designer", "Data Scientist"]
    );
    assert_eq!(board.badges().get("rejected"), Some(0));

    let matched = board
        .search(&FilterQuery::new("typescript"))
        .expect("valid query");
    let names: Vec<&str> = matched.iter().map(|candidate| candidate.name.as_str()).collect();
    assert_eq!(names, vec!["Nina Park"]);

    // Seeded collections are untouched by the import.
    assert_eq!(catalog.jobs().len(), 6);
}

#[test]
fn malformed_rows_surface_csv_errors() {
    let data = "id,name,position,status\n1,Nina Park\n";
    let error = CandidateCsvImporter::from_reader(data.as_bytes()).expect_err("short row");
    assert!(matches!(error, CandidateImportError::Csv(_)));
}
