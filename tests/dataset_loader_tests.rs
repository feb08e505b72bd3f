//! Dataset loaders against the CSV fixtures in tests/fixtures/datasets.

use std::path::{Path, PathBuf};

use petviz::data::breeds::read_breed_dataset;
use petviz::data::{load_breed_rankings, load_pet_ownership, load_regions, read_table};
use petviz::VizError;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("datasets")
        .join(name)
}

#[test]
fn ownership_is_cleaned_and_sorted_by_households() {
    let records = load_pet_ownership(&fixture_path("pet_ownership.csv")).expect("load");
    let species: Vec<&str> = records.iter().map(|r| r.species.as_str()).collect();
    assert_eq!(
        species,
        vec!["Dog", "Cat", "Freshwater fish", "Small mammals", "Bird", "Reptile"]
    );
    assert!((records[0].millions - 68.0).abs() < 1e-9);
    assert!((records[0].percent - 51.4).abs() < 1e-9);
}

#[test]
fn regions_keep_file_order_and_parse_percentages() {
    let regions = load_regions(&fixture_path("regions.csv")).expect("load");
    assert_eq!(regions.ids().collect::<Vec<_>>(), vec!["CA", "TX", "NY", "CO"]);
    let texas = regions.get("TX").expect("TX present");
    assert_eq!(texas.name, "Texas");
    assert_eq!(texas.rank, 2);
    assert!((texas.score - 7.10).abs() < 1e-9);
    assert!((texas.moved_percent - 19.5).abs() < 1e-9);
    assert!((texas.breakup_percent - 7.0).abs() < 1e-9);
}

#[test]
fn unparseable_percentage_fails_the_load() {
    let err = load_regions(&fixture_path("regions_bad_percent.csv")).unwrap_err();
    match err {
        VizError::InvalidField {
            dataset,
            row,
            value,
            ..
        } => {
            assert_eq!(dataset, "regions_bad_percent.csv");
            assert_eq!(row, 2);
            assert_eq!(value, "about a fifth");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_region_identifier_fails_the_load() {
    let err = load_regions(&fixture_path("regions_duplicate_id.csv")).unwrap_err();
    assert!(matches!(err, VizError::DuplicateRegion { ref id } if id == "CA"));
}

#[test]
fn missing_file_reports_path() {
    let err = load_regions(&fixture_path("nope.csv")).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn breeds_are_normalized_and_thin_breeds_dropped() {
    let rows = load_breed_rankings(&fixture_path("breeds.csv")).expect("load");
    let mut breeds: Vec<&str> = rows.iter().map(|r| r.breed.as_str()).collect();
    breeds.dedup();
    assert_eq!(
        breeds,
        vec!["Beagle", "French Bulldog", "German Shepherd Dog", "Labrador Retriever"]
    );
    assert_eq!(rows.len(), 13);
    assert!(rows.iter().all(|r| r.breed != "Boxer"));

    let labs: Vec<u32> = rows
        .iter()
        .filter(|r| r.breed == "Labrador Retriever")
        .map(|r| r.year)
        .collect();
    assert_eq!(labs, vec![2015, 2016, 2017, 2018]);
}

#[test]
fn at_most_one_rank_per_breed_and_year() {
    let dataset = read_breed_dataset(&fixture_path("breeds.csv")).expect("load");
    let mut seen = std::collections::HashSet::new();
    for row in &dataset.rankings {
        assert!(seen.insert((row.breed.clone(), row.year)), "duplicate {row:?}");
    }
    assert!(dataset.duplicates.is_empty());
}

#[test]
fn duplicate_breed_year_keeps_best_rank_once() {
    let path = fixture_path("breeds_duplicate_year.csv");
    let dataset = read_breed_dataset(&path).expect("load");
    assert_eq!(
        dataset.duplicates,
        vec![("Labrador Retriever".to_string(), 2015)]
    );

    let labs: Vec<(u32, u32)> = dataset
        .rankings
        .iter()
        .filter(|r| r.breed == "Labrador Retriever")
        .map(|r| (r.year, r.rank))
        .collect();
    assert_eq!(labs, vec![(2015, 1), (2016, 1)]);

    // Three rows but only two distinct years, so the breed is not charted.
    let charted = load_breed_rankings(&path).expect("load");
    assert!(charted.iter().all(|r| r.breed == "Beagle"));
    assert_eq!(charted.len(), 3);
}

#[test]
fn workbook_headers_come_from_first_row() {
    let table = read_table(&fixture_path("regions.xlsx")).expect("read workbook");
    assert_eq!(table.source, "regions.xlsx");
    assert_eq!(table.headers[0], "State");
    assert_eq!(table.headers[1], "State Abbreviations");
    assert_eq!(table.len(), 4);

    let rank = table.column("Rank").expect("rank column");
    let score = table.column("Score").expect("score column");
    assert_eq!(table.cell(0, rank), "1");
    assert_eq!(table.cell(0, score), "7.85");
    assert_eq!(table.cell(1, score), "7.1");
}

#[test]
fn workbook_regions_match_csv_regions() {
    let from_xlsx = load_regions(&fixture_path("regions.xlsx")).expect("load workbook");
    let from_csv = load_regions(&fixture_path("regions.csv")).expect("load csv");
    assert_eq!(from_xlsx.records(), from_csv.records());
}
