//! Breed popularity rankings by year, normalized to one canonical name per breed.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::data::parse::{parse_integer, FieldContext};
use crate::data::table::read_table;
use crate::error::{Result, VizError};

pub const BREED_COLUMN: &str = "Breed";
pub const YEAR_COLUMN: &str = "Year";
pub const RANK_COLUMN: &str = "Rank";

/// A breed needs this many yearly rankings to get a line in the bump chart.
pub const MIN_YEARS_PRESENT: usize = 3;

/// Spellings seen across yearly publications. Names not listed are already canonical.
const BREED_SYNONYMS: &[(&str, &str)] = &[
    ("French Bulldogs", "French Bulldog"),
    ("Labrador Retrievers", "Labrador Retriever"),
    ("Retrievers (Labrador)", "Labrador Retriever"),
    ("Golden Retrievers", "Golden Retriever"),
    ("Retrievers (Golden)", "Golden Retriever"),
    ("German Shepherd Dogs", "German Shepherd Dog"),
    ("Poodles", "Poodle"),
    ("Bulldogs", "Bulldog"),
    ("Beagles", "Beagle"),
    ("Rottweilers", "Rottweiler"),
    ("Dachshunds", "Dachshund"),
    ("German Shorthaired Pointers", "German Shorthaired Pointer"),
    ("Pointers (German Shorthaired)", "German Shorthaired Pointer"),
    ("Yorkshire Terriers", "Yorkshire Terrier"),
    ("Pembroke Welsh Corgis", "Pembroke Welsh Corgi"),
    ("Boxers", "Boxer"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedRank {
    #[serde(rename = "Breed")]
    pub breed: String,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BreedDataset {
    /// Every (canonical breed, year) ranking, one per pair.
    pub rankings: Vec<BreedRank>,
    /// (breed, year) pairs that appeared more than once; the best rank was kept.
    pub duplicates: Vec<(String, u32)>,
}

pub fn normalize_breed(raw: &str) -> &str {
    let trimmed = raw.trim();
    BREED_SYNONYMS
        .iter()
        .find(|(from, _)| *from == trimmed)
        .map(|(_, to)| *to)
        .unwrap_or(trimmed)
}

/// Keep breeds ranked in at least `min_years` distinct years. Output is sorted
/// by (breed, year) so the result does not depend on input order.
pub fn retain_established_breeds(rows: Vec<BreedRank>, min_years: usize) -> Vec<BreedRank> {
    let mut years_by_breed: HashMap<&str, Vec<u32>> = HashMap::new();
    for row in &rows {
        let years = years_by_breed.entry(row.breed.as_str()).or_default();
        if !years.contains(&row.year) {
            years.push(row.year);
        }
    }
    let keep: HashSet<String> = years_by_breed
        .into_iter()
        .filter(|(_, years)| years.len() >= min_years)
        .map(|(breed, _)| breed.to_string())
        .collect();

    let mut retained: Vec<BreedRank> = rows
        .into_iter()
        .filter(|row| keep.contains(&row.breed))
        .collect();
    retained.sort_by(|a, b| {
        a.breed
            .cmp(&b.breed)
            .then(a.year.cmp(&b.year))
            .then(a.rank.cmp(&b.rank))
    });
    retained.dedup_by(|a, b| a.breed == b.breed && a.year == b.year);
    retained
}

/// Read and normalize the rankings file. No retention filter is applied here.
pub fn read_breed_dataset(path: &Path) -> Result<BreedDataset> {
    let table = read_table(path)?;
    let breed_col = table.column(BREED_COLUMN)?;
    let year_col = table.column(YEAR_COLUMN)?;
    let rank_col = table.column(RANK_COLUMN)?;

    let mut best: BTreeMap<(String, u32), u32> = BTreeMap::new();
    let mut duplicates = Vec::new();
    for row in 0..table.len() {
        let raw_breed = table.cell(row, breed_col);
        if raw_breed.is_empty() {
            continue;
        }
        let ctx = |column| FieldContext {
            dataset: &table.source,
            row: row + 1,
            column,
        };
        let year = parse_integer(table.cell(row, year_col), ctx(YEAR_COLUMN))?;
        let rank = parse_integer(table.cell(row, rank_col), ctx(RANK_COLUMN))?;
        let key = (normalize_breed(raw_breed).to_string(), year);
        match best.get_mut(&key) {
            Some(existing) => {
                tracing::warn!(
                    breed = %key.0,
                    year,
                    kept = (*existing).min(rank),
                    "duplicate breed ranking for year"
                );
                *existing = (*existing).min(rank);
                duplicates.push(key);
            }
            None => {
                best.insert(key, rank);
            }
        }
    }
    if best.is_empty() {
        return Err(VizError::EmptyDataset {
            dataset: table.source,
        });
    }

    let rankings = best
        .into_iter()
        .map(|((breed, year), rank)| BreedRank { breed, year, rank })
        .collect();
    Ok(BreedDataset {
        rankings,
        duplicates,
    })
}

/// Load the rankings ready for charting: normalized names, established breeds only.
pub fn load_breed_rankings(path: &Path) -> Result<Vec<BreedRank>> {
    let dataset = read_breed_dataset(path)?;
    let total = dataset.rankings.len();
    let retained = retain_established_breeds(dataset.rankings, MIN_YEARS_PRESENT);
    tracing::info!(
        rows = total,
        retained = retained.len(),
        "breed rankings loaded"
    );
    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(breed: &str, year: u32, rank: u32) -> BreedRank {
        BreedRank {
            breed: breed.to_string(),
            year,
            rank,
        }
    }

    #[test]
    fn synonyms_map_to_canonical_and_unknown_pass_through() {
        assert_eq!(normalize_breed("Retrievers (Labrador)"), "Labrador Retriever");
        assert_eq!(normalize_breed("French Bulldogs"), "French Bulldog");
        assert_eq!(normalize_breed("Labrador Retriever"), "Labrador Retriever");
        assert_eq!(
            normalize_breed("Cavalier King Charles Spaniel"),
            "Cavalier King Charles Spaniel"
        );
    }

    #[test]
    fn two_years_excluded_three_years_included() {
        let mut rows = Vec::new();
        for year in 2015..2025 {
            rows.push(rank("Poodle", year, 5));
        }
        rows.push(rank("Boxer", 2015, 9));
        rows.push(rank("Boxer", 2016, 9));
        rows.push(rank("Beagle", 2015, 6));
        rows.push(rank("Beagle", 2019, 7));
        rows.push(rank("Beagle", 2024, 8));

        let retained = retain_established_breeds(rows, MIN_YEARS_PRESENT);
        assert!(retained.iter().all(|r| r.breed != "Boxer"));
        assert_eq!(retained.iter().filter(|r| r.breed == "Beagle").count(), 3);
        assert_eq!(retained.iter().filter(|r| r.breed == "Poodle").count(), 10);
    }

    #[test]
    fn filter_is_order_independent_and_idempotent() {
        let rows = vec![
            rank("Boxer", 2017, 10),
            rank("Beagle", 2015, 6),
            rank("Beagle", 2016, 6),
            rank("Boxer", 2015, 10),
            rank("Beagle", 2017, 7),
            rank("Boxer", 2016, 9),
            rank("Pug", 2015, 8),
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        let forward = retain_established_breeds(rows, 3);
        let backward = retain_established_breeds(reversed, 3);
        assert_eq!(forward, backward);
        assert_eq!(retain_established_breeds(forward.clone(), 3), forward);
    }
}
