//! Regional devotion dataset: one record per state, kept in file order.
//! File order is the choropleth's native region order, which the highlight
//! restyle arrays index into.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::data::parse::{parse_integer, parse_number, parse_percent, FieldContext};
use crate::data::table::read_table;
use crate::error::{Result, VizError};

pub const NAME_COLUMN: &str = "State";
pub const ID_COLUMN: &str = "State Abbreviations";
pub const SCORE_COLUMN: &str = "Score";
pub const RANK_COLUMN: &str = "Rank";
pub const MOVED_COLUMN: &str =
    "Percentage of dog owners who moved from an apartment to a house so their dog would have a yard";
pub const BREAKUP_COLUMN: &str =
    "Percentage of dog owners who broke up with a significant other who didn't like their dog";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRecord {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub rank: u32,
    pub moved_percent: f64,
    pub breakup_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    records: Vec<RegionRecord>,
    index: HashMap<String, usize>,
}

impl RegionTable {
    pub fn from_records(records: Vec<RegionRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), i).is_some() {
                return Err(VizError::DuplicateRegion {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records, index })
    }

    pub fn get(&self, id: &str) -> Option<&RegionRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn load_regions(path: &Path) -> Result<RegionTable> {
    let table = read_table(path)?;
    let name_col = table.column(NAME_COLUMN)?;
    let id_col = table.column(ID_COLUMN)?;
    let score_col = table.column(SCORE_COLUMN)?;
    let rank_col = table.column(RANK_COLUMN)?;
    let moved_col = table.column(MOVED_COLUMN)?;
    let breakup_col = table.column(BREAKUP_COLUMN)?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let id = table.cell(row, id_col);
        let ctx = |column| FieldContext {
            dataset: &table.source,
            row: row + 1,
            column,
        };
        if id.is_empty() {
            return Err(VizError::InvalidField {
                dataset: table.source.clone(),
                row: row + 1,
                column: ID_COLUMN.to_string(),
                value: String::new(),
                reason: "missing identifier".to_string(),
            });
        }
        records.push(RegionRecord {
            id: id.to_string(),
            name: table.cell(row, name_col).to_string(),
            score: parse_number(table.cell(row, score_col), ctx(SCORE_COLUMN))?,
            rank: parse_integer(table.cell(row, rank_col), ctx(RANK_COLUMN))?,
            moved_percent: parse_percent(table.cell(row, moved_col), ctx(MOVED_COLUMN))?,
            breakup_percent: parse_percent(table.cell(row, breakup_col), ctx(BREAKUP_COLUMN))?,
        });
    }
    if records.is_empty() {
        return Err(VizError::EmptyDataset {
            dataset: table.source,
        });
    }

    let regions = RegionTable::from_records(records)?;
    tracing::info!(source = %table.source, regions = regions.len(), "regional dataset loaded");
    Ok(regions)
}
