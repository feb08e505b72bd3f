//! Read a dataset file into rows of trimmed text cells.
//! CSV goes through the `csv` crate; spreadsheet exports (.xlsx/.xls/.ods) use the first sheet.

use std::path::Path;

use calamine::Reader;

use crate::error::{Result, VizError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// File name used in diagnostics.
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Column index by exact header, then by case-insensitive trimmed header.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
            })
            .ok_or_else(|| VizError::MissingColumn {
                dataset: self.source.clone(),
                column: name.to_string(),
            })
    }

    /// Trimmed cell text; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.trim())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn read_table(path: &Path) -> Result<RawTable> {
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook(path, source)?,
        _ => read_csv(path, source)?,
    };
    tracing::debug!(
        source = %table.source,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "dataset table read"
    );
    Ok(table)
}

fn read_csv(path: &Path, source: String) -> Result<RawTable> {
    let csv_err = |source| VizError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable {
        source,
        headers,
        rows,
    })
}

fn read_workbook(path: &Path, source: String) -> Result<RawTable> {
    let workbook_err = |message: String| VizError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut wb = calamine::open_workbook_auto(path).map_err(|e| workbook_err(e.to_string()))?;
    let names = wb.sheet_names();
    let sheet_name = names
        .first()
        .cloned()
        .ok_or_else(|| workbook_err("no sheets in workbook".to_string()))?;
    let range = wb
        .worksheet_range(&sheet_name)
        .map_err(|e| workbook_err(e.to_string()))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();
    Ok(RawTable {
        source,
        headers,
        rows,
    })
}

fn cell_text(d: &calamine::Data) -> String {
    match d {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => format!("{}", f),
        calamine::Data::Int(i) => format!("{}", i),
        calamine::Data::Bool(b) => format!("{}", b),
        _ => format!("{:?}", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable {
            source: "sample.csv".to_string(),
            headers: vec!["State".to_string(), " Score ".to_string()],
            rows: vec![vec!["Texas".to_string()]],
        }
    }

    #[test]
    fn column_falls_back_to_case_insensitive_match() {
        let t = table();
        assert_eq!(t.column("State").unwrap(), 0);
        assert_eq!(t.column("score").unwrap(), 1);
    }

    #[test]
    fn missing_column_names_source_and_column() {
        let err = table().column("Rank").unwrap_err();
        assert_eq!(err.to_string(), "sample.csv: missing column 'Rank'");
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let t = table();
        assert_eq!(t.cell(0, 0), "Texas");
        assert_eq!(t.cell(0, 1), "");
        assert_eq!(t.cell(5, 0), "");
    }

    #[test]
    fn workbook_numbers_render_without_trailing_zero() {
        assert_eq!(cell_text(&calamine::Data::Float(7.0)), "7");
        assert_eq!(cell_text(&calamine::Data::Float(7.85)), "7.85");
        assert_eq!(cell_text(&calamine::Data::Int(12)), "12");
        assert_eq!(cell_text(&calamine::Data::String(" CA ".to_string())), "CA");
        assert_eq!(cell_text(&calamine::Data::Empty), "");
    }
}
