//! Tabular ingestion for batch uploads: CSV via `csv`, Excel workbooks via `calamine`.

use calamine::{Data, Reader};
use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Column expected to hold review text unless configured otherwise.
pub const DEFAULT_REVIEW_COLUMN: &str = "review";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Excel,
}

impl TableFormat {
    /// Detects the format from a file name, case-insensitively.
    pub fn from_file_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(TableFormat::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(TableFormat::Excel)
        } else {
            Err(AnalysisError::unsupported(
                "unsupported file type, please upload a CSV or Excel file",
            ))
        }
    }
}

/// Named columns and ordered rows of string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ReviewTable {
    /// Builds a table, padding short rows with empty cells.
    /// A row with more cells than there are headers is rejected.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let mut padded = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(AnalysisError::unsupported(format!(
                    "row {} has {} fields, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            row.resize(width, String::new());
            padded.push(row);
        }
        Ok(ReviewTable {
            headers,
            rows: padded,
        })
    }

    /// Headers are kept exactly as written.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AnalysisError::unsupported("the file has no header row"));
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        ReviewTable::new(headers, rows)
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Reads the first sheet of an .xlsx/.xls workbook. The first row is the header row;
    /// every cell is rendered as a string, empty cells as "".
    pub fn from_workbook_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AnalysisError::unsupported("the workbook has no sheets"))??;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(row) => row.iter().map(cell_text).collect(),
            None => return Err(AnalysisError::unsupported("the sheet has no header row")),
        };
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AnalysisError::unsupported("the sheet has no header row"));
        }

        let rows = rows
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        ReviewTable::new(headers, rows)
    }

    /// Parses an uploaded source, dispatching on its file name.
    pub fn from_source(file_name: &str, bytes: &[u8]) -> Result<Self> {
        match TableFormat::from_file_name(file_name)? {
            TableFormat::Csv => Self::from_csv_reader(bytes),
            TableFormat::Excel => Self::from_workbook_bytes(bytes),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Self::from_source(&name, &bytes)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell values of the named column in row order. Missing cells are empty strings.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}
