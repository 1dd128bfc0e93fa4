//! Writes the augmented table: original columns plus a trailing `Sentiment` column.

use std::io::Write;
use std::path::Path;

use crate::aggregator::BatchResult;
use crate::error::{AnalysisError, Result};
use crate::table::ReviewTable;

pub const SENTIMENT_COLUMN: &str = "Sentiment";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "sentiment_results.csv";

pub fn write_csv<W: Write>(writer: W, table: &ReviewTable, batch: &BatchResult) -> Result<()> {
    if table.len() != batch.len() {
        return Err(AnalysisError::Export(format!(
            "table has {} rows but batch has {} records",
            table.len(),
            batch.len()
        )));
    }

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = table.headers().iter().map(|h| h.as_str()).collect();
    header.push(SENTIMENT_COLUMN);
    wtr.write_record(&header)
        .map_err(|e| AnalysisError::Export(e.to_string()))?;

    for (row, record) in table.rows().iter().zip(&batch.records) {
        let mut out: Vec<&str> = row.iter().map(|c| c.as_str()).collect();
        out.push(record.category.as_str());
        wtr.write_record(&out)
            .map_err(|e| AnalysisError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(table: &ReviewTable, batch: &BatchResult) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, table, batch)?;
    String::from_utf8(buf).map_err(|e| AnalysisError::Export(e.to_string()))
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, table: &ReviewTable, batch: &BatchResult) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(std::io::BufWriter::new(file), table, batch)
}
