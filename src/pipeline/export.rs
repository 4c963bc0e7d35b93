// src/pipeline/export.rs

//! CSV export of the accumulated row set.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::LeadRecord;

/// Header list: the union of field names across all rows, ordered by first
/// occurrence.
pub fn headers(rows: &[LeadRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for row in rows {
        for (key, _) in row.fields() {
            if seen.insert(key.clone()) {
                headers.push(key);
            }
        }
    }
    headers
}

/// Serialize rows as CSV: header first, every field double-quoted with
/// embedded quotes doubled, CRLF row terminators. Fields absent from a row
/// are emitted as empty strings.
pub fn write_csv<W: Write>(rows: &[LeadRecord], writer: W) -> Result<()> {
    let headers = headers(rows);
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(&headers)?;
    for row in rows {
        let fields: HashMap<String, String> = row.fields().into_iter().collect();
        let record: Vec<&str> = headers
            .iter()
            .map(|header| fields.get(header).map(String::as_str).unwrap_or(""))
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the export artifact and report the row count.
pub fn export(rows: &[LeadRecord], path: &Path) -> Result<usize> {
    let file = File::create(path)?;
    write_csv(rows, file)?;
    log::info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
