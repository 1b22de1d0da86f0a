use csv::{ReaderBuilder, StringRecord};

use crate::core::{AppError, Result};

/// Rows included in the diagnostic preview attached to processing errors
pub const PREVIEW_ROWS: usize = 5;

/// An uploaded export split into its header and data rows
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl ParsedTable {
    /// First rows of the parsed table, for diagnostic error payloads
    pub fn preview(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .take(PREVIEW_ROWS)
            .map(|record| record.iter().map(str::to_string).collect())
            .collect()
    }
}

/// Decode and parse uploaded bytes as ';'-delimited CSV with a header row.
///
/// A file delimited with the wrong separator still parses here, as a single
/// concatenated column per row, and is rejected downstream by schema
/// validation. Files that cannot be decoded or that have inconsistent
/// record lengths fail with a processing error carrying a raw-row preview.
pub fn parse(bytes: &[u8]) -> Result<ParsedTable> {
    let text = decode(bytes)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::processing(format!("cannot read CSV header: {}", e), raw_preview(&text)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = ParsedTable {
        headers,
        rows: Vec::new(),
    };
    for record in reader.records() {
        match record {
            Ok(record) => table.rows.push(record),
            Err(e) => {
                // Prefer the rows that did parse; fall back to raw lines
                let preview = if table.rows.is_empty() {
                    raw_preview(&text)
                } else {
                    table.preview()
                };
                return Err(AppError::processing(
                    format!("cannot read CSV record: {}", e),
                    preview,
                ));
            }
        }
    }

    Ok(table)
}

fn decode(bytes: &[u8]) -> Result<String> {
    // Tolerate a UTF-8 BOM ahead of the header row
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);

    String::from_utf8(bytes.to_vec())
        .map_err(|_| AppError::processing("file is not valid UTF-8 text", Vec::new()))
}

/// Best-effort preview straight from the raw text, used when the CSV reader
/// itself fails and no parsed rows exist yet
fn raw_preview(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .skip(1)
        .take(PREVIEW_ROWS)
        .map(|line| line.split(';').map(str::to_string).collect())
        .collect()
}
