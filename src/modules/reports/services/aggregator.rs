use std::collections::HashMap;

use csv::StringRecord;
use rust_decimal::Decimal;

use crate::core::{locale, AppError, Result};
use crate::modules::reports::models::{CountrySummary, SummaryReport};
use crate::modules::reports::services::schema;

/// Fold validated data rows into one summary per country.
///
/// The rate-plan identifier column is skipped, every monetary cell is
/// normalized before summing, and groups keep the order in which their
/// country first appeared. The tax-rate cell is captured verbatim from the
/// first row of each group and never recomputed. A single malformed
/// monetary cell aborts the whole aggregation; no partial report is built.
pub fn aggregate(rows: &[StringRecord]) -> Result<SummaryReport> {
    let mut summaries: Vec<CountrySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (offset, record) in rows.iter().enumerate() {
        // Header occupies line 1 of the file, data starts at line 2
        let row = offset + 2;
        let country = cell(record, schema::COUNTRY);
        let amounts = parse_amounts(record, row)?;

        let pos = match index.get(country) {
            Some(&pos) => pos,
            None => {
                let tax_rate = cell(record, schema::TAX_RATE).to_string();
                index.insert(country.to_string(), summaries.len());
                summaries.push(CountrySummary::new(country.to_string(), tax_rate));
                summaries.len() - 1
            }
        };
        summaries[pos].accumulate(&amounts);
    }

    Ok(SummaryReport::new(summaries))
}

fn parse_amounts(record: &StringRecord, row: usize) -> Result<[Decimal; 6]> {
    let mut amounts = [Decimal::ZERO; 6];
    for (slot, &col) in schema::AMOUNT_COLUMNS.iter().enumerate() {
        let raw = cell(record, col);
        amounts[slot] = locale::parse_amount(raw).map_err(|reason| AppError::Conversion {
            column: schema::EXPECTED_COLUMNS[col].to_string(),
            value: raw.to_string(),
            row,
            reason,
        })?;
    }
    Ok(amounts)
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}
