use crate::core::{locale, AppError, Result};
use crate::modules::reports::models::{CountrySummary, SummaryReport};
use crate::modules::reports::services::schema;

/// Filename offered for the processed download
pub const OUTPUT_FILENAME: &str = "risultati_elaborati.csv";

/// Locale-formatted cells for one summary row, in output column order.
/// Monetary values become locale text; the tax rate stays verbatim.
pub fn format_row(summary: &CountrySummary) -> Vec<String> {
    let mut cells = Vec::with_capacity(2 + schema::AMOUNT_COLUMNS.len());
    cells.push(summary.country.clone());
    cells.push(summary.tax_rate.clone());
    cells.extend(summary.amounts().iter().map(|a| locale::format_amount(*a)));
    cells
}

/// Formatted cells for every summary row
pub fn format_rows(report: &SummaryReport) -> Vec<Vec<String>> {
    report.rows.iter().map(format_row).collect()
}

/// Serialize the aggregated report as ';'-delimited CSV text with a header
/// row and locale-formatted monetary cells
pub fn to_csv(report: &SummaryReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer
        .write_record(schema::output_columns())
        .map_err(|e| AppError::internal(format!("cannot write CSV header: {}", e)))?;

    for summary in &report.rows {
        writer
            .write_record(format_row(summary))
            .map_err(|e| AppError::internal(format!("cannot write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("cannot flush CSV output: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| AppError::internal(format!("CSV output is not UTF-8: {}", e)))
}
