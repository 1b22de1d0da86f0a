use tracing::{info, warn};

use crate::core::Result;
use crate::modules::reports::models::SummaryReport;
use crate::modules::reports::services::{aggregator, formatter, reader, schema};

/// Outcome of one processed upload: the aggregated report plus its
/// ready-to-download CSV rendering
#[derive(Debug, Clone)]
pub struct ProcessedReport {
    pub report: SummaryReport,
    pub csv: String,
}

/// Request-scoped processing pipeline for uploaded sales exports.
///
/// One upload is decoded, parsed, validated, aggregated, and formatted in a
/// single synchronous pass. The service holds no state; everything derived
/// from the upload is dropped when the response goes out. Aggregation
/// either completes fully or fails with a tagged error; no partial output
/// is ever produced.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Run the whole pipeline over raw uploaded bytes
    pub fn process(&self, bytes: &[u8]) -> Result<ProcessedReport> {
        let table = reader::parse(bytes)?;
        schema::validate(&table.headers)?;

        let report = aggregator::aggregate(&table.rows)?;
        if report.is_empty() {
            warn!("Upload contained a header but no data rows");
        } else {
            info!(
                "Aggregated {} input rows into {} countries (gross sales {}, total tax {})",
                table.rows.len(),
                report.country_count(),
                report.total_gross_sales(),
                report.total_tax()
            );
        }

        let csv = formatter::to_csv(&report)?;

        Ok(ProcessedReport { report, csv })
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
