pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CountrySummary, SummaryReport};
pub use services::{ProcessedReport, ReportService};
