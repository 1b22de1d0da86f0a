pub mod summary;

pub use summary::{CountrySummary, SummaryReport};
