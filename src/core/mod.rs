pub mod error;
pub mod locale;

pub use error::{AppError, Result};
