use crate::core::{AppError, Result};

/// Column layout of the sales export, in file order. Validation is an
/// exact, case-sensitive, order-sensitive comparison against this list.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "Paese",
    "% IVA applicata",
    "Rate Name",
    "Totale vendite lordo",
    "Totale netto prodotti",
    "Totale netto spedizioni",
    "Totale IVA prodotti",
    "Totale IVA spedizioni",
    "Totale IVA",
];

/// Zero-based cell positions fixed by the validated layout
pub const COUNTRY: usize = 0;
pub const TAX_RATE: usize = 1;
/// Rate-plan identifier, dropped before aggregation
pub const RATE_PLAN: usize = 2;
/// The six monetary columns, in file (and output) order
pub const AMOUNT_COLUMNS: [usize; 6] = [3, 4, 5, 6, 7, 8];

/// Expected columns as owned strings, for error payloads
pub fn expected_columns() -> Vec<String> {
    EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Output header: the expected columns with the rate-plan identifier removed
pub fn output_columns() -> Vec<String> {
    EXPECTED_COLUMNS
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != RATE_PLAN)
        .map(|(_, c)| c.to_string())
        .collect()
}

/// Validate the uploaded table's header sequence.
///
/// Any deviation (missing, extra, reordered, or renamed column) fails with
/// both the found and the expected lists so the caller can show them side
/// by side. No partial processing happens after a mismatch.
pub fn validate(found: &[String]) -> Result<()> {
    let matches = found.len() == EXPECTED_COLUMNS.len()
        && found.iter().zip(EXPECTED_COLUMNS.iter()).all(|(f, e)| f == e);

    if matches {
        Ok(())
    } else {
        Err(AppError::SchemaMismatch {
            found: found.to_vec(),
            expected: expected_columns(),
        })
    }
}
