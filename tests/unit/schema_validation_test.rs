// Schema gate: any column sequence that is not exactly the expected
// 9-column list must fail validation, and the failure must report both the
// found and the expected column lists.

use vatsum::core::AppError;
use vatsum::reports::services::schema;

fn assert_mismatch(columns: Vec<String>) -> (Vec<String>, Vec<String>) {
    match schema::validate(&columns) {
        Err(AppError::SchemaMismatch { found, expected }) => (found, expected),
        Err(other) => panic!("expected SchemaMismatch, got {:?}", other),
        Ok(()) => panic!("expected validation to fail for {:?}", columns),
    }
}

#[test]
fn test_exact_column_sequence_passes() {
    assert!(schema::validate(&schema::expected_columns()).is_ok());
}

#[test]
fn test_reordered_columns_fail() {
    let mut columns = schema::expected_columns();
    columns.swap(3, 4);

    let (found, expected) = assert_mismatch(columns);
    assert_eq!(found.len(), 9);
    assert_eq!(expected, schema::expected_columns());
}

#[test]
fn test_missing_column_fails() {
    let mut columns = schema::expected_columns();
    columns.remove(2);

    assert_mismatch(columns);
}

#[test]
fn test_extra_column_fails() {
    let mut columns = schema::expected_columns();
    columns.push("Note".to_string());

    assert_mismatch(columns);
}

#[test]
fn test_renamed_column_fails() {
    let mut columns = schema::expected_columns();
    columns[1] = "IVA".to_string();

    assert_mismatch(columns);
}

#[test]
fn test_historical_currency_style_label_is_rejected() {
    // An older export revision labeled the rate column "$ IVA applicata";
    // only the canonical percent-style label is accepted
    let mut columns = schema::expected_columns();
    columns[1] = "$ IVA applicata".to_string();

    assert_mismatch(columns);
}

#[test]
fn test_comparison_is_case_sensitive() {
    let mut columns = schema::expected_columns();
    columns[0] = "PAESE".to_string();

    assert_mismatch(columns);
}

#[test]
fn test_single_concatenated_column_reports_one_found_entry() {
    // A comma-delimited file parsed with ';' splitting produces one
    // concatenated header column
    let columns = vec![
        "Paese,% IVA applicata,Rate Name,Totale vendite lordo,Totale netto prodotti,\
         Totale netto spedizioni,Totale IVA prodotti,Totale IVA spedizioni,Totale IVA"
            .to_string(),
    ];

    let (found, expected) = assert_mismatch(columns);
    assert_eq!(found.len(), 1);
    assert_eq!(expected.len(), 9);
}
