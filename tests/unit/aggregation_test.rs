// Aggregation pipeline properties: conservation of per-column totals,
// group count, first-value retention for the tax rate, and the
// all-or-nothing behavior on malformed monetary cells.

use csv::StringRecord;
use proptest::array::uniform6;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vatsum::core::AppError;
use vatsum::reports::services::aggregator;
use vatsum::reports::ReportService;

const COUNTRIES: [&str; 4] = ["IT", "FR", "DE", "ES"];

fn locale_cell(cents: u32) -> String {
    format!("{},{:02}", cents / 100, cents % 100)
}

fn record(country: &str, rate: &str, plan: &str, amounts: &[u32; 6]) -> StringRecord {
    let mut fields = vec![country.to_string(), rate.to_string(), plan.to_string()];
    fields.extend(amounts.iter().map(|&c| locale_cell(c)));
    StringRecord::from(fields)
}

proptest! {
    #[test]
    fn test_conservation_of_totals(
        rows in prop::collection::vec((0usize..4, uniform6(0u32..100_000_000u32)), 1..40)
    ) {
        let records: Vec<StringRecord> = rows
            .iter()
            .map(|(country, amounts)| record(COUNTRIES[*country], "22", "plan", amounts))
            .collect();

        let report = aggregator::aggregate(&records).unwrap();
        let totals = report.column_totals();

        for col in 0..6 {
            let input_sum: Decimal = rows
                .iter()
                .map(|(_, amounts)| Decimal::new(amounts[col] as i64, 2))
                .sum();
            prop_assert_eq!(totals[col], input_sum, "column {} not conserved", col);
        }
    }

    #[test]
    fn test_group_count_equals_distinct_countries(
        rows in prop::collection::vec((0usize..4, uniform6(0u32..1_000_000u32)), 1..40)
    ) {
        let records: Vec<StringRecord> = rows
            .iter()
            .map(|(country, amounts)| record(COUNTRIES[*country], "22", "plan", amounts))
            .collect();

        let mut distinct: Vec<usize> = rows.iter().map(|(country, _)| *country).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let report = aggregator::aggregate(&records).unwrap();

        prop_assert_eq!(report.country_count(), distinct.len());
    }
}

#[test]
fn test_concrete_two_row_scenario() {
    let records = vec![
        record("IT", "22", "rateA", &[10000, 8000, 1000, 1500, 150, 1650]),
        record("IT", "22", "rateB", &[5000, 4000, 500, 750, 75, 825]),
    ];

    let report = aggregator::aggregate(&records).unwrap();

    assert_eq!(report.country_count(), 1);
    let it = &report.rows[0];
    assert_eq!(it.country, "IT");
    assert_eq!(it.tax_rate, "22");
    assert_eq!(it.gross_sales, dec!(150.00));
    assert_eq!(it.net_products, dec!(120.00));
    assert_eq!(it.net_shipping, dec!(15.00));
    assert_eq!(it.product_tax, dec!(22.50));
    assert_eq!(it.shipping_tax, dec!(2.25));
    assert_eq!(it.total_tax, dec!(24.75));
}

#[test]
fn test_tax_rate_is_first_seen_not_recomputed() {
    let records = vec![
        record("IT", "22", "a", &[100, 100, 0, 22, 0, 22]),
        record("IT", "10", "b", &[100, 100, 0, 10, 0, 10]),
        record("IT", "4", "c", &[100, 100, 0, 4, 0, 4]),
    ];

    let report = aggregator::aggregate(&records).unwrap();

    assert_eq!(report.rows[0].tax_rate, "22");
}

#[test]
fn test_double_comma_cell_aborts_with_zero_output() {
    let mut fields = vec!["IT".to_string(), "22".to_string(), "plan".to_string()];
    fields.push("12,34,56".to_string());
    fields.extend(std::iter::repeat("1,00".to_string()).take(5));
    let records = vec![StringRecord::from(fields)];

    let err = aggregator::aggregate(&records).unwrap_err();

    assert!(matches!(err, AppError::Conversion { .. }));
}

#[test]
fn test_full_pipeline_output_matches_expected_csv() {
    let input = "Paese;% IVA applicata;Rate Name;Totale vendite lordo;\
                 Totale netto prodotti;Totale netto spedizioni;Totale IVA prodotti;\
                 Totale IVA spedizioni;Totale IVA\n\
                 IT;22;rateA;100,00;80,00;10,00;15,00;1,50;16,50\n\
                 IT;22;rateB;50,00;40,00;5,00;7,50;0,75;8,25\n";

    let processed = ReportService::new().process(input.as_bytes()).unwrap();

    let mut lines = processed.csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Paese;% IVA applicata;Totale vendite lordo;Totale netto prodotti;\
         Totale netto spedizioni;Totale IVA prodotti;Totale IVA spedizioni;Totale IVA"
    );
    assert_eq!(
        lines.next().unwrap(),
        "IT;22;150,00;120,00;15,00;22,50;2,25;24,75"
    );
    assert!(lines.next().is_none());
}

#[test]
fn test_pipeline_rejects_rows_that_sum_but_do_not_parse() {
    // The revision that skipped coercion would have summed these as text;
    // explicit conversion must reject the run instead
    let input = "Paese;% IVA applicata;Rate Name;Totale vendite lordo;\
                 Totale netto prodotti;Totale netto spedizioni;Totale IVA prodotti;\
                 Totale IVA spedizioni;Totale IVA\n\
                 IT;22;rateA;cento;80,00;10,00;15,00;1,50;16,50\n";

    let err = ReportService::new().process(input.as_bytes()).unwrap_err();

    assert!(matches!(err, AppError::Conversion { .. }));
}
