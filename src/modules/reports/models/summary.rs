use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated sales totals for one country
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySummary {
    /// Country code, e.g. "IT"
    pub country: String,
    /// Tax rate of the first input row seen for this country, kept verbatim
    pub tax_rate: String,
    /// Gross sales total
    pub gross_sales: Decimal,
    /// Net product total
    pub net_products: Decimal,
    /// Net shipping total
    pub net_shipping: Decimal,
    /// Product tax total
    pub product_tax: Decimal,
    /// Shipping tax total
    pub shipping_tax: Decimal,
    /// Overall tax total
    pub total_tax: Decimal,
}

impl CountrySummary {
    /// Create an empty summary for a country, capturing its tax rate
    pub fn new(country: String, tax_rate: String) -> Self {
        Self {
            country,
            tax_rate,
            gross_sales: Decimal::ZERO,
            net_products: Decimal::ZERO,
            net_shipping: Decimal::ZERO,
            product_tax: Decimal::ZERO,
            shipping_tax: Decimal::ZERO,
            total_tax: Decimal::ZERO,
        }
    }

    /// Add one input row's monetary values, given in output column order
    pub fn accumulate(&mut self, amounts: &[Decimal; 6]) {
        self.gross_sales += amounts[0];
        self.net_products += amounts[1];
        self.net_shipping += amounts[2];
        self.product_tax += amounts[3];
        self.shipping_tax += amounts[4];
        self.total_tax += amounts[5];
    }

    /// Monetary fields in output column order
    pub fn amounts(&self) -> [Decimal; 6] {
        [
            self.gross_sales,
            self.net_products,
            self.net_shipping,
            self.product_tax,
            self.shipping_tax,
            self.total_tax,
        ]
    }
}

/// One aggregated report: a summary row per distinct country, in the order
/// countries first appeared in the input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub rows: Vec<CountrySummary>,
}

impl SummaryReport {
    pub fn new(rows: Vec<CountrySummary>) -> Self {
        Self { rows }
    }

    /// Check if the report has no summary rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct countries in the report
    pub fn country_count(&self) -> usize {
        self.rows.len()
    }

    /// Per-column totals across all countries, in output column order
    pub fn column_totals(&self) -> [Decimal; 6] {
        let mut totals = [Decimal::ZERO; 6];
        for row in &self.rows {
            for (total, amount) in totals.iter_mut().zip(row.amounts()) {
                *total += amount;
            }
        }
        totals
    }

    /// Gross sales summed over every country
    pub fn total_gross_sales(&self) -> Decimal {
        self.rows.iter().map(|r| r.gross_sales).sum()
    }

    /// Overall tax summed over every country
    pub fn total_tax(&self) -> Decimal {
        self.rows.iter().map(|r| r.total_tax).sum()
    }
}
