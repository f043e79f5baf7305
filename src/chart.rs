//! Bar chart model for the calculator page
//!
//! One bar per projected month, valued at that month's affiliate revenue.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::projection::MonthRecord;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single labelled bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// Chart data derived from a projection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub bars: Vec<ChartBar>,
}

impl ChartSeries {
    /// Build the series starting at `start`'s calendar month
    ///
    /// The first bar and every January bar carry the year in their label.
    pub fn from_records(records: &[MonthRecord], start: NaiveDate) -> Self {
        let mut month_index = start.month0() as usize;
        let mut year = start.year();

        let bars = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let name = MONTH_NAMES[month_index];
                let label = if i == 0 {
                    format!("{} {}", name, year)
                } else if month_index == 0 {
                    year += 1;
                    format!("{} {}", name, year)
                } else {
                    name.to_string()
                };

                month_index = (month_index + 1) % 12;

                ChartBar {
                    label,
                    value: record.affiliate_revenue,
                }
            })
            .collect();

        Self { bars }
    }

    /// Value of the final bar, 0 when there are no bars
    pub fn headline(&self) -> f64 {
        self.bars.last().map(|b| b.value).unwrap_or(0.0)
    }

    /// Largest bar value, 0 when there are no bars
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// Format an amount as en-US dollars, e.g. `$1,450.00` or `-$3.50`
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (digits, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RevenueAssumptions;
    use crate::inputs::ProjectionInputs;
    use crate::projection::project;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_labels_roll_over_year() {
        let records = project(&ProjectionInputs::default(), &RevenueAssumptions::default());
        let series = ChartSeries::from_records(&records, date(2026, 10));

        let labels: Vec<&str> = series.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Oct 2026", "Nov", "Dec", "Jan 2027", "Feb", "Mar", "Apr", "May", "Jun", "Jul",
                "Aug", "Sep"
            ]
        );
    }

    #[test]
    fn test_january_start_labels_year_once() {
        let records = project(&ProjectionInputs::default(), &RevenueAssumptions::default());
        let series = ChartSeries::from_records(&records, date(2027, 1));
        assert_eq!(series.bars[0].label, "Jan 2027");
        assert!(series.bars[1..].iter().all(|b| !b.label.contains(' ')));
    }

    #[test]
    fn test_bars_carry_affiliate_revenue() {
        let records = project(&ProjectionInputs::default(), &RevenueAssumptions::default());
        let series = ChartSeries::from_records(&records, date(2026, 3));

        assert_eq!(series.bars.len(), 12);
        assert_eq!(series.bars[0].value, 290.0);
        assert_eq!(series.headline(), records[11].affiliate_revenue);
        assert_eq!(series.max_value(), series.headline());
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_records(&[], date(2026, 3));
        assert_eq!(series.headline(), 0.0);
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(290.0), "$290.00");
        assert_eq!(format_usd(1450.0), "$1,450.00");
        assert_eq!(format_usd(575.19), "$575.19");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-3.5), "-$3.50");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn test_format_usd_beyond_u64_cents() {
        assert_eq!(format_usd(1e18), "$1,000,000,000,000,000,000.00");
        assert_eq!(format_usd(-2e20), "-$200,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_headline_of_huge_projection_formats_exactly() {
        let records = project(&ProjectionInputs::new(1e15, 10.0, 2000.0), &RevenueAssumptions::default());
        let series = ChartSeries::from_records(&records, date(2026, 10));

        let headline = series.headline();
        assert!(headline > 1e18);
        let formatted = format_usd(headline);
        let parsed: f64 = formatted.trim_start_matches('$').replace(',', "").parse().unwrap();
        assert_eq!(parsed, headline);
    }
}
