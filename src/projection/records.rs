//! Output structures for revenue projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
///
/// Field names serialize in camelCase to match the calculator page's data contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub month: u32,

    // Customers
    pub existing_customers: i64,
    pub new_customers: f64,
    pub total_customers: i64,

    // Projects held per customer this month
    pub existing_projects: f64,

    // Money (rounded to cents)
    pub revenue: f64,
    pub affiliate_revenue: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly rows, month 1 first
    pub records: Vec<MonthRecord>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a month row
    pub fn add_row(&mut self, row: MonthRecord) {
        self.records.push(row);
    }

    /// Affiliate revenue of the last projected month, the "monthly income after 1 year"
    pub fn headline(&self) -> f64 {
        self.records.last().map(|r| r.affiliate_revenue).unwrap_or(0.0)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.records.iter().map(|r| r.revenue).sum();
        let total_affiliate_revenue: f64 = self.records.iter().map(|r| r.affiliate_revenue).sum();

        let last = self.records.last();

        ProjectionSummary {
            total_months: self.records.len() as u32,
            final_customers: last.map(|r| r.total_customers).unwrap_or(0),
            final_revenue: last.map(|r| r.revenue).unwrap_or(0.0),
            final_affiliate_revenue: self.headline(),
            total_revenue,
            total_affiliate_revenue,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_customers: i64,
    pub final_revenue: f64,
    pub final_affiliate_revenue: f64,
    pub total_revenue: f64,
    pub total_affiliate_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(month: u32, revenue: f64) -> MonthRecord {
        MonthRecord {
            month,
            existing_customers: month as i64,
            new_customers: 1.0,
            total_customers: month as i64,
            existing_projects: 2000.0,
            revenue,
            affiliate_revenue: revenue * 0.2,
        }
    }

    #[test]
    fn test_empty_result_summary() {
        let result = ProjectionResult::new();
        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_customers, 0);
        assert_eq!(result.headline(), 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let mut result = ProjectionResult::new();
        result.add_row(row(1, 100.0));
        result.add_row(row(2, 250.0));

        let summary = result.summary();
        assert_eq!(summary.total_months, 2);
        assert_eq!(summary.final_customers, 2);
        assert_relative_eq!(summary.final_revenue, 250.0);
        assert_relative_eq!(summary.final_affiliate_revenue, 50.0);
        assert_relative_eq!(summary.total_revenue, 350.0);
        assert_relative_eq!(summary.total_affiliate_revenue, 70.0);
    }

    #[test]
    fn test_camel_case_serialization() {
        let json = serde_json::to_value(row(1, 1450.0)).unwrap();
        assert_eq!(json["month"], 1);
        assert_eq!(json["existingCustomers"], 1);
        assert_eq!(json["totalCustomers"], 1);
        assert_eq!(json["affiliateRevenue"], 290.0);
        assert!(json.get("affiliate_revenue").is_none());
    }
}
