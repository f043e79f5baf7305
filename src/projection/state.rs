//! Running state carried from one projected month to the next

use crate::inputs::ProjectionInputs;

/// State of the referred-customer book at a point in the projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Referred customers still active, unrounded
    pub total_referred_customers: f64,

    /// Existing projects held by each referred customer this month
    pub existing_projects: f64,
}

impl ProjectionState {
    /// Initialize state at month 0
    pub fn from_inputs(inputs: &ProjectionInputs) -> Self {
        Self {
            month: 0,
            total_referred_customers: 0.0,
            existing_projects: inputs.avg_existing_projects,
        }
    }

    /// Advance to the next month: churn the book, then add this month's referrals
    pub fn advance_month(&mut self, inputs: &ProjectionInputs, churn_rate: f64) {
        self.month += 1;
        self.total_referred_customers =
            (self.total_referred_customers * (1.0 - churn_rate)).max(0.0);
        self.total_referred_customers += inputs.referred_customers_per_month;
    }

    /// Roll the existing project count forward after a month has been recorded
    pub fn accrue_projects(&mut self, inputs: &ProjectionInputs) {
        self.existing_projects += inputs.avg_new_projects_per_month;
    }
}
