//! Core projection engine for monthly affiliate revenue schedules

use log::debug;

use crate::assumptions::RevenueAssumptions;
use crate::inputs::ProjectionInputs;
use super::records::{MonthRecord, ProjectionResult};
use super::rounding::{round_count, round_money};
use super::state::ProjectionState;

/// Project the monthly revenue and affiliate commission schedule
///
/// Returns exactly `assumptions.months` records. Never fails: negative or zero
/// inputs give degenerate but well-defined rows.
pub fn project(inputs: &ProjectionInputs, assumptions: &RevenueAssumptions) -> Vec<MonthRecord> {
    ProjectionEngine::new(assumptions.clone()).project(inputs).records
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: RevenueAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions
    pub fn new(assumptions: RevenueAssumptions) -> Self {
        Self { assumptions }
    }

    /// Get reference to the assumptions this engine projects with
    pub fn assumptions(&self) -> &RevenueAssumptions {
        &self.assumptions
    }

    /// Run projection for one set of slider inputs
    pub fn project(&self, inputs: &ProjectionInputs) -> ProjectionResult {
        debug!(
            "Projecting {} months: referrals={}, new_projects={}, existing_projects={}",
            self.assumptions.months,
            inputs.referred_customers_per_month,
            inputs.avg_new_projects_per_month,
            inputs.avg_existing_projects,
        );

        let mut result = ProjectionResult::new();
        let mut state = ProjectionState::from_inputs(inputs);

        for _month in 1..=self.assumptions.months {
            state.advance_month(inputs, self.assumptions.churn_rate);

            let row = self.calculate_month(inputs, &state);
            result.add_row(row);

            state.accrue_projects(inputs);
        }

        result
    }

    /// Calculate revenue for a single month from the current state
    fn calculate_month(&self, inputs: &ProjectionInputs, state: &ProjectionState) -> MonthRecord {
        let a = &self.assumptions;

        let revenue_per_customer = inputs.avg_new_projects_per_month * a.base_new_project_revenue
            + state.existing_projects * a.base_existing_project_revenue;
        let revenue = state.total_referred_customers * revenue_per_customer;
        let affiliate_revenue = revenue * a.affiliate_rate;

        let customers = round_count(state.total_referred_customers);

        MonthRecord {
            month: state.month,
            existing_customers: customers,
            new_customers: inputs.referred_customers_per_month,
            total_customers: customers,
            existing_projects: state.existing_projects,
            revenue: round_money(revenue),
            affiliate_revenue: round_money(affiliate_revenue),
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(RevenueAssumptions::default())
    }
}
