//! Scenario runner for batch projections
//!
//! Loads assumptions once, then runs any number of slider settings against them.

use crate::assumptions::{AssumptionsError, RevenueAssumptions};
use crate::inputs::ProjectionInputs;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use affiliate_revenue::{ProjectionInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let inputs: Vec<_> = (1..=3)
///     .map(|r| ProjectionInputs::new(r as f64, 10.0, 2000.0))
///     .collect();
/// let results = runner.run_batch(&inputs);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with default assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with assumptions named by the environment (see [`RevenueAssumptions::from_env`])
    pub fn from_env() -> Result<Self, AssumptionsError> {
        Ok(Self::with_assumptions(RevenueAssumptions::from_env()?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: RevenueAssumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &ProjectionInputs) -> ProjectionResult {
        self.engine.project(inputs)
    }

    /// Run projections for several input sets, in order
    pub fn run_batch(&self, inputs: &[ProjectionInputs]) -> Vec<ProjectionResult> {
        inputs.iter().map(|i| self.engine.project(i)).collect()
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &RevenueAssumptions {
        self.engine.assumptions()
    }

    /// Replace the assumptions used for subsequent runs
    pub fn set_assumptions(&mut self, assumptions: RevenueAssumptions) {
        self.engine = ProjectionEngine::new(assumptions);
    }
}
