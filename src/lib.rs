//! Affiliate Revenue - projection of referred-customer revenue and affiliate commission
//!
//! This library provides:
//! - The month-by-month revenue projection (customers, projects, revenue, commission)
//! - Revenue assumptions with defaults and CSV loading
//! - Query-string parsing for the calculator's three sliders
//! - Chart and HTML page rendering for the calculator

pub mod assumptions;
pub mod chart;
pub mod inputs;
pub mod page;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AssumptionsError, RevenueAssumptions};
pub use chart::{ChartSeries, format_usd};
pub use inputs::ProjectionInputs;
pub use projection::{project, MonthRecord, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::ScenarioRunner;
