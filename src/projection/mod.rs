//! Revenue projection engine for month-by-month affiliate income schedules

mod state;
mod engine;
mod records;
mod rounding;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, project};
pub use records::{MonthRecord, ProjectionResult, ProjectionSummary};
pub use rounding::{round_count, round_money};
