//! Revenue assumptions: per-project revenue, commission and churn rates, horizon

pub mod loader;

pub use loader::{AssumptionsError, DEFAULT_ASSUMPTIONS_FILE, ASSUMPTIONS_PATH_ENV};

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default revenue per new project
pub const DEFAULT_BASE_NEW_PROJECT_REVENUE: f64 = 95.0;

/// Default revenue per existing project
pub const DEFAULT_BASE_EXISTING_PROJECT_REVENUE: f64 = 0.25;

/// Default affiliate commission (20% of revenue)
pub const DEFAULT_AFFILIATE_RATE: f64 = 0.20;

/// Default monthly churn of the referred-customer book (2%)
pub const DEFAULT_CHURN_RATE: f64 = 0.02;

/// Default projection horizon in months
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

/// Constants applied to every projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueAssumptions {
    /// Revenue per new project
    pub base_new_project_revenue: f64,

    /// Revenue per existing project
    pub base_existing_project_revenue: f64,

    /// Fraction of revenue paid as affiliate commission
    pub affiliate_rate: f64,

    /// Fraction of the referred-customer book lost each month
    pub churn_rate: f64,

    /// Number of months to project
    pub months: u32,
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            base_new_project_revenue: DEFAULT_BASE_NEW_PROJECT_REVENUE,
            base_existing_project_revenue: DEFAULT_BASE_EXISTING_PROJECT_REVENUE,
            affiliate_rate: DEFAULT_AFFILIATE_RATE,
            churn_rate: DEFAULT_CHURN_RATE,
            months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

impl RevenueAssumptions {
    /// Load assumptions from a `key,value` CSV file
    ///
    /// Keys missing from the file keep their default value.
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        info!("Loading revenue assumptions from {}", path.display());
        let file = std::fs::File::open(path).map_err(|source| AssumptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Load assumptions from any CSV reader (e.g., string buffer)
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self, AssumptionsError> {
        let mut assumptions = Self::default();
        for (key, value) in loader::read_key_values(reader)? {
            assumptions.set(&key, &value)?;
        }
        Ok(assumptions)
    }

    /// Load from the file named by `REVENUE_ASSUMPTIONS_PATH`, or fall back to defaults
    pub fn from_env() -> Result<Self, AssumptionsError> {
        match std::env::var_os(ASSUMPTIONS_PATH_ENV) {
            Some(path) => Self::from_csv_path(Path::new(&path)),
            None => {
                info!("{} not set, using default revenue assumptions", ASSUMPTIONS_PATH_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Override a single assumption by its CSV key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AssumptionsError> {
        match key {
            "base_new_project_revenue" => self.base_new_project_revenue = loader::parse_value(key, value)?,
            "base_existing_project_revenue" => {
                self.base_existing_project_revenue = loader::parse_value(key, value)?
            }
            "affiliate_rate" => self.affiliate_rate = loader::parse_value(key, value)?,
            "churn_rate" => self.churn_rate = loader::parse_value(key, value)?,
            "months" => self.months = loader::parse_value(key, value)?,
            other => return Err(AssumptionsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}
