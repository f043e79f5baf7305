//! CSV-based assumption loader
//!
//! Reads `key,value` rows from data/assumptions/revenue_assumptions.csv

use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default path to the revenue assumptions file
pub const DEFAULT_ASSUMPTIONS_FILE: &str = "data/assumptions/revenue_assumptions.csv";

/// Environment variable naming an assumptions file to load instead of the defaults
pub const ASSUMPTIONS_PATH_ENV: &str = "REVENUE_ASSUMPTIONS_PATH";

/// Errors raised while loading assumptions
#[derive(Error, Debug)]
pub enum AssumptionsError {
    #[error("Failed to open assumptions file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown assumption key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, serde::Deserialize)]
struct KeyValueRow {
    key: String,
    value: String,
}

/// Read all `(key, value)` pairs, trimming whitespace around both columns
pub fn read_key_values<R: Read>(reader: R) -> Result<Vec<(String, String)>, AssumptionsError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for result in csv_reader.deserialize() {
        let row: KeyValueRow = result?;
        pairs.push((row.key, row.value));
    }

    Ok(pairs)
}

/// Parse a single assumption value
pub fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, AssumptionsError> {
    value.parse().map_err(|_| AssumptionsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_key_values_trims() {
        let csv = "key,value\n churn_rate , 0.03 \n";
        let pairs = read_key_values(csv.as_bytes()).unwrap();
        assert_eq!(pairs, vec![("churn_rate".to_string(), "0.03".to_string())]);
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let csv = "key\nchurn_rate\n";
        let err = read_key_values(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AssumptionsError::Csv(_)));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u32>("months", "12").unwrap(), 12);
        assert!(parse_value::<u32>("months", "-1").is_err());
        assert!(parse_value::<f64>("churn_rate", "").is_err());
    }
}
