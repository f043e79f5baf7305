//! Slider inputs and their query-string parsing

use serde::{Deserialize, Serialize};

/// Default referred customers per month
pub const DEFAULT_REFERRALS: i64 = 1;

/// Default new projects per customer per month
pub const DEFAULT_NEW_PROJECTS: i64 = 10;

/// Default existing projects per customer at month 0
pub const DEFAULT_EXISTING_PROJECTS: i64 = 2000;

/// Query parameter names used by the calculator form
pub const REFERRALS_PARAM: &str = "referrals";
pub const NEW_PROJECTS_PARAM: &str = "newProjects";
pub const EXISTING_PROJECTS_PARAM: &str = "existingProjects";

/// The three user-controlled projection inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// New referrals added each month
    pub referred_customers_per_month: f64,

    /// New projects per referred customer per month
    pub avg_new_projects_per_month: f64,

    /// Existing project count at month 0
    pub avg_existing_projects: f64,
}

impl ProjectionInputs {
    pub fn new(
        referred_customers_per_month: f64,
        avg_new_projects_per_month: f64,
        avg_existing_projects: f64,
    ) -> Self {
        Self {
            referred_customers_per_month,
            avg_new_projects_per_month,
            avg_existing_projects,
        }
    }

    /// Build inputs from query parameters
    ///
    /// `lookup` returns the raw value of a parameter if present. Missing or
    /// non-numeric values fall back to the defaults (1, 10, 2000).
    pub fn from_query<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let param = |name: &str, default: i64| {
            lookup(name).and_then(parse_leading_int).unwrap_or(default as f64)
        };

        Self::new(
            param(REFERRALS_PARAM, DEFAULT_REFERRALS),
            param(NEW_PROJECTS_PARAM, DEFAULT_NEW_PROJECTS),
            param(EXISTING_PROJECTS_PARAM, DEFAULT_EXISTING_PROJECTS),
        )
    }
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self::new(
            DEFAULT_REFERRALS as f64,
            DEFAULT_NEW_PROJECTS as f64,
            DEFAULT_EXISTING_PROJECTS as f64,
        )
    }
}

/// Parse the leading integer of a string, ignoring anything after it
///
/// `" 42abc"` gives 42, `"-3"` gives -3, `"abc"` and `""` give None. Digit runs
/// wider than any machine integer are kept as the nearest `f64`.
pub fn parse_leading_int(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<f64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> ProjectionInputs {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProjectionInputs::from_query(|name| map.get(name).map(String::as_str))
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42.0));
        assert_eq!(parse_leading_int("  7"), Some(7.0));
        assert_eq!(parse_leading_int("12abc"), Some(12.0));
        assert_eq!(parse_leading_int("3.9"), Some(3.0));
        assert_eq!(parse_leading_int("-5"), Some(-5.0));
        assert_eq!(parse_leading_int("+8"), Some(8.0));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_leading_int_wider_than_i64() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(1e20));
        assert_eq!(parse_leading_int("-99999999999999999999x"), Some(-1e20));
    }

    #[test]
    fn test_huge_param_not_replaced_by_default() {
        let inputs = from_pairs(&[("referrals", "99999999999999999999")]);
        assert_eq!(inputs.referred_customers_per_month, 1e20);
        assert_eq!(inputs.avg_new_projects_per_month, 10.0);
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let inputs = from_pairs(&[]);
        assert_eq!(inputs, ProjectionInputs::new(1.0, 10.0, 2000.0));
        assert_eq!(inputs, ProjectionInputs::default());
    }

    #[test]
    fn test_params_parsed() {
        let inputs = from_pairs(&[
            ("referrals", "5"),
            ("newProjects", "25"),
            ("existingProjects", "8000"),
        ]);
        assert_eq!(inputs, ProjectionInputs::new(5.0, 25.0, 8000.0));
    }

    #[test]
    fn test_malformed_params_fall_back_individually() {
        let inputs = from_pairs(&[("referrals", "lots"), ("newProjects", "30")]);
        assert_eq!(inputs, ProjectionInputs::new(1.0, 30.0, 2000.0));
    }
}
