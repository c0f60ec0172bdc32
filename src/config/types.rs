//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

/// How approved leave is counted against a report range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Count only the working days of each leave span that fall inside the
    /// report range.
    #[default]
    ClipToRange,
    /// Count each leave's recorded `total_days` regardless of the range.
    ///
    /// A leave spanning two adjacent report ranges is counted in both.
    FullSpan,
}

/// Options for building reports.
///
/// Every field has a default, so a partial YAML file is valid.
///
/// # Example
///
/// ```
/// use hrms_reports::config::{LeavePolicy, ReportConfig};
///
/// let config: ReportConfig = serde_yaml::from_str("trend_window_days: 7").unwrap();
/// assert_eq!(config.trend_window_days, 7);
/// assert_eq!(config.leave_policy, LeavePolicy::ClipToRange);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How approved leave is counted.
    #[serde(default)]
    pub leave_policy: LeavePolicy,
    /// Number of most recent days kept in the daily trend.
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: usize,
    /// Decimal places for attendance percentages.
    #[serde(default = "default_percentage_precision")]
    pub percentage_precision: u32,
    /// Decimal places for averaged hours and department averages.
    #[serde(default = "default_hours_precision")]
    pub hours_precision: u32,
}

fn default_trend_window_days() -> usize {
    15
}

fn default_percentage_precision() -> u32 {
    1
}

fn default_hours_precision() -> u32 {
    2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            leave_policy: LeavePolicy::default(),
            trend_window_days: default_trend_window_days(),
            percentage_precision: default_percentage_precision(),
            hours_precision: default_hours_precision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ReportConfig::default();
        assert_eq!(config.leave_policy, LeavePolicy::ClipToRange);
        assert_eq!(config.trend_window_days, 15);
        assert_eq!(config.percentage_precision, 1);
        assert_eq!(config.hours_precision, 2);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: ReportConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_full_span_policy_parses() {
        let config: ReportConfig = serde_yaml::from_str("leave_policy: full_span").unwrap();
        assert_eq!(config.leave_policy, LeavePolicy::FullSpan);
    }
}
