//! Configuration loading and management for the reports engine.
//!
//! This module loads report options (leave counting policy, trend window,
//! rounding precision) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use hrms_reports::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reports.yaml").unwrap();
//! println!("Leave policy: {:?}", config.config().leave_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeavePolicy, ReportConfig};
