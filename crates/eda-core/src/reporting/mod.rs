//! Display and report helpers.
//!
//! [`flatten_summary_for_print`] turns a [`crate::DatasetSummary`] into a flat
//! table, and [`ProfileReport`] bundles every component's output for JSON
//! consumers such as the `eda-cli` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use eda_core::reporting::{ProfileReport, flatten_summary_for_print};
//! use eda_core::{ProfilingConfig, summarize_dataset};
//!
//! let table = flatten_summary_for_print(&summarize_dataset(&df)?)?;
//! println!("{table}");
//!
//! let report = ProfileReport::build(&df, &ProfilingConfig::default())?;
//! println!("{}", report.to_json()?);
//! ```

mod formatter;
mod report;

pub use formatter::flatten_summary_for_print;
pub use report::ProfileReport;
