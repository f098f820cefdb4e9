#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vnfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for Vietnamese financial statements.
//!
//! This crate provides the foundational abstractions shared by the workspace:
//!
//! - [`StatementSource`](provider::StatementSource) - Raw values and line-item metadata
//! - [`StatementTable`](types::StatementTable) - The row-ordered statement being shaped
//! - [`expand`](period::expand) - Fiscal periods to request for a lookback window
//! - [`StatementError`](error::StatementError) - Error taxonomy

/// Error types for statement operations.
pub mod error;
/// Statement kinds, period kinds and period expansion.
pub mod period;
/// Provider traits for fetching statement data.
pub mod provider;
/// Core data types (Symbol, StatementRow, StatementTable, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{Result, StatementError};
pub use period::{FiscalPeriod, PeriodKind, StatementType, expand, expand_from};
pub use provider::{DataProvider, StatementSource};
pub use types::{
    LineItemMeta, NAME_COLUMN, RawLineValue, StatementRequest, StatementRow, StatementTable,
    Symbol,
};
