#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vnfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Normalized financial statements for companies listed in Vietnam.
//!
//! This crate re-exports the core types, the normalization pipeline and the
//! provider implementations, and provides a [`StatementService`] that fetches a
//! statement and normalizes it in one call.
//!
//! # Features
//!
//! - `vndirect` - VNDirect finfo provider (enabled by default)
//!
//! # Example
//!
//! ```rust,ignore
//! use vnfin::{StatementRequest, StatementService};
//!
//! #[tokio::main]
//! async fn main() -> vnfin::Result<()> {
//!     let service = StatementService::with_vndirect();
//!     let request = StatementRequest::from_tokens("VCB", "BS", "YEAR", 2)?;
//!
//!     let table = service.fetch_statement(&request).await?;
//!     println!("{}", table.to_dataframe()?);
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use vnfin_core::*;

// Normalization pipeline
pub use vnfin_statement::{
    DEFAULT_BANK_SYMBOLS, EntityClass, LabelMap, OutlineNumberer, Permutation, ReportingPolicy,
    merge, normalize, number, reconcile, reorder,
};

// Providers
#[cfg(feature = "vndirect")]
pub use vnfin_vndirect::{VNDIRECT_BASE_URL, VndirectProvider};

mod service;
pub use service::StatementService;
