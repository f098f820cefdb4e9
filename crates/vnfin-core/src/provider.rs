//! Provider traits for fetching statement data.
//!
//! This module defines the provider traits:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`StatementSource`] - Raw line-item values and line-item metadata

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    period::{FiscalPeriod, PeriodKind, StatementType},
    types::{LineItemMeta, RawLineValue, Symbol},
};

/// Base trait for all data providers.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "VNDirect").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider of raw financial statement data.
///
/// Implementations perform one outbound call per method and do not retry;
/// transport and HTTP failures surface as
/// [`StatementError::RemoteUnavailable`](crate::StatementError::RemoteUnavailable).
#[async_trait]
pub trait StatementSource: DataProvider {
    /// Fetches raw line-item values for the given fiscal periods.
    ///
    /// Returns one record per (item, period) pair the provider knows about.
    async fn fetch_values(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
        period_kind: PeriodKind,
        periods: &[FiscalPeriod],
    ) -> Result<Vec<RawLineValue>>;

    /// Fetches line-item metadata for a statement, in declared display order.
    async fn fetch_meta(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
    ) -> Result<Vec<LineItemMeta>>;
}
