#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vnfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial statement normalization pipeline.
//!
//! [`normalize`] runs every stage over the records of one request. The stages are
//! also exported individually:
//!
//! - [`merge`] - Pivot & merge of values and metadata
//! - [`number`] - Hierarchical outline numbering
//! - [`reorder`] - Entity-class row reordering
//! - [`reconcile`] - Label reconciliation

mod labels;
/// Hierarchical outline numbering.
pub mod outline;
/// Pivot & merge of raw provider records.
pub mod pivot;
/// Reporting policy data.
pub mod policy;
/// Label reconciliation.
pub mod reconcile;
/// Entity-class row reordering.
pub mod reorder;

pub use outline::{OUTLINE_DEPTH, OutlineNumberer, number};
pub use pivot::merge;
pub use policy::{DEFAULT_BANK_SYMBOLS, EntityClass, LabelMap, Permutation, ReportingPolicy};
pub use reconcile::reconcile;
pub use reorder::reorder;

use tracing::debug;
use vnfin_core::{LineItemMeta, RawLineValue, Result, StatementRequest, StatementTable};

/// Runs the full pipeline: merge, numbering, reordering, reconciliation and null-fill.
///
/// An empty result (no rows or no periods) is returned as is; callers decide how to
/// present it.
pub fn normalize(
    request: &StatementRequest,
    values: &[RawLineValue],
    meta: &[LineItemMeta],
    policy: &ReportingPolicy,
) -> Result<StatementTable> {
    let mut table = merge(values, meta, request.period_kind)?;
    debug!(
        symbol = %request.symbol,
        rows = table.len(),
        periods = table.periods().len(),
        "Merged statement"
    );
    if table.is_empty() {
        return Ok(table);
    }

    number(&mut table);
    reorder(&mut table, &request.symbol, request.statement_type, policy);
    reconcile(&mut table, &request.symbol, request.statement_type, policy);
    table.fill_missing();
    Ok(table)
}
