//! Entity-class row reordering.
//!
//! The generic pivot order places some bank statement rows away from where the
//! provider's canonical bank layout shows them. A fixed permutation per statement
//! type moves them back.

use tracing::debug;
use vnfin_core::{StatementTable, StatementType, Symbol};

use crate::policy::ReportingPolicy;

/// Reorders `table` in place if `symbol` has a permutation for `statement_type`.
///
/// Row contents are never changed. Tables with no applicable permutation pass
/// through untouched.
pub fn reorder(
    table: &mut StatementTable,
    symbol: &Symbol,
    statement_type: StatementType,
    policy: &ReportingPolicy,
) {
    let Some(permutation) = policy.permutation(symbol, statement_type) else {
        return;
    };

    if table.len() != permutation.len() {
        debug!(
            symbol = %symbol,
            statement = %statement_type,
            rows = table.len(),
            expected = permutation.len(),
            "Row count differs from the bank layout"
        );
    }
    table.reindex(&permutation.order_for(table.len()));
}
