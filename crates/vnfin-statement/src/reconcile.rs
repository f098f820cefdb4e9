//! Label reconciliation between the generic and the entity-class taxonomies.

use tracing::debug;
use vnfin_core::{StatementTable, StatementType, Symbol};

use crate::policy::ReportingPolicy;

/// Rewrites row names that exactly match a key of the applicable label table.
///
/// Each row is looked up once against its current name, so mapped targets are
/// never chained. A table is reconciled at most once; later calls are no-ops.
/// Unmatched names are left as they are. Returns the number of rewritten rows.
pub fn reconcile(
    table: &mut StatementTable,
    symbol: &Symbol,
    statement_type: StatementType,
    policy: &ReportingPolicy,
) -> usize {
    if table.labels_reconciled() {
        return 0;
    }

    let rewritten = match policy.labels(symbol, statement_type) {
        Some(labels) => table.rename_rows(|row| labels.get(&row.name).map(str::to_string)),
        None => 0,
    };
    table.mark_labels_reconciled();

    debug!(
        symbol = %symbol,
        statement = %statement_type,
        rewritten,
        "Reconciled row labels"
    );
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{EntityClass, LabelMap};
    use vnfin_core::{PeriodKind, StatementRow};

    fn table_named(names: &[&str]) -> StatementTable {
        let rows = names
            .iter()
            .map(|&n| StatementRow::new(n, Some(1), Vec::new()))
            .collect();
        StatementTable::new(PeriodKind::Annual, Vec::new(), rows).unwrap()
    }

    #[test]
    fn test_bank_balance_sheet_labels() {
        let policy = ReportingPolicy::default();
        let mut table = table_named(&[
            "A. TỔNG CỘNG TÀI SẢN",
            "I. Tiền mặt, vàng bạc, đá quý",
            "I. Nợ phải trả",
        ]);
        let rewritten = reconcile(
            &mut table,
            &Symbol::new("VCB"),
            StatementType::BalanceSheet,
            &policy,
        );

        assert_eq!(rewritten, 2);
        assert_eq!(
            table.names(),
            [
                "A. Tổng cộng tài sản (I + ... + XII)",
                "I. Tiền mặt, vàng bạc, đá quý",
                "C. Tổng nợ phải trả",
            ]
        );
    }

    #[test]
    fn test_enterprise_labels_differ_from_bank() {
        let policy = ReportingPolicy::default();
        let mut table = table_named(&["A. TỔNG CỘNG TÀI SẢN", "I. Nợ phải trả"]);
        reconcile(
            &mut table,
            &Symbol::new("FPT"),
            StatementType::BalanceSheet,
            &policy,
        );
        assert_eq!(
            table.names(),
            ["Tổng cộng tài sản (A + B)", "C. Tổng nợ phải trả (I + II)"]
        );
    }

    #[test]
    fn test_no_chaining_within_a_pass() {
        let policy = ReportingPolicy::default();
        let mut table = table_named(&["5. Tài sản ngắn hạn khác", "e. Tài sản ngắn hạn khác"]);
        reconcile(
            &mut table,
            &Symbol::new("HPG"),
            StatementType::BalanceSheet,
            &policy,
        );
        assert_eq!(
            table.names(),
            ["V. Tài sản ngắn hạn khác", "5. Tài sản ngắn hạn khác"]
        );
    }

    #[test]
    fn test_reconcile_is_idempotent_for_every_table() {
        let policy = ReportingPolicy::default();
        for symbol in [Symbol::new("VCB"), Symbol::new("FPT")] {
            for kind in StatementType::ALL {
                let mut keys: Vec<&str> = policy
                    .labels(&symbol, kind)
                    .unwrap()
                    .iter()
                    .map(|(from, _)| from)
                    .collect();
                keys.sort_unstable();

                let mut once = table_named(&keys);
                reconcile(&mut once, &symbol, kind, &policy);
                let mut twice = once.clone();
                assert_eq!(reconcile(&mut twice, &symbol, kind, &policy), 0);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_zero_matches_is_fine() {
        let policy = ReportingPolicy::default();
        let mut table = table_named(&["1. Thu nhập lãi", "2. Chi phí lãi"]);
        let before = table.names().join("|");
        let rewritten = reconcile(
            &mut table,
            &Symbol::new("VCB"),
            StatementType::CashFlow,
            &policy,
        );
        assert_eq!(rewritten, 0);
        assert_eq!(table.names().join("|"), before);
        assert!(table.labels_reconciled());
    }

    #[test]
    fn test_custom_label_table() {
        let policy = ReportingPolicy::default().with_labels(
            EntityClass::Enterprise,
            StatementType::IncomeStatement,
            LabelMap::from_pairs([("I. Doanh thu", "1. Doanh thu thuần")]),
        );
        let mut table = table_named(&["I. Doanh thu"]);
        reconcile(
            &mut table,
            &Symbol::new("VNM"),
            StatementType::IncomeStatement,
            &policy,
        );
        assert_eq!(table.names(), ["1. Doanh thu thuần"]);
    }
}
