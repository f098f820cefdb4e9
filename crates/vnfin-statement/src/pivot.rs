//! Pivot & merge: long provider records into one wide statement table.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};
use vnfin_core::{
    FiscalPeriod, LineItemMeta, PeriodKind, RawLineValue, Result, StatementRow, StatementTable,
};

/// Pivots raw values into one row per line item and joins the metadata onto them.
///
/// Rows follow `meta` order, including items that have no values. Values whose
/// item code has no metadata are dropped, since the row cannot be labeled. Period
/// columns are the distinct fiscal dates present in `values`, newest first. Absent
/// values stay `None`.
pub fn merge(
    values: &[RawLineValue],
    meta: &[LineItemMeta],
    period_kind: PeriodKind,
) -> Result<StatementTable> {
    let periods: Vec<FiscalPeriod> = values
        .iter()
        .map(|v| v.fiscal_date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();
    let (pivot, duplicates) = pivot_cells(values, &periods);
    if duplicates > 0 {
        warn!(duplicates, "Duplicate values for item and period, keeping the last");
    }

    let known: HashSet<&str> = meta.iter().map(|m| m.item_code.as_str()).collect();
    let unlabeled = pivot.keys().filter(|code| !known.contains(*code)).count();
    if unlabeled > 0 {
        warn!(dropped = unlabeled, "Dropping items without metadata");
    }

    let rows = meta
        .iter()
        .map(|m| {
            let cells = pivot
                .get(m.item_code.as_str())
                .cloned()
                .unwrap_or_else(|| vec![None; periods.len()]);
            StatementRow::new(m.display_name.clone(), m.nesting_level, cells)
        })
        .collect();

    StatementTable::new(period_kind, periods, rows)
}

/// Pivots values into per-item cells aligned with `periods`.
///
/// Returns the cells and the number of records that repeated an (item, period)
/// pair already seen, whatever the earlier value was.
fn pivot_cells<'a>(
    values: &'a [RawLineValue],
    periods: &[FiscalPeriod],
) -> (HashMap<&'a str, Vec<Option<f64>>>, usize) {
    let column: HashMap<FiscalPeriod, usize> =
        periods.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    let mut pivot: HashMap<&str, Vec<Option<f64>>> = HashMap::new();
    let mut seen: HashSet<(&str, FiscalPeriod)> = HashSet::new();
    let mut duplicates = 0;
    for value in values {
        let Some(&idx) = column.get(&value.fiscal_date) else {
            continue;
        };
        let code = value.item_code.as_str();
        if !seen.insert((code, value.fiscal_date)) {
            debug!(
                item_code = %value.item_code,
                fiscal_date = %value.fiscal_date,
                "Duplicate value for item and period"
            );
            duplicates += 1;
        }
        pivot
            .entry(code)
            .or_insert_with(|| vec![None; periods.len()])[idx] = value.numeric_value;
    }
    (pivot, duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(s: &str) -> FiscalPeriod {
        s.parse().unwrap()
    }

    fn value(code: &str, date: &str, v: Option<f64>) -> RawLineValue {
        RawLineValue::new(code, period(date), v)
    }

    #[test]
    fn test_merge_pivots_newest_first() {
        let values = vec![
            value("100", "2023-12-31", Some(1.0)),
            value("100", "2024-12-31", Some(2.0)),
            value("200", "2023-12-31", Some(3.0)),
            value("200", "2024-12-31", Some(4.0)),
        ];
        let meta = vec![
            LineItemMeta::new("200", "Tài sản ngắn hạn", Some(1)),
            LineItemMeta::new("100", "TỔNG CỘNG TÀI SẢN", Some(0)),
        ];

        let table = merge(&values, &meta, PeriodKind::Annual).unwrap();

        assert_eq!(table.header(), ["Name", "Năm 2024", "Năm 2023"]);
        assert_eq!(table.names(), ["Tài sản ngắn hạn", "TỔNG CỘNG TÀI SẢN"]);
        assert_eq!(table.rows()[0].values, vec![Some(4.0), Some(3.0)]);
        assert_eq!(table.rows()[1].values, vec![Some(2.0), Some(1.0)]);
        assert_eq!(table.rows()[1].nesting_level, Some(0));
    }

    #[test]
    fn test_merge_keeps_missing_values_absent() {
        let values = vec![
            value("100", "2024-12-31", Some(5.0)),
            value("100", "2023-12-31", None),
            value("200", "2024-12-31", Some(7.0)),
        ];
        let meta = vec![
            LineItemMeta::new("100", "Tiền", Some(2)),
            LineItemMeta::new("200", "Hàng tồn kho", Some(2)),
            LineItemMeta::new("300", "Tài sản khác", Some(2)),
        ];

        let table = merge(&values, &meta, PeriodKind::Annual).unwrap();

        assert_eq!(table.rows()[0].values, vec![Some(5.0), None]);
        assert_eq!(table.rows()[1].values, vec![Some(7.0), None]);
        assert_eq!(table.rows()[2].values, vec![None, None]);
    }

    #[test]
    fn test_merge_drops_items_without_meta() {
        let values = vec![
            value("100", "2024-12-31", Some(1.0)),
            value("999", "2024-12-31", Some(9.0)),
        ];
        let meta = vec![LineItemMeta::new("100", "Tiền", Some(1))];

        let table = merge(&values, &meta, PeriodKind::Annual).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.names(), ["Tiền"]);
    }

    #[test]
    fn test_merge_quarterly_labels() {
        let values = vec![
            value("1", "2024-03-31", Some(1.0)),
            value("1", "2024-06-30", Some(2.0)),
            value("1", "2023-12-31", Some(3.0)),
        ];
        let meta = vec![LineItemMeta::new("1", "Doanh thu", Some(1))];

        let table = merge(&values, &meta, PeriodKind::Quarterly).unwrap();
        assert_eq!(table.header(), ["Name", "Q2 2024", "Q1 2024", "Q4 2023"]);
        assert_eq!(table.rows()[0].values, vec![Some(2.0), Some(1.0), Some(3.0)]);
    }

    #[test]
    fn test_merge_duplicate_keeps_last() {
        let values = vec![
            value("1", "2024-12-31", Some(1.0)),
            value("1", "2024-12-31", Some(8.0)),
        ];
        let meta = vec![LineItemMeta::new("1", "Doanh thu", Some(1))];

        let table = merge(&values, &meta, PeriodKind::Annual).unwrap();
        assert_eq!(table.rows()[0].values, vec![Some(8.0)]);
    }

    #[test]
    fn test_duplicates_counted_even_after_null() {
        let values = vec![
            value("1", "2024-12-31", None),
            value("1", "2024-12-31", Some(8.0)),
            value("2", "2024-12-31", Some(1.0)),
            value("2", "2024-12-31", None),
        ];
        let periods = vec![period("2024-12-31")];

        let (cells, duplicates) = pivot_cells(&values, &periods);
        assert_eq!(duplicates, 2);
        assert_eq!(cells["1"], vec![Some(8.0)]);
        assert_eq!(cells["2"], vec![None]);
    }

    #[test]
    fn test_merge_without_values_is_empty() {
        let meta = vec![LineItemMeta::new("1", "Doanh thu", Some(1))];
        let table = merge(&[], &meta, PeriodKind::Annual).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.periods().is_empty());
        assert!(table.is_empty());

        let table = merge(&[], &[], PeriodKind::Annual).unwrap();
        assert!(table.is_empty());
    }
}
