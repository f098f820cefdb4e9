//! Core data types for financial statements.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`StatementRequest`] - A validated statement request
//! - [`RawLineValue`] - One provider value for an (item, period) pair
//! - [`LineItemMeta`] - Provider metadata for a line item
//! - [`StatementRow`] - One presentation row of a statement
//! - [`StatementTable`] - An ordered table of rows sharing one period column set

use polars::prelude::{Column, DataFrame, PlSmallStr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatementError};
use crate::period::{FiscalPeriod, PeriodKind, StatementType, expand, expand_from};

/// Header of the row label column in rendered statements.
pub const NAME_COLUMN: &str = "Name";

/// A trading symbol/ticker.
///
/// Symbols are trimmed and uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the symbol is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A validated request for one financial statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRequest {
    /// Ticker, uppercased.
    pub symbol: Symbol,
    /// Statement to build.
    pub statement_type: StatementType,
    /// Period granularity.
    pub period_kind: PeriodKind,
    /// Number of trailing years to include.
    pub lookback_years: u32,
}

impl StatementRequest {
    /// Creates a request from already-typed parts.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::InvalidParameter`] if the symbol is empty or not
    /// ASCII alphanumeric, or if `lookback_years` is zero.
    pub fn new(
        symbol: impl Into<Symbol>,
        statement_type: StatementType,
        period_kind: PeriodKind,
        lookback_years: u32,
    ) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(StatementError::InvalidParameter(
                "symbol must not be empty".to_string(),
            ));
        }
        if !symbol.as_str().chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StatementError::InvalidParameter(format!(
                "symbol {symbol} must contain only ASCII letters and digits"
            )));
        }
        if lookback_years == 0 {
            return Err(StatementError::InvalidParameter(
                "lookback years must be positive".to_string(),
            ));
        }
        Ok(Self {
            symbol,
            statement_type,
            period_kind,
            lookback_years,
        })
    }

    /// Creates a request from the raw tokens a form or command line supplies.
    ///
    /// Tokens are case-insensitive. Fails fast, before any network call.
    pub fn from_tokens(
        symbol: &str,
        statement_type: &str,
        period_kind: &str,
        lookback_years: i64,
    ) -> Result<Self> {
        let statement_type = statement_type.parse()?;
        let period_kind = period_kind.parse()?;
        let lookback_years = u32::try_from(lookback_years)
            .ok()
            .filter(|&y| y > 0)
            .ok_or_else(|| {
                StatementError::InvalidParameter(format!(
                    "lookback years must be positive, got {lookback_years}"
                ))
            })?;
        Self::new(symbol, statement_type, period_kind, lookback_years)
    }

    /// Returns the fiscal periods to request, anchored on the current year.
    pub fn periods(&self) -> Result<Vec<FiscalPeriod>> {
        expand(self.period_kind, self.lookback_years)
    }

    /// Returns the fiscal periods to request, anchored on `current_year`.
    pub fn periods_as_of(&self, current_year: i32) -> Result<Vec<FiscalPeriod>> {
        expand_from(self.period_kind, self.lookback_years, current_year)
    }
}

/// A single provider value for one line item in one fiscal period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawLineValue {
    /// Opaque provider item key. Not unique across statement types.
    pub item_code: String,
    /// Period the value belongs to.
    pub fiscal_date: FiscalPeriod,
    /// Reported value, if any.
    pub numeric_value: Option<f64>,
}

impl RawLineValue {
    /// Creates a new raw value.
    #[must_use]
    pub fn new(
        item_code: impl Into<String>,
        fiscal_date: FiscalPeriod,
        numeric_value: Option<f64>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            fiscal_date,
            numeric_value,
        }
    }
}

/// Provider metadata for one statement line item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemMeta {
    /// Opaque provider item key, joined against [`RawLineValue::item_code`].
    pub item_code: String,
    /// Display name in the provider's taxonomy.
    pub display_name: String,
    /// Structural depth, 0 being the topmost section. `None` if not declared.
    pub nesting_level: Option<u8>,
}

impl LineItemMeta {
    /// Creates new line item metadata.
    #[must_use]
    pub fn new(
        item_code: impl Into<String>,
        display_name: impl Into<String>,
        nesting_level: Option<u8>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            display_name: display_name.into(),
            nesting_level,
        }
    }
}

/// One presentation row of a statement.
///
/// `values` is aligned with the owning table's [`StatementTable::periods`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Row label. Rewritten by outline numbering and label reconciliation.
    pub name: String,
    /// Structural depth used for outline numbering.
    pub nesting_level: Option<u8>,
    /// One value per period column; `None` until the null-fill step.
    pub values: Vec<Option<f64>>,
}

impl StatementRow {
    /// Creates a new row.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        nesting_level: Option<u8>,
        values: Vec<Option<f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            nesting_level,
            values,
        }
    }
}

/// An ordered statement table.
///
/// All rows share the same ordered period columns (newest first). Row order is
/// presentation order and is never re-sorted by value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    period_kind: PeriodKind,
    periods: Vec<FiscalPeriod>,
    rows: Vec<StatementRow>,
    labels_reconciled: bool,
}

impl StatementTable {
    /// Creates a table from its period columns and rows.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::Other`] if a row's value count differs from the
    /// number of period columns.
    pub fn new(
        period_kind: PeriodKind,
        periods: Vec<FiscalPeriod>,
        rows: Vec<StatementRow>,
    ) -> Result<Self> {
        if let Some(row) = rows.iter().find(|r| r.values.len() != periods.len()) {
            return Err(StatementError::Other(format!(
                "row {:?} has {} values for {} periods",
                row.name,
                row.values.len(),
                periods.len()
            )));
        }
        Ok(Self {
            period_kind,
            periods,
            rows,
            labels_reconciled: false,
        })
    }

    /// Creates a table with no periods and no rows.
    #[must_use]
    pub const fn empty(period_kind: PeriodKind) -> Self {
        Self {
            period_kind,
            periods: Vec::new(),
            rows: Vec::new(),
            labels_reconciled: false,
        }
    }

    /// Returns the period granularity of the columns.
    #[must_use]
    pub const fn period_kind(&self) -> PeriodKind {
        self.period_kind
    }

    /// Returns the period columns, newest first.
    #[must_use]
    pub fn periods(&self) -> &[FiscalPeriod] {
        &self.periods
    }

    /// Returns the rows in presentation order.
    #[must_use]
    pub fn rows(&self) -> &[StatementRow] {
        &self.rows
    }

    /// Renames rows in order. `rename` sees each row and returns its new name, or
    /// `None` to keep the current one. Values and nesting levels are untouched.
    ///
    /// Returns the number of renamed rows.
    pub fn rename_rows(
        &mut self,
        mut rename: impl FnMut(&StatementRow) -> Option<String>,
    ) -> usize {
        let mut renamed = 0;
        for row in &mut self.rows {
            if let Some(name) = rename(row) {
                row.name = name;
                renamed += 1;
            }
        }
        renamed
    }

    /// Replaces the row order with `order`, a list of indices into the current rows.
    ///
    /// Indices that are out of range or repeated are ignored.
    pub fn reindex(&mut self, order: &[usize]) {
        let mut slots: Vec<Option<StatementRow>> = self.rows.drain(..).map(Some).collect();
        self.rows = order
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect();
    }

    /// Returns the row names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table carries no data: no rows or no period columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.periods.is_empty()
    }

    /// Returns true once label reconciliation has run on this table.
    #[must_use]
    pub const fn labels_reconciled(&self) -> bool {
        self.labels_reconciled
    }

    /// Marks the row labels as reconciled.
    pub fn mark_labels_reconciled(&mut self) {
        self.labels_reconciled = true;
    }

    /// Replaces every absent value with 0.
    pub fn fill_missing(&mut self) {
        for value in self.rows.iter_mut().flat_map(|r| r.values.iter_mut()) {
            if value.is_none() {
                *value = Some(0.0);
            }
        }
    }

    /// Returns the period column labels (`Năm 2024`, `Q3 2024`, ...).
    #[must_use]
    pub fn column_labels(&self) -> Vec<String> {
        self.periods
            .iter()
            .map(|p| p.label(self.period_kind))
            .collect()
    }

    /// Returns the rendered header: `Name` followed by the period labels.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        std::iter::once(NAME_COLUMN.to_string())
            .chain(self.column_labels())
            .collect()
    }

    /// Renders the table as a DataFrame with a `Name` column and one `f64`
    /// column per period. The nesting level is not exported.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.names();
        let mut columns = Vec::with_capacity(self.periods.len() + 1);
        columns.push(Column::new(PlSmallStr::from(NAME_COLUMN), names));

        for (idx, label) in self.column_labels().into_iter().enumerate() {
            let values: Vec<Option<f64>> = self
                .rows
                .iter()
                .map(|r| r.values.get(idx).copied().flatten())
                .collect();
            columns.push(Column::new(PlSmallStr::from(label), values));
        }

        DataFrame::new(columns).map_err(|e| StatementError::Frame(e.to_string()))
    }
}
