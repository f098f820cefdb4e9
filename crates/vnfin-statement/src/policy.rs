//! Reporting policy: entity classes, row permutations and label tables.
//!
//! All policy data is immutable configuration loaded once into lookup structures.
//! The pipeline stages are pure functions of a table and a [`ReportingPolicy`].

use std::collections::{HashMap, HashSet};

use vnfin_core::{Result, StatementError, StatementType, Symbol};

use crate::labels;

/// Tickers of listed banks that report under the credit-institution chart of accounts.
pub const DEFAULT_BANK_SYMBOLS: [&str; 27] = [
    "ABB", "ACB", "BAB", "BID", "BVB", "CTG", "EIB", "HDB", "KLB", "LPB", "MBB", "MSB", "NAB",
    "NVB", "OCB", "PGB", "SGB", "SHB", "SSB", "STB", "TCB", "TPB", "VAB", "VBB", "VCB", "VIB",
    "VPB",
];

const BANK_BALANCE_SHEET_ORDER: [usize; 100] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 0, 50, 51,
    52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 49, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75,
    76, 77, 78, 63, 48, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97,
    98, 99,
];

const BANK_INCOME_STATEMENT_ORDER: [usize; 25] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 9, 12, 13, 14, 15, 16, 17, 19, 20, 18, 21, 22, 23, 24,
];

const BANK_CASH_FLOW_ORDER: [usize; 71] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 47, 48, 49,
    50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70,
];

/// Class of reporting entity, selecting which layout conventions apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityClass {
    /// Credit institution reporting under the banking chart of accounts.
    Bank,
    /// General enterprise reporting under the enterprise chart of accounts.
    Enterprise,
}

/// A row permutation: a bijection over `0..len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Creates a permutation, validating that `order` visits each of `0..len` once.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::InvalidPolicy`] if an index is repeated or out of range.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; order.len()];
        for &idx in &order {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(StatementError::InvalidPolicy(format!(
                        "permutation repeats index {idx}"
                    )));
                }
                None => {
                    return Err(StatementError::InvalidPolicy(format!(
                        "permutation index {idx} is out of range for length {}",
                        order.len()
                    )));
                }
            }
        }
        Ok(Self(order))
    }

    /// Returns the row order as positional indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of positions this permutation was authored for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the permutation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the order for a table of `rows` rows.
    ///
    /// Indices beyond the table are dropped; rows the permutation does not reach are
    /// appended in their original order, so the result is always a bijection over
    /// `0..rows`.
    #[must_use]
    pub fn order_for(&self, rows: usize) -> Vec<usize> {
        self.0
            .iter()
            .copied()
            .filter(|&i| i < rows)
            .chain(self.0.len()..rows)
            .collect()
    }
}

/// Exact-match label rewrites for one statement layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelMap(HashMap<String, String>);

impl LabelMap {
    /// Builds a map from `(from, to)` pairs. Later pairs win on duplicate keys.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        )
    }

    /// Returns the canonical label for `label`, if it is mapped.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Returns the number of mapped labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(from, to)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Layout conventions applied after numbering: which tickers are banks, how bank
/// rows are reordered, and how labels are reconciled per entity class.
#[derive(Clone, Debug)]
pub struct ReportingPolicy {
    bank_symbols: HashSet<Symbol>,
    bank_permutations: HashMap<StatementType, Permutation>,
    labels: HashMap<(EntityClass, StatementType), LabelMap>,
}

impl Default for ReportingPolicy {
    /// The VNDirect taxonomy with the built-in bank list.
    fn default() -> Self {
        let bank_permutations = [
            (StatementType::BalanceSheet, BANK_BALANCE_SHEET_ORDER.to_vec()),
            (StatementType::IncomeStatement, BANK_INCOME_STATEMENT_ORDER.to_vec()),
            (StatementType::CashFlow, BANK_CASH_FLOW_ORDER.to_vec()),
        ]
        .into_iter()
        .map(|(kind, order)| (kind, Permutation(order)))
        .collect();

        let labels = [
            (EntityClass::Bank, StatementType::BalanceSheet, labels::BANK_BALANCE_SHEET),
            (EntityClass::Bank, StatementType::IncomeStatement, labels::BANK_INCOME_STATEMENT),
            (EntityClass::Bank, StatementType::CashFlow, labels::BANK_CASH_FLOW),
            (
                EntityClass::Enterprise,
                StatementType::BalanceSheet,
                labels::ENTERPRISE_BALANCE_SHEET,
            ),
            (
                EntityClass::Enterprise,
                StatementType::IncomeStatement,
                labels::ENTERPRISE_INCOME_STATEMENT,
            ),
            (EntityClass::Enterprise, StatementType::CashFlow, labels::ENTERPRISE_CASH_FLOW),
        ]
        .into_iter()
        .map(|(class, kind, pairs)| ((class, kind), LabelMap::from_pairs(pairs.iter().copied())))
        .collect();

        Self {
            bank_symbols: DEFAULT_BANK_SYMBOLS.iter().map(|&s| Symbol::new(s)).collect(),
            bank_permutations,
            labels,
        }
    }
}

impl ReportingPolicy {
    /// Creates the default VNDirect policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of tickers treated as banks.
    #[must_use]
    pub fn with_bank_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.bank_symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the bank row permutation for a statement type.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::InvalidPolicy`] if `order` is not a permutation.
    pub fn with_bank_permutation(
        mut self,
        statement_type: StatementType,
        order: Vec<usize>,
    ) -> Result<Self> {
        self.bank_permutations
            .insert(statement_type, Permutation::new(order)?);
        Ok(self)
    }

    /// Removes the bank row permutation for a statement type.
    #[must_use]
    pub fn without_bank_permutation(mut self, statement_type: StatementType) -> Self {
        self.bank_permutations.remove(&statement_type);
        self
    }

    /// Replaces the label table for an entity class and statement type.
    #[must_use]
    pub fn with_labels(
        mut self,
        class: EntityClass,
        statement_type: StatementType,
        labels: LabelMap,
    ) -> Self {
        self.labels.insert((class, statement_type), labels);
        self
    }

    /// Returns true if the ticker is a known bank.
    #[must_use]
    pub fn is_bank(&self, symbol: &Symbol) -> bool {
        self.bank_symbols.contains(symbol)
    }

    /// Returns the number of tickers treated as banks.
    #[must_use]
    pub fn bank_symbol_count(&self) -> usize {
        self.bank_symbols.len()
    }

    /// Classifies a ticker.
    #[must_use]
    pub fn entity_class(&self, symbol: &Symbol) -> EntityClass {
        if self.is_bank(symbol) {
            EntityClass::Bank
        } else {
            EntityClass::Enterprise
        }
    }

    /// Returns the row permutation that applies to `symbol`'s statement, if any.
    #[must_use]
    pub fn permutation(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
    ) -> Option<&Permutation> {
        match self.entity_class(symbol) {
            EntityClass::Bank => self.bank_permutations.get(&statement_type),
            EntityClass::Enterprise => None,
        }
    }

    /// Returns the label table that applies to `symbol`'s statement, if any.
    #[must_use]
    pub fn labels(&self, symbol: &Symbol, statement_type: StatementType) -> Option<&LabelMap> {
        self.labels
            .get(&(self.entity_class(symbol), statement_type))
    }
}
