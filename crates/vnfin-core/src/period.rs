//! Statement kinds, reporting periods and period expansion.
//!
//! This module defines [`StatementType`] and [`PeriodKind`] together with the
//! request tokens they are parsed from, [`FiscalPeriod`] for period-end dates, and
//! [`expand`] which turns a period kind and lookback into the exact fiscal periods
//! to request from a provider.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatementError};

/// Kind of financial statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementType {
    /// Balance sheet (`BS`, `BALANCESHEET`, `CDKT`).
    BalanceSheet,
    /// Income statement (`P&L`, `KQKD`, `IC`).
    IncomeStatement,
    /// Cash-flow statement (`CF`, `LCTT`).
    CashFlow,
}

impl StatementType {
    /// All statement types, in canonical order.
    pub const ALL: [Self; 3] = [Self::BalanceSheet, Self::IncomeStatement, Self::CashFlow];

    /// Returns the provider model-type code list for this statement.
    #[must_use]
    pub const fn model_type_code(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "1,89,101,411",
            Self::IncomeStatement => "2,90,102,412",
            Self::CashFlow => "3,91,103,413",
        }
    }

    /// Returns the short code (`BS`, `IC`, `CF`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "BS",
            Self::IncomeStatement => "IC",
            Self::CashFlow => "CF",
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StatementType {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BS" | "BALANCESHEET" | "CDKT" => Ok(Self::BalanceSheet),
            "P&L" | "KQKD" | "IC" => Ok(Self::IncomeStatement),
            "CF" | "LCTT" => Ok(Self::CashFlow),
            _ => Err(StatementError::InvalidParameter(format!(
                "unknown statement type: {s}"
            ))),
        }
    }
}

/// Reporting period granularity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    /// Fiscal years (`YEAR`, `NAM`).
    #[default]
    Annual,
    /// Fiscal quarters (`QUARTER`, `QUY`).
    Quarterly,
}

impl PeriodKind {
    /// Returns the provider report type (`ANNUAL` or `QUARTER`).
    #[must_use]
    pub const fn report_type(&self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Quarterly => "QUARTER",
        }
    }

    /// Number of fiscal periods per year.
    #[must_use]
    pub const fn periods_per_year(&self) -> usize {
        match self {
            Self::Annual => 1,
            Self::Quarterly => 4,
        }
    }
}

impl FromStr for PeriodKind {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "YEAR" | "NAM" => Ok(Self::Annual),
            "QUARTER" | "QUY" => Ok(Self::Quarterly),
            _ => Err(StatementError::InvalidParameter(format!(
                "unknown period kind: {s}"
            ))),
        }
    }
}

/// Quarter-end (month, day) pairs in calendar order.
const QUARTER_ENDS: [(u32, u32); 4] = [(3, 31), (6, 30), (9, 30), (12, 31)];

/// A fiscal period identified by its end date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FiscalPeriod(NaiveDate);

impl FiscalPeriod {
    /// Creates a fiscal period ending on the given date.
    #[must_use]
    pub const fn new(end: NaiveDate) -> Self {
        Self(end)
    }

    /// Creates the fiscal year-end period (Dec 31) of `year`.
    #[must_use]
    pub fn year_end(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 12, 31).map(Self)
    }

    /// Creates the period ending quarter `quarter` (1-4) of `year`.
    #[must_use]
    pub fn quarter_end(year: i32, quarter: u32) -> Option<Self> {
        let (month, day) = *QUARTER_ENDS.get(quarter.checked_sub(1)? as usize)?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the period end date.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the calendar year of the period end.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the quarter (1-4) if the date is a calendar quarter end.
    #[must_use]
    pub fn quarter(&self) -> Option<u32> {
        let key = (self.0.month(), self.0.day());
        QUARTER_ENDS
            .iter()
            .position(|&end| end == key)
            .map(|i| i as u32 + 1)
    }

    /// Returns the presentation label for this period.
    ///
    /// Annual periods render as `Năm {year}`, quarterly ones as `Q{n} {year}`.
    /// A quarterly period that is not a calendar quarter end keeps its ISO date.
    #[must_use]
    pub fn label(&self, kind: PeriodKind) -> String {
        match kind {
            PeriodKind::Annual => format!("Năm {}", self.year()),
            PeriodKind::Quarterly => match self.quarter() {
                Some(q) => format!("Q{q} {}", self.year()),
                None => self.to_string(),
            },
        }
    }
}

impl fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for FiscalPeriod {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| StatementError::Parse(format!("invalid fiscal date {s:?}: {e}")))
    }
}

/// Expands a period kind and lookback into the fiscal periods to request,
/// anchored on the current calendar year.
///
/// See [`expand_from`] for the ordering rules.
pub fn expand(kind: PeriodKind, lookback_years: u32) -> Result<Vec<FiscalPeriod>> {
    expand_from(kind, lookback_years, Utc::now().year())
}

/// Expands a period kind and lookback into fiscal periods, anchored on `current_year`.
///
/// Years run from `current_year` backwards. Annual expansion yields one Dec 31 period
/// per year; quarterly expansion yields Mar 31, Jun 30, Sep 30 and Dec 31 for each
/// year, year-major.
///
/// # Errors
///
/// Returns [`StatementError::InvalidParameter`] if `lookback_years` is zero or the
/// range leaves the supported calendar.
pub fn expand_from(
    kind: PeriodKind,
    lookback_years: u32,
    current_year: i32,
) -> Result<Vec<FiscalPeriod>> {
    if lookback_years == 0 {
        return Err(StatementError::InvalidParameter(
            "lookback years must be positive".to_string(),
        ));
    }

    let oldest = i32::try_from(lookback_years - 1)
        .ok()
        .and_then(|offset| current_year.checked_sub(offset))
        .filter(|&year| {
            FiscalPeriod::year_end(year).is_some() && FiscalPeriod::year_end(current_year).is_some()
        })
        .ok_or_else(|| {
            StatementError::InvalidParameter(format!(
                "lookback of {lookback_years} years from {current_year} is out of range"
            ))
        })?;

    let mut periods = Vec::with_capacity(lookback_years as usize * kind.periods_per_year());
    for year in (oldest..=current_year).rev() {
        let out_of_range =
            || StatementError::InvalidParameter(format!("year {year} is out of range"));
        match kind {
            PeriodKind::Annual => {
                periods.push(FiscalPeriod::year_end(year).ok_or_else(out_of_range)?);
            }
            PeriodKind::Quarterly => {
                for quarter in 1..=4 {
                    periods.push(
                        FiscalPeriod::quarter_end(year, quarter).ok_or_else(out_of_range)?,
                    );
                }
            }
        }
    }

    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BS", StatementType::BalanceSheet)]
    #[case("balancesheet", StatementType::BalanceSheet)]
    #[case("cdkt", StatementType::BalanceSheet)]
    #[case("P&L", StatementType::IncomeStatement)]
    #[case("kqkd", StatementType::IncomeStatement)]
    #[case("Ic", StatementType::IncomeStatement)]
    #[case("cf", StatementType::CashFlow)]
    #[case("LCTT", StatementType::CashFlow)]
    fn test_statement_type_tokens(#[case] token: &str, #[case] expected: StatementType) {
        assert_eq!(token.parse::<StatementType>().unwrap(), expected);
    }

    #[rstest]
    #[case("YEAR", PeriodKind::Annual)]
    #[case("nam", PeriodKind::Annual)]
    #[case("quarter", PeriodKind::Quarterly)]
    #[case("QUY", PeriodKind::Quarterly)]
    fn test_period_kind_tokens(#[case] token: &str, #[case] expected: PeriodKind) {
        assert_eq!(token.parse::<PeriodKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("BSX")]
    #[case("")]
    #[case("income")]
    fn test_unknown_statement_token(#[case] token: &str) {
        assert!(matches!(
            token.parse::<StatementType>(),
            Err(StatementError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unknown_period_token() {
        assert!(matches!(
            "MONTH".parse::<PeriodKind>(),
            Err(StatementError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_model_type_codes() {
        assert_eq!(StatementType::BalanceSheet.model_type_code(), "1,89,101,411");
        assert_eq!(StatementType::IncomeStatement.model_type_code(), "2,90,102,412");
        assert_eq!(StatementType::CashFlow.model_type_code(), "3,91,103,413");
    }

    #[test]
    fn test_expand_annual() {
        let periods = expand_from(PeriodKind::Annual, 3, 2024).unwrap();
        let dates: Vec<String> = periods.iter().map(ToString::to_string).collect();
        assert_eq!(dates, ["2024-12-31", "2023-12-31", "2022-12-31"]);
    }

    #[test]
    fn test_expand_quarterly() {
        let periods = expand_from(PeriodKind::Quarterly, 2, 2024).unwrap();
        let dates: Vec<String> = periods.iter().map(ToString::to_string).collect();
        assert_eq!(
            dates,
            [
                "2024-03-31",
                "2024-06-30",
                "2024-09-30",
                "2024-12-31",
                "2023-03-31",
                "2023-06-30",
                "2023-09-30",
                "2023-12-31",
            ]
        );
    }

    #[test]
    fn test_expand_counts_and_order() {
        for years in 1..=6 {
            let annual = expand_from(PeriodKind::Annual, years, 2025).unwrap();
            assert_eq!(annual.len(), years as usize);
            assert!(annual.windows(2).all(|w| w[0].year() == w[1].year() + 1));

            let quarterly = expand_from(PeriodKind::Quarterly, years, 2025).unwrap();
            assert_eq!(quarterly.len(), 4 * years as usize);
            for chunk in quarterly.chunks(4) {
                let year = chunk[0].year();
                assert!(chunk.iter().all(|p| p.year() == year));
                let quarters: Vec<u32> = chunk.iter().filter_map(FiscalPeriod::quarter).collect();
                assert_eq!(quarters, [1, 2, 3, 4]);
            }
        }
    }

    #[test]
    fn test_expand_rejects_zero_lookback() {
        assert!(matches!(
            expand_from(PeriodKind::Annual, 0, 2024),
            Err(StatementError::InvalidParameter(_))
        ));
        assert!(matches!(
            expand(PeriodKind::Quarterly, 0),
            Err(StatementError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_expand_rejects_lookback_beyond_calendar() {
        for kind in [PeriodKind::Annual, PeriodKind::Quarterly] {
            for years in [u32::MAX, 300_000] {
                assert!(matches!(
                    expand_from(kind, years, 2026),
                    Err(StatementError::InvalidParameter(_))
                ));
            }
        }
        assert!(matches!(
            expand_from(PeriodKind::Quarterly, i32::MAX as u32, i32::MAX),
            Err(StatementError::InvalidParameter(_))
        ));
        assert_eq!(expand_from(PeriodKind::Annual, 2_026, 2026).unwrap().len(), 2_026);
    }

    #[test]
    fn test_period_labels() {
        let year_end = FiscalPeriod::year_end(2023).unwrap();
        assert_eq!(year_end.label(PeriodKind::Annual), "Năm 2023");
        assert_eq!(year_end.label(PeriodKind::Quarterly), "Q4 2023");

        let q2 = FiscalPeriod::quarter_end(2024, 2).unwrap();
        assert_eq!(q2.label(PeriodKind::Quarterly), "Q2 2024");

        let odd: FiscalPeriod = "2024-05-15".parse().unwrap();
        assert_eq!(odd.label(PeriodKind::Quarterly), "2024-05-15");
        assert_eq!(odd.label(PeriodKind::Annual), "Năm 2024");
    }

    #[test]
    fn test_fiscal_period_parse_error() {
        assert!(matches!(
            "31/12/2024".parse::<FiscalPeriod>(),
            Err(StatementError::Parse(_))
        ));
    }

    #[test]
    fn test_quarter_end_bounds() {
        assert!(FiscalPeriod::quarter_end(2024, 0).is_none());
        assert!(FiscalPeriod::quarter_end(2024, 5).is_none());
    }
}
