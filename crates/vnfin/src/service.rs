//! Statement service tying a remote source to the normalization pipeline.

use std::sync::Arc;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use vnfin_core::{Result, StatementRequest, StatementSource, StatementTable};
use vnfin_statement::{ReportingPolicy, normalize};

/// Fetches and normalizes financial statements.
///
/// The service owns a [`StatementSource`] and a [`ReportingPolicy`]. Each request
/// expands its fiscal periods, fetches values then metadata from the source and runs
/// the normalization pipeline over them. Nothing is cached between requests.
///
/// # Example
///
/// ```rust,ignore
/// use vnfin::{StatementRequest, StatementService};
///
/// let service = StatementService::with_vndirect();
/// let request = StatementRequest::from_tokens("VCB", "BS", "YEAR", 2)?;
/// let table = service.fetch_statement(&request).await?;
/// println!("{}", table.to_dataframe()?);
/// ```
#[derive(Clone)]
pub struct StatementService {
    source: Arc<dyn StatementSource>,
    policy: Arc<ReportingPolicy>,
}

impl std::fmt::Debug for StatementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementService")
            .field("source", &self.source.name())
            .field("bank_symbols", &self.policy.bank_symbol_count())
            .finish()
    }
}

impl StatementService {
    /// Create a service over `source` with the default reporting policy.
    #[must_use]
    pub fn new(source: Arc<dyn StatementSource>) -> Self {
        debug!(provider = source.name(), "Registering statement source");
        Self {
            source,
            policy: Arc::new(ReportingPolicy::default()),
        }
    }

    /// Create a service backed by the public VNDirect API.
    #[cfg(feature = "vndirect")]
    #[must_use]
    pub fn with_vndirect() -> Self {
        Self::new(Arc::new(vnfin_vndirect::VndirectProvider::new()))
    }

    /// Replace the reporting policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ReportingPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Returns the configured source.
    #[must_use]
    pub fn source(&self) -> &dyn StatementSource {
        self.source.as_ref()
    }

    /// Returns the reporting policy in use.
    #[must_use]
    pub fn policy(&self) -> &ReportingPolicy {
        &self.policy
    }

    /// Fetch one statement and run it through the normalization pipeline.
    ///
    /// An empty table is a successful outcome: the provider had nothing for the
    /// requested periods.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::InvalidParameter`](vnfin_core::StatementError::InvalidParameter)
    /// before any remote call if the request cannot be expanded, and propagates source
    /// failures unchanged.
    pub async fn fetch_statement(&self, request: &StatementRequest) -> Result<StatementTable> {
        let periods = request.periods()?;
        debug!(
            provider = self.source.name(),
            symbol = %request.symbol,
            statement_type = %request.statement_type,
            periods = periods.len(),
            "Fetching statement"
        );

        let values = self
            .source
            .fetch_values(
                &request.symbol,
                request.statement_type,
                request.period_kind,
                &periods,
            )
            .await?;
        let meta = self
            .source
            .fetch_meta(&request.symbol, request.statement_type)
            .await?;
        debug!(
            values = values.len(),
            meta = meta.len(),
            "Fetched raw statement records"
        );

        let table = normalize(request, &values, &meta, &self.policy)?;
        info!(
            symbol = %request.symbol,
            statement_type = %request.statement_type,
            class = ?self.policy.entity_class(&request.symbol),
            rows = table.len(),
            periods = table.periods().len(),
            "Normalized statement"
        );
        Ok(table)
    }

    /// Fetch one statement as a polars DataFrame.
    ///
    /// # Errors
    ///
    /// As [`fetch_statement`](Self::fetch_statement), plus
    /// [`StatementError::Frame`](vnfin_core::StatementError::Frame) if the frame cannot be
    /// built.
    pub async fn fetch_statement_frame(&self, request: &StatementRequest) -> Result<DataFrame> {
        self.fetch_statement(request).await?.to_dataframe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vnfin_core::{
        DataProvider, FiscalPeriod, LineItemMeta, PeriodKind, RawLineValue, StatementError,
        StatementType, Symbol,
    };

    #[derive(Debug, Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl DataProvider for CountingSource {
        fn name(&self) -> &str {
            "Counting"
        }

        fn description(&self) -> &str {
            "Counts calls and returns nothing"
        }
    }

    #[async_trait]
    impl StatementSource for CountingSource {
        async fn fetch_values(
            &self,
            _symbol: &Symbol,
            _statement_type: StatementType,
            _period_kind: PeriodKind,
            _periods: &[FiscalPeriod],
        ) -> Result<Vec<RawLineValue>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn fetch_meta(
            &self,
            _symbol: &Symbol,
            _statement_type: StatementType,
        ) -> Result<Vec<LineItemMeta>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_service_debug() {
        let service = StatementService::new(Arc::new(CountingSource::default()));
        let debug = format!("{service:?}");
        assert!(debug.contains("Counting"));
        assert_eq!(service.source().name(), "Counting");
    }

    #[tokio::test]
    async fn test_empty_source_yields_empty_table() {
        let source = Arc::new(CountingSource::default());
        let service = StatementService::new(source.clone());
        let request =
            StatementRequest::new("FPT", StatementType::CashFlow, PeriodKind::Quarterly, 1)
                .unwrap();

        let table = service.fetch_statement(&request).await.unwrap();
        assert!(table.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalid_lookback_fails_before_fetch() {
        let source = Arc::new(CountingSource::default());
        let service = StatementService::new(source.clone());
        let request = StatementRequest {
            symbol: Symbol::new("FPT"),
            statement_type: StatementType::BalanceSheet,
            period_kind: PeriodKind::Annual,
            lookback_years: 0,
        };

        let err = service.fetch_statement(&request).await.unwrap_err();
        assert!(matches!(err, StatementError::InvalidParameter(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_with_policy_replaces_bank_set() {
        let service = StatementService::new(Arc::new(CountingSource::default()))
            .with_policy(ReportingPolicy::default().with_bank_symbols(["FPT"]));
        assert!(service.policy().is_bank(&Symbol::new("FPT")));
        assert!(!service.policy().is_bank(&Symbol::new("VCB")));
    }
}
