#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/vnfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! VNDirect finfo data provider.
//!
//! This crate implements the vnfin-core [`StatementSource`] trait for the
//! [VNDirect finfo](https://api-finfo.vndirect.com.vn) API, which serves line-item
//! values and statement layouts for companies listed in Vietnam.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vnfin_core::{PeriodKind, StatementSource, StatementType, Symbol, expand};
//! use vnfin_vndirect::VndirectProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = VndirectProvider::new();
//!     let symbol = Symbol::new("VCB");
//!     let periods = expand(PeriodKind::Annual, 3)?;
//!
//!     let values = provider
//!         .fetch_values(&symbol, StatementType::BalanceSheet, PeriodKind::Annual, &periods)
//!         .await?;
//!     let meta = provider.fetch_meta(&symbol, StatementType::BalanceSheet).await?;
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use vnfin_core::{
    DataProvider, FiscalPeriod, LineItemMeta, PeriodKind, RawLineValue, Result, StatementError,
    StatementSource, StatementType, Symbol,
};

/// Base URL for the VNDirect finfo v4 API.
pub const VNDIRECT_BASE_URL: &str = "https://api-finfo.vndirect.com.vn/v4";

/// Accounting circulars whose statement layouts are requested.
const LAYOUT_NOTES: &str = "TT199/2014/TT-BTC,TT334/2016/TT-BTC,TT49/2014/TT-NHNN,TT202/2014/TT-BTC";

/// Page size for statement values.
const VALUES_PAGE_SIZE: usize = 2000;

/// Page size for statement layouts.
const MODELS_PAGE_SIZE: usize = 999;

/// Browser-like headers; the API rejects bare clients.
const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "vi"),
    ("Cache-Control", "no-cache"),
    ("Pragma", "no-cache"),
    ("DNT", "1"),
    ("Sec-Fetch-Dest", "empty"),
    ("Sec-Fetch-Mode", "cors"),
    ("Sec-Fetch-Site", "same-site"),
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36",
    ),
];

/// VNDirect finfo data provider.
///
/// Provides access to:
/// - Balance sheet, income statement and cash-flow line-item values
/// - Statement layouts (item names, nesting levels and display order)
#[derive(Clone, Debug)]
pub struct VndirectProvider {
    client: Client,
    base_url: String,
}

impl Default for VndirectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VndirectProvider {
    /// Create a new VNDirect provider against the public API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: VNDIRECT_BASE_URL.to_string(),
        }
    }

    /// Create a new VNDirect provider with a custom HTTP client.
    ///
    /// Timeouts and proxies are configured on the client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: VNDIRECT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the API root in use.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the statement values URL.
    fn values_url(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
        period_kind: PeriodKind,
        periods: &[FiscalPeriod],
    ) -> String {
        let fiscal_dates = periods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/financial_statements?q=code:{}~reportType:{}~modelType:{}~fiscalDate:{fiscal_dates}&sort=fiscalDate&size={VALUES_PAGE_SIZE}",
            self.base_url,
            symbol.as_str(),
            period_kind.report_type(),
            statement_type.model_type_code(),
        )
    }

    /// Build the statement layout URL.
    fn models_url(&self, symbol: &Symbol, statement_type: StatementType) -> String {
        format!(
            "{}/financial_models?sort=displayOrder:asc&q=codeList:{}~modelType:{}~note:{LAYOUT_NOTES}~displayLevel:0,1,2,3&size={MODELS_PAGE_SIZE}",
            self.base_url,
            symbol.as_str(),
            statement_type.model_type_code(),
        )
    }

    /// Make a GET request and parse the `data` array of the JSON envelope.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        tracing::debug!("VNDirect request: {}", url);

        let mut request = self.client.get(url);
        for &(name, value) in REQUEST_HEADERS {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StatementError::RemoteUnavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(StatementError::RemoteUnavailable(
                "rate limited by VNDirect".to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(StatementError::RemoteUnavailable(format!(
                "HTTP {status}: {text}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| StatementError::RemoteUnavailable(e.to_string()))?;

        let envelope: Envelope<T> =
            serde_json::from_str(&text).map_err(|e| StatementError::Parse(format!("{e}: {text}")))?;
        Ok(envelope.data)
    }
}

impl DataProvider for VndirectProvider {
    fn name(&self) -> &str {
        "VNDirect"
    }

    fn description(&self) -> &str {
        "VNDirect finfo - Financial statements of Vietnamese listed companies"
    }
}

#[async_trait]
impl StatementSource for VndirectProvider {
    async fn fetch_values(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
        period_kind: PeriodKind,
        periods: &[FiscalPeriod],
    ) -> Result<Vec<RawLineValue>> {
        if periods.is_empty() {
            return Err(StatementError::InvalidParameter(
                "at least one fiscal period is required".to_string(),
            ));
        }

        let url = self.values_url(symbol, statement_type, period_kind, periods);
        let records: Vec<VndirectValue> = self.get(&url).await?;

        records
            .into_iter()
            .map(|r| {
                Ok(RawLineValue::new(
                    r.item_code.into_string(),
                    r.fiscal_date.parse()?,
                    r.numeric_value,
                ))
            })
            .collect()
    }

    async fn fetch_meta(
        &self,
        symbol: &Symbol,
        statement_type: StatementType,
    ) -> Result<Vec<LineItemMeta>> {
        let url = self.models_url(symbol, statement_type);
        let mut models: Vec<VndirectModel> = self.get(&url).await?;

        // Stable, so equal or missing orders keep the response order.
        models.sort_by(|a, b| match (a.display_order, b.display_order) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        Ok(models
            .into_iter()
            .map(|m| {
                LineItemMeta::new(
                    m.item_code.into_string(),
                    m.item_vn_name.unwrap_or_default(),
                    m.display_level.and_then(nesting_level),
                )
            })
            .collect())
    }
}

/// Converts a provider display level (sometimes float-typed) to a nesting level.
fn nesting_level(level: f64) -> Option<u8> {
    (level.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&level)).then_some(level as u8)
}

// ============================================================================
// VNDirect API Response Types
// ============================================================================

/// Response envelope shared by the finfo endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_CODE: f64 = 9_007_199_254_740_992.0;

/// Item codes arrive as numbers on some endpoints and strings on others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ItemCode {
    Number(serde_json::Number),
    Text(String),
}

impl ItemCode {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => match n.as_f64() {
                // Float-typed integral codes must join with their integer spelling.
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_CODE => {
                    (f as i64).to_string()
                }
                _ => n.to_string(),
            },
            Self::Text(s) => s,
        }
    }
}

/// Statement value record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VndirectValue {
    item_code: ItemCode,
    fiscal_date: String,
    #[serde(default)]
    numeric_value: Option<f64>,
}

/// Statement layout record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VndirectModel {
    item_code: ItemCode,
    #[serde(default)]
    item_vn_name: Option<String>,
    #[serde(default)]
    display_level: Option<f64>,
    #[serde(default)]
    display_order: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn year_ends(years: &[i32]) -> Vec<FiscalPeriod> {
        years
            .iter()
            .map(|&y| FiscalPeriod::year_end(y).unwrap())
            .collect()
    }

    #[test]
    fn test_values_url() {
        let provider = VndirectProvider::new();
        let url = provider.values_url(
            &Symbol::new("vcb"),
            StatementType::BalanceSheet,
            PeriodKind::Annual,
            &year_ends(&[2024, 2023]),
        );
        assert_eq!(
            url,
            "https://api-finfo.vndirect.com.vn/v4/financial_statements?q=code:VCB~reportType:ANNUAL~modelType:1,89,101,411~fiscalDate:2024-12-31,2023-12-31&sort=fiscalDate&size=2000"
        );
    }

    #[test]
    fn test_models_url() {
        let provider = VndirectProvider::new().with_base_url("http://localhost:9000/v4/");
        let url = provider.models_url(&Symbol::new("FPT"), StatementType::CashFlow);
        assert!(url.starts_with("http://localhost:9000/v4/financial_models?sort=displayOrder:asc"));
        assert!(url.contains("codeList:FPT~modelType:3,91,103,413"));
        assert!(url.contains("~displayLevel:0,1,2,3&size=999"));
    }

    #[test]
    fn test_provider_metadata() {
        let provider = VndirectProvider::default();
        assert_eq!(provider.name(), "VNDirect");
        assert!(!provider.description().is_empty());
        assert_eq!(provider.base_url(), VNDIRECT_BASE_URL);
    }

    #[test]
    fn test_item_code_spellings_agree() {
        let codes: Vec<ItemCode> =
            serde_json::from_value(json!([12700, 12700.0, "12700", 12700.5, -3.0])).unwrap();
        let codes: Vec<String> = codes.into_iter().map(ItemCode::into_string).collect();
        assert_eq!(codes, ["12700", "12700", "12700", "12700.5", "-3"]);
    }

    #[tokio::test]
    async fn test_float_item_codes_join_integer_meta() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/financial_statements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"itemCode": 12700.0, "fiscalDate": "2024-12-31", "numericValue": 5.0}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/financial_models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"itemCode": 12700, "itemVnName": "Tiền", "displayLevel": 1, "displayOrder": 1}]
            })))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let symbol = Symbol::new("VCB");
        let values = provider
            .fetch_values(
                &symbol,
                StatementType::BalanceSheet,
                PeriodKind::Annual,
                &year_ends(&[2024]),
            )
            .await
            .unwrap();
        let meta = provider
            .fetch_meta(&symbol, StatementType::BalanceSheet)
            .await
            .unwrap();
        assert_eq!(values[0].item_code, meta[0].item_code);
    }

    #[test]
    fn test_nesting_level_conversion() {
        assert_eq!(nesting_level(0.0), Some(0));
        assert_eq!(nesting_level(3.0), Some(3));
        assert_eq!(nesting_level(1.5), None);
        assert_eq!(nesting_level(-1.0), None);
    }

    #[tokio::test]
    async fn test_fetch_values() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/financial_statements"))
            .and(query_param(
                "q",
                "code:VCB~reportType:QUARTER~modelType:2,90,102,412~fiscalDate:2024-03-31",
            ))
            .and(query_param("sort", "fiscalDate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"itemCode": 12700, "fiscalDate": "2024-03-31", "numericValue": 1250.5},
                    {"itemCode": "12701", "fiscalDate": "2024-03-31", "numericValue": null},
                ],
                "currentPage": 1,
            })))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let periods = vec![FiscalPeriod::quarter_end(2024, 1).unwrap()];
        let values = provider
            .fetch_values(
                &Symbol::new("VCB"),
                StatementType::IncomeStatement,
                PeriodKind::Quarterly,
                &periods,
            )
            .await
            .unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values[0].item_code, "12700");
        assert_eq!(values[0].numeric_value, Some(1250.5));
        assert_eq!(values[0].fiscal_date, periods[0]);
        assert_eq!(values[1].item_code, "12701");
        assert_eq!(values[1].numeric_value, None);
    }

    #[tokio::test]
    async fn test_fetch_meta_sorted_by_display_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/financial_models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"itemCode": 2, "itemVnName": "Tiền", "displayLevel": 1.0, "displayOrder": 2},
                    {"itemCode": 1, "itemVnName": "TỔNG CỘNG TÀI SẢN", "displayLevel": 0, "displayOrder": 1},
                    {"itemCode": 3, "itemVnName": null, "displayLevel": null},
                ]
            })))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let meta = provider
            .fetch_meta(&Symbol::new("VCB"), StatementType::BalanceSheet)
            .await
            .unwrap();

        assert_eq!(
            meta,
            vec![
                LineItemMeta::new("1", "TỔNG CỘNG TÀI SẢN", Some(0)),
                LineItemMeta::new("2", "Tiền", Some(1)),
                LineItemMeta::new("3", "", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_http_error_is_remote_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let err = provider
            .fetch_meta(&Symbol::new("VCB"), StatementType::BalanceSheet)
            .await
            .unwrap_err();
        assert!(matches!(err, StatementError::RemoteUnavailable(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_rate_limit_is_remote_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let err = provider
            .fetch_values(
                &Symbol::new("VCB"),
                StatementType::BalanceSheet,
                PeriodKind::Annual,
                &year_ends(&[2024]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StatementError::RemoteUnavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"itemCode": 1, "fiscalDate": "31/12/2024", "numericValue": 1.0}]
            })))
            .mount(&server)
            .await;

        let provider = VndirectProvider::new().with_base_url(server.uri());
        let err = provider
            .fetch_values(
                &Symbol::new("VCB"),
                StatementType::BalanceSheet,
                PeriodKind::Annual,
                &year_ends(&[2024]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StatementError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_remote_unavailable() {
        let provider = VndirectProvider::new().with_base_url("http://127.0.0.1:1");
        let err = provider
            .fetch_meta(&Symbol::new("VCB"), StatementType::BalanceSheet)
            .await
            .unwrap_err();
        assert!(matches!(err, StatementError::RemoteUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_periods_rejected() {
        let provider = VndirectProvider::new();
        let err = provider
            .fetch_values(
                &Symbol::new("VCB"),
                StatementType::BalanceSheet,
                PeriodKind::Annual,
                &[],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StatementError::InvalidParameter(_)));
    }
}
