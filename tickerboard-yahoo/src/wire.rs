//! Yahoo Finance JSON payloads and their mapping onto tickerboard types.
//!
//! Every field is optional on the wire; the conversions decide what is
//! required. History rows without an adjusted close are skipped, while any
//! missing profile field fails the whole snapshot.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;
use tickerboard_core::{BoardError, PostalAddress, PricePoint, PriceSeries, ProfileSnapshot, Symbol};

/// Error object Yahoo embeds next to a `null` result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Short code such as `"Not Found"`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiError {
    fn into_board_error(self, context: &str) -> BoardError {
        let code = self.code.unwrap_or_default();
        let description = self.description.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            BoardError::not_found(context.to_string())
        } else {
            BoardError::Data(format!("{context}: {code} {description}").trim_end().to_string())
        }
    }
}

/* ---------------- v8 chart ---------------- */

/// Top-level `/v8/finance/chart/{symbol}` response.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    /// Chart payload.
    pub chart: ChartBody,
}

/// Result-or-error body of a chart response.
#[derive(Debug, Deserialize)]
pub struct ChartBody {
    /// One entry per requested symbol (always one here).
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Set when Yahoo rejected the request.
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Series data for one symbol.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Exchange metadata.
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    /// Bar timestamps in UNIX seconds.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// Price columns aligned with `timestamp`.
    #[serde(default)]
    pub indicators: Indicators,
}

/// Subset of the chart `meta` object.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// IANA name of the listing exchange's timezone.
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
}

/// Indicator columns of a chart result.
#[derive(Debug, Default, Deserialize)]
pub struct Indicators {
    /// Adjusted close blocks; present when `includeAdjustedClose=true`.
    #[serde(default)]
    pub adjclose: Vec<AdjCloseBlock>,
}

/// Adjusted close column; `null` marks a row without data.
#[derive(Debug, Default, Deserialize)]
pub struct AdjCloseBlock {
    /// Values aligned with the timestamps.
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Convert into a daily series dated in the exchange timezone.
    ///
    /// # Errors
    /// `NotFound` when Yahoo reports an unknown symbol or returns no result,
    /// `Data` when the adjusted close column is absent or its length
    /// differs from the timestamp column.
    pub fn into_series(self, symbol: &Symbol) -> Result<PriceSeries, BoardError> {
        let context = format!("history for {symbol}");
        if let Some(err) = self.chart.error {
            return Err(err.into_board_error(&context));
        }
        let result = self
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| BoardError::not_found(context.clone()))?;

        let tz: Tz = result
            .meta
            .and_then(|m| m.exchange_timezone_name)
            .and_then(|name| name.parse().ok())
            .unwrap_or(chrono_tz::UTC);

        // An empty window legitimately has no columns at all.
        if result.timestamp.is_empty() {
            return Ok(PriceSeries::new(symbol.clone(), Vec::new()));
        }
        let adjclose = result
            .indicators
            .adjclose
            .into_iter()
            .next()
            .ok_or_else(|| BoardError::missing_field("adjclose", &context))?
            .adjclose;
        if adjclose.len() != result.timestamp.len() {
            return Err(BoardError::Data(format!(
                "{context}: {} timestamps but {} adjusted closes",
                result.timestamp.len(),
                adjclose.len()
            )));
        }

        let points = result
            .timestamp
            .iter()
            .zip(adjclose)
            .filter_map(|(&ts, value)| {
                let adj_close = value.filter(|v| v.is_finite())?;
                let date = DateTime::from_timestamp(ts, 0)?
                    .with_timezone(&tz)
                    .date_naive();
                Some(PricePoint { date, adj_close })
            })
            .collect();
        Ok(PriceSeries::new(symbol.clone(), points))
    }
}

/* ---------------- v10 quoteSummary ---------------- */

/// Modules requested from `quoteSummary`.
pub const PROFILE_MODULES: &str = "assetProfile,price,financialData";

/// Top-level `/v10/finance/quoteSummary/{symbol}` response.
#[derive(Debug, Deserialize)]
pub struct QuoteSummaryEnvelope {
    /// Summary payload.
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryBody,
}

/// Result-or-error body of a quoteSummary response.
#[derive(Debug, Deserialize)]
pub struct QuoteSummaryBody {
    /// One entry per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
    /// Set when Yahoo rejected the request.
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Requested modules for one symbol.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    /// Company description and contact details.
    #[serde(default)]
    pub asset_profile: Option<AssetProfile>,
    /// Naming and market price.
    #[serde(default)]
    pub price: Option<PriceModule>,
    /// Financial data; carries `currentPrice`.
    #[serde(default)]
    pub financial_data: Option<FinancialData>,
}

/// `assetProfile` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub long_business_summary: Option<String>,
}

/// `price` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    #[serde(default)]
    pub long_name: Option<String>,
}

/// `financialData` module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(default)]
    pub current_price: Option<RawNumber>,
}

/// Yahoo's `{ "raw": 1.0, "fmt": "1.00" }` number wrapper; `{}` when absent.
#[derive(Debug, Default, Deserialize)]
pub struct RawNumber {
    #[serde(default)]
    pub raw: Option<f64>,
}

fn require<T>(value: Option<T>, field: &str, context: &str) -> Result<T, BoardError> {
    value.ok_or_else(|| BoardError::missing_field(field, context))
}

impl QuoteSummaryEnvelope {
    /// Convert into a profile snapshot, requiring every card field.
    ///
    /// # Errors
    /// `NotFound` for unknown symbols, `Data` naming the first missing field.
    pub fn into_snapshot(self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        let context = format!("profile for {symbol}");
        if let Some(err) = self.quote_summary.error {
            return Err(err.into_board_error(&context));
        }
        let result = self
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| BoardError::not_found(context.clone()))?;

        let profile = require(result.asset_profile, "assetProfile", &context)?;
        let price = require(result.price, "price", &context)?;
        let current_price = result
            .financial_data
            .and_then(|f| f.current_price)
            .and_then(|p| p.raw);

        Ok(ProfileSnapshot {
            symbol: symbol.clone(),
            long_name: require(price.long_name, "longName", &context)?,
            sector: require(profile.sector, "sector", &context)?,
            industry: require(profile.industry, "industry", &context)?,
            current_price: require(current_price, "currentPrice", &context)?,
            phone: require(profile.phone, "phone", &context)?,
            address: PostalAddress {
                address1: require(profile.address1, "address1", &context)?,
                city: require(profile.city, "city", &context)?,
                zip: require(profile.zip, "zip", &context)?,
                country: require(profile.country, "country", &context)?,
            },
            website: require(profile.website, "website", &context)?,
            long_business_summary: require(
                profile.long_business_summary,
                "longBusinessSummary",
                &context,
            )?,
        })
    }
}
