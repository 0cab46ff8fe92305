use async_trait::async_trait;
use tickerboard_core::connector::{BoardConnector, HistoryProvider};
use tickerboard_core::{
    BoardError, Capability, HistoryRequest, PricePoint, PriceSeries, Symbol,
};

struct HistoryOnly;

#[async_trait]
impl HistoryProvider for HistoryOnly {
    async fn history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        Ok(PriceSeries::new(
            symbol.clone(),
            vec![PricePoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                adj_close: 1.0,
            }],
        ))
    }
}

impl BoardConnector for HistoryOnly {
    fn name(&self) -> &'static str {
        "history-only"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[test]
fn capability_discovery_follows_accessors() {
    let c = HistoryOnly;
    assert!(c.supports(Capability::History));
    assert!(!c.supports(Capability::Profile));
    assert!(c.as_profile_provider().is_none());
    assert_eq!(c.key().as_str(), "history-only");
    assert_eq!(c.vendor(), "unknown");
}

#[tokio::test]
async fn history_provider_is_usable_through_the_accessor() {
    let c = HistoryOnly;
    let sym = Symbol::new("AAPL").unwrap();
    let start = chrono::DateTime::from_timestamp(0, 0).unwrap();
    let end = chrono::DateTime::from_timestamp(86_400 * 10, 0).unwrap();
    let req = HistoryRequest::try_from_period(start, end).unwrap();

    let series = c
        .as_history_provider()
        .unwrap()
        .history(&sym, req)
        .await
        .unwrap();
    assert_eq!(series.symbol, sym);
    assert_eq!(series.points.len(), 1);
}
