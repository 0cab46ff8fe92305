//! Company profile cards.

use serde::{Deserialize, Serialize};
use tickerboard_core::{ProfileSnapshot, Symbol};

/// Heading printed at the top of every card.
pub const CARD_HEADING: &str = "Company Profile";
/// Label printed above the business summary.
pub const SUMMARY_LABEL: &str = "Business Summary";

/// Display-ready card for one symbol.
///
/// Holds plain text only; the page inserts it with `textContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub symbol: Symbol,
    pub heading: String,
    /// Company long name.
    pub title: String,
    /// `"Label: value"` lines in display order.
    pub lines: Vec<String>,
    pub summary_label: String,
    pub summary: String,
}

impl From<&ProfileSnapshot> for ProfileCard {
    fn from(p: &ProfileSnapshot) -> Self {
        Self {
            symbol: p.symbol.clone(),
            heading: CARD_HEADING.to_string(),
            title: p.long_name.clone(),
            lines: vec![
                format!("Sector: {}", p.sector),
                format!("Industry: {}", p.industry),
                format!("Stock Price: ${}", format_price(p.current_price)),
                format!("Phone: {}", p.phone),
                format!("Address: {}", p.address.composed()),
                format!("Website: {}", p.website),
            ],
            summary_label: SUMMARY_LABEL.to_string(),
            summary: p.long_business_summary.clone(),
        }
    }
}

/// Shortest round-trip form, keeping one decimal for whole numbers (`190.0`).
fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}
