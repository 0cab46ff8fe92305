//! Company profile snapshot as shown on a profile card.

use serde::{Deserialize, Serialize};

use crate::market::Symbol;

/// Street address of a company's headquarters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// First street line.
    pub address1: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Country name.
    pub country: String,
}

impl PostalAddress {
    /// Render as `"address1, city, zip, country"`.
    #[must_use]
    pub fn composed(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.address1, self.city, self.zip, self.country
        )
    }
}

/// Present-day descriptive fields for one symbol.
///
/// Every field is required; connectors fail with a data error rather than
/// fill in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Symbol the snapshot describes.
    pub symbol: Symbol,
    /// Full company name.
    pub long_name: String,
    /// Sector classification.
    pub sector: String,
    /// Industry classification.
    pub industry: String,
    /// Latest traded price.
    pub current_price: f64,
    /// Investor relations phone number.
    pub phone: String,
    /// Headquarters address.
    pub address: PostalAddress,
    /// Company website.
    pub website: String,
    /// Free-text business description.
    pub long_business_summary: String,
}
