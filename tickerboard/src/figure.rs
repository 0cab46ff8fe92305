//! Plotly-compatible chart figure built from price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tickerboard_core::PriceSeries;

/// Title shown above a non-empty chart.
pub const CHART_TITLE: &str = "Stock Prices Over Past Two Years";

/// A chart as Plotly.js expects it: `{"data": [...], "layout": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// One trace per selected symbol, in selection order.
    pub data: Vec<Trace>,
    /// Layout; empty for the empty figure.
    pub layout: Layout,
}

/// A single line trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Plotly trace type; always `"scatter"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Drawing mode; always `"lines"`.
    pub mode: String,
    /// Legend entry: the symbol.
    pub name: String,
    /// Trading days.
    pub x: Vec<NaiveDate>,
    /// Adjusted closes aligned with `x`.
    pub y: Vec<f64>,
}

/// Figure layout. Only the title is ever set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

/// Positioned layout title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
}

impl Title {
    fn centered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            x: 0.5,
            y: 0.9,
            xanchor: "center".into(),
            yanchor: "top".into(),
        }
    }
}

impl Trace {
    /// Line trace named after the series' symbol.
    #[must_use]
    pub fn from_series(series: &PriceSeries) -> Self {
        let (x, y) = series.points.iter().map(|p| (p.date, p.adj_close)).unzip();
        Self {
            kind: "scatter".into(),
            mode: "lines".into(),
            name: series.symbol.to_string(),
            x,
            y,
        }
    }
}

impl Figure {
    /// The figure rendered for an empty selection: no traces, no layout.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// One trace per series, in the given order, under the chart title.
    ///
    /// An empty slice yields [`Figure::empty`].
    #[must_use]
    pub fn from_series(series: &[PriceSeries]) -> Self {
        if series.is_empty() {
            return Self::empty();
        }
        Self {
            data: series.iter().map(Trace::from_series).collect(),
            layout: Layout {
                title: Some(Title::centered(CHART_TITLE)),
            },
        }
    }

    /// Trace names in drawing order.
    pub fn trace_names(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|t| t.name.as_str())
    }
}
