use chrono::NaiveDate;
use tickerboard_core::{PricePoint, PriceSeries, Symbol};

pub fn by_symbol(s: &Symbol) -> PriceSeries {
    let rows: &[(&str, f64)] = match s.as_str() {
        "AAPL" => &[
            ("2023-01-03", 123.63),
            ("2023-01-04", 124.91),
            ("2023-01-05", 123.57),
        ],
        "MSFT" => &[
            ("2023-01-03", 239.58),
            ("2023-01-04", 229.10),
            ("2023-01-05", 222.31),
        ],
        "GOOG" => &[
            ("2023-01-03", 89.70),
            ("2023-01-04", 88.71),
            ("2023-01-05", 86.77),
        ],
        "TSLA" => &[
            ("2023-01-03", 108.10),
            ("2023-01-04", 113.64),
            ("2023-01-05", 110.34),
        ],
        _ => return synthetic(s),
    };
    build(s, rows)
}

fn build(s: &Symbol, rows: &[(&str, f64)]) -> PriceSeries {
    let points = rows
        .iter()
        .filter_map(|&(date, adj_close)| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .map(|date| PricePoint { date, adj_close })
        })
        .collect();
    PriceSeries::new(s.clone(), points)
}

// Deterministic walk seeded by the ticker so unknown symbols still chart.
fn synthetic(s: &Symbol) -> PriceSeries {
    let seed: u32 = s.as_str().bytes().map(u32::from).sum();
    let base = f64::from(seed % 400 + 20);
    let points = (1..=5u32)
        .filter_map(|day| {
            let date = NaiveDate::from_ymd_opt(2023, 1, day + 1)?;
            let drift = f64::from((seed + day * 7) % 11) - 5.0;
            Some(PricePoint {
                date,
                adj_close: base + drift,
            })
        })
        .collect();
    PriceSeries::new(s.clone(), points)
}
