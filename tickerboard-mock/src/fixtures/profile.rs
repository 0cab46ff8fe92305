use tickerboard_core::{PostalAddress, ProfileSnapshot, Symbol};

pub fn by_symbol(s: &Symbol) -> ProfileSnapshot {
    match s.as_str() {
        "AAPL" => ProfileSnapshot {
            symbol: s.clone(),
            long_name: "Apple Inc.".into(),
            sector: "Technology".into(),
            industry: "Consumer Electronics".into(),
            current_price: 189.3,
            phone: "(408) 996-1010".into(),
            address: PostalAddress {
                address1: "One Apple Park Way".into(),
                city: "Cupertino".into(),
                zip: "95014".into(),
                country: "United States".into(),
            },
            website: "https://www.apple.com".into(),
            long_business_summary: "Apple Inc. designs, manufactures, and markets smartphones, \
                personal computers, tablets, wearables, and accessories worldwide."
                .into(),
        },
        "MSFT" => ProfileSnapshot {
            symbol: s.clone(),
            long_name: "Microsoft Corporation".into(),
            sector: "Technology".into(),
            industry: "Software - Infrastructure".into(),
            current_price: 415.5,
            phone: "425 882 8080".into(),
            address: PostalAddress {
                address1: "One Microsoft Way".into(),
                city: "Redmond".into(),
                zip: "98052-6399".into(),
                country: "United States".into(),
            },
            website: "https://www.microsoft.com".into(),
            long_business_summary: "Microsoft Corporation develops and supports software, \
                services, devices, and solutions worldwide."
                .into(),
        },
        _ => generic(s),
    }
}

fn generic(s: &Symbol) -> ProfileSnapshot {
    ProfileSnapshot {
        symbol: s.clone(),
        long_name: format!("{s} Generic Corp"),
        sector: "Technology".into(),
        industry: "Software".into(),
        current_price: 100.0,
        phone: "555 0100".into(),
        address: PostalAddress {
            address1: "1 Main Street".into(),
            city: "Springfield".into(),
            zip: "00000".into(),
            country: "United States".into(),
        },
        website: "https://example.com".into(),
        long_business_summary: "A generic company used by offline fixtures.".into(),
    }
}
