//! Quote snapshot model
//!
//! A snapshot is one immutable observation of a single ticker. It is replaced
//! wholesale on every refresh and never mutated in place.

use serde::{Deserialize, Serialize};

/// One point-in-time observation of market data for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Short ticker identifier, e.g. `NVDA`.
    pub symbol: String,
    /// Current trade price.
    pub price: f64,
    /// Signed absolute delta versus the prior close.
    pub change: f64,
    /// Signed percentage equivalent of `change`.
    ///
    /// Expected to share the sign of `change`; nothing enforces it.
    pub change_percent: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Trade count for the current session.
    pub volume: u64,
    /// Trailing 20-session average volume, when the source provides it.
    #[serde(
        rename = "averageVolume20D",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_volume_20d: Option<u64>,
    /// Pre-formatted market capitalisation, e.g. `2.15T`.
    pub market_cap: String,
}

impl QuoteSnapshot {
    /// The fixed NVDA record served by the built-in fixture source.
    pub fn nvda() -> Self {
        Self {
            symbol: "NVDA".to_string(),
            price: 875.42,
            change: 12.85,
            change_percent: 1.49,
            high: 879.50,
            low: 861.20,
            volume: 45_230_000,
            average_volume_20d: Some(38_500_000),
            market_cap: "2.15T".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Fixture files use the field names of the original quote record.
    fn test_deserializes_camel_case_fixture() {
        let json = r#"{
            "symbol": "AMD",
            "price": 160.5,
            "change": -5.0,
            "changePercent": -3.02,
            "high": 166.0,
            "low": 159.1,
            "volume": 1000,
            "averageVolume20D": 2000,
            "marketCap": "259B"
        }"#;
        let snapshot: QuoteSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.symbol, "AMD");
        assert_eq!(snapshot.change_percent, -3.02);
        assert_eq!(snapshot.average_volume_20d, Some(2000));
        assert_eq!(snapshot.market_cap, "259B");
    }

    #[test]
    fn test_average_volume_is_optional() {
        let json = r#"{"symbol":"X","price":1.0,"change":0.0,"changePercent":0.0,
            "high":1.0,"low":1.0,"volume":5,"marketCap":"1M"}"#;
        let snapshot: QuoteSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.average_volume_20d, None);

        let out = serde_json::to_string(&snapshot).unwrap();
        assert!(!out.contains("averageVolume20D"));
    }
}
