use crate::enums::{TradeDirection, TradeStatus};
use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single journaled trade.
///
/// The serialized form is the journal's JSON row shape: camelCase keys,
/// the direction under `type`, and nullable `exitPrice`/`pnl`.
///
/// `pnl` is the realized (or, for an open position, floating) profit/loss
/// in account currency. A trade without one is a data-quality gap, not an
/// error: downstream statistics skip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: u64,
    pub date: NaiveDate,
    pub pair: String,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    pub lot_size: Decimal,
    pub entry_price: Decimal,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
    pub strategy: String,
    #[serde(default)]
    pub status: TradeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    /// Checks the numeric constraints a well-formed journal row must meet.
    ///
    /// Validation is opt-in for callers ingesting untrusted data; the
    /// statistics layer never requires it and tolerates anything that
    /// deserializes.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.lot_size <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "lot_size".to_string(),
                format!("must be positive, got {}", self.lot_size),
            ));
        }
        if self.entry_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "entry_price".to_string(),
                format!("must be positive, got {}", self.entry_price),
            ));
        }
        Ok(())
    }

    /// Whether this trade carries a P&L figure and therefore counts
    /// toward statistics.
    pub fn has_pnl(&self) -> bool {
        self.pnl.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Trade {
        Trade {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 6, 24).unwrap(),
            pair: "EUR/USD".to_string(),
            direction: TradeDirection::Buy,
            lot_size: dec!(0.1),
            entry_price: dec!(1.0750),
            exit_price: Some(dec!(1.0825)),
            pnl: Some(dec!(125.50)),
            strategy: "Breakout".to_string(),
            status: TradeStatus::Closed,
            notes: None,
        }
    }

    #[test]
    fn deserializes_journal_row() {
        let json = r#"{
            "id": 5,
            "date": "2024-06-20",
            "pair": "GBP/USD",
            "type": "BUY",
            "lotSize": 0.25,
            "entryPrice": 1.2615,
            "exitPrice": null,
            "pnl": 45.30,
            "strategy": "Breakout",
            "status": "Open"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.direction, TradeDirection::Buy);
        assert_eq!(trade.exit_price, None);
        assert_eq!(trade.pnl, Some(dec!(45.30)));
        assert_eq!(trade.status, TradeStatus::Open);
    }

    #[test]
    fn missing_optional_fields_default() {
        // The statistics-screen mock rows carry neither exitPrice nor status.
        let json = r#"{
            "id": 2,
            "date": "2024-06-23",
            "pair": "GBP/JPY",
            "type": "SELL",
            "lotSize": 0.05,
            "entryPrice": 158.50,
            "strategy": "Reversal"
        }"#;

        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.exit_price, None);
        assert_eq!(trade.pnl, None);
        assert!(!trade.has_pnl());
        assert_eq!(trade.status, TradeStatus::Closed);
    }

    #[test]
    fn round_trips_through_json() {
        let trade = sample();
        let json = serde_json::to_string(&trade).unwrap();
        assert!(json.contains("\"lotSize\""));
        assert!(json.contains("\"type\":\"BUY\""));
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trade);
    }

    #[test]
    fn validate_rejects_non_positive_sizes() {
        let mut trade = sample();
        trade.lot_size = Decimal::ZERO;
        assert!(matches!(
            trade.validate(),
            Err(CoreError::InvalidInput(field, _)) if field == "lot_size"
        ));

        let mut trade = sample();
        trade.entry_price = dec!(-1.0);
        assert!(trade.validate().is_err());

        assert!(sample().validate().is_ok());
    }
}
