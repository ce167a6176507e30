use serde::{Deserialize, Serialize};

/// The direction of a trade, serialized as `BUY`/`SELL` to match the
/// journal's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    /// Returns the opposite direction of the trade
    pub fn opposite(&self) -> Self {
        match self {
            TradeDirection::Buy => TradeDirection::Sell,
            TradeDirection::Sell => TradeDirection::Buy,
        }
    }
}

/// Whether a position is still running or has been exited.
///
/// Informational only: statistics are driven by the presence and sign of
/// `pnl`, never by this flag. An open position can carry a floating P&L,
/// and an exited one can lack a final figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Open,
    #[default]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_opposite_flips() {
        assert_eq!(TradeDirection::Buy.opposite(), TradeDirection::Sell);
        assert_eq!(TradeDirection::Sell.opposite(), TradeDirection::Buy);
    }
}
