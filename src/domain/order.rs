use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    /// Lowercase word used in user-facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buy" | "b" => Ok(OrderSide::Buy),
            "sell" | "s" => Ok(OrderSide::Sell),
            other => Err(format!("invalid side '{other}'; expected buy|sell")),
        }
    }
}

/// A submitted limit order, as handed to the order sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub client_order_id: String,
    pub side: OrderSide,
    pub symbol: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
    pub fee: Decimal,
    pub fee_asset: String,
    pub receive: Decimal,
    pub receive_asset: String,
    pub submitted_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Acknowledgement shown to the user once the order is accepted
    pub fn acknowledgement(&self) -> String {
        match self.side {
            OrderSide::Buy => "Buy order submitted!".to_string(),
            OrderSide::Sell => "Sell order submitted!".to_string(),
        }
    }

    pub(crate) fn new_client_order_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!(" SELL ".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert_eq!("s".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }

    #[test]
    fn test_side_display() {
        assert_eq!(OrderSide::Buy.to_string(), "BUY");
        assert_eq!(OrderSide::Sell.as_str(), "sell");
        assert_eq!(OrderSide::default(), OrderSide::Buy);
    }

    #[test]
    fn test_side_serializes_uppercase() {
        let json = serde_json::to_string(&OrderSide::Sell).unwrap();
        assert_eq!(json, "\"SELL\"");
    }
}
