use serde::{Deserialize, Serialize};

/// Trade parameters as entered by the user. Prices and capital are in the
/// quote currency, `risk_percentage` is a percent of capital (1.0 = 1%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub entry_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub trading_capital: f64,
    pub risk_percentage: f64,
}

impl Default for TradeInputs {
    fn default() -> Self {
        Self {
            entry_price: 0.0,
            stop_loss_price: 0.0,
            take_profit_price: 0.0,
            trading_capital: 0.0,
            risk_percentage: 1.0,
        }
    }
}

/// Metrics derived from a [`TradeInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub risk_reward_ratio: f64,
    pub position_size: f64,
    pub potential_profit: f64,
    pub potential_loss: f64,
}
