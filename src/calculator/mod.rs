pub mod format;
pub mod risk;

pub use format::{format_currency, format_percentage};
pub use risk::{
    calculate, expected_value, position_size, potential_loss, potential_profit,
    profit_percentage, risk_reward_ratio,
};
