use crate::models::{RiskMetrics, TradeInputs};

/// Compute every metric for one set of trade inputs.
///
/// Profit and loss are derived from the computed position size, so a
/// degenerate setup (entry ≤ 0, or stop-loss at entry) yields all zeros
/// apart from the ratio.
pub fn calculate(inputs: &TradeInputs) -> RiskMetrics {
    let size = position_size(
        inputs.trading_capital,
        inputs.risk_percentage,
        inputs.entry_price,
        inputs.stop_loss_price,
    );

    RiskMetrics {
        risk_reward_ratio: risk_reward_ratio(
            inputs.entry_price,
            inputs.stop_loss_price,
            inputs.take_profit_price,
        ),
        position_size: size,
        potential_profit: potential_profit(size, inputs.entry_price, inputs.take_profit_price),
        potential_loss: potential_loss(size, inputs.entry_price, inputs.stop_loss_price),
    }
}

/// Reward per unit of risk. Zero when the stop-loss sits on the entry.
pub fn risk_reward_ratio(entry: f64, stop_loss: f64, take_profit: f64) -> f64 {
    let risk = (entry - stop_loss).abs();
    let reward = (take_profit - entry).abs();

    if risk > 0.0 {
        reward / risk
    } else {
        0.0
    }
}

/// Units to buy so that hitting the stop-loss loses `risk_pct`% of `capital`.
pub fn position_size(capital: f64, risk_pct: f64, entry: f64, stop_loss: f64) -> f64 {
    let risk_amount = capital * (risk_pct / 100.0);
    let price_risk = (entry - stop_loss).abs();

    if entry > 0.0 && price_risk > 0.0 {
        risk_amount / price_risk
    } else {
        0.0
    }
}

pub fn potential_profit(size: f64, entry: f64, take_profit: f64) -> f64 {
    size * (take_profit - entry).abs()
}

pub fn potential_loss(size: f64, entry: f64, stop_loss: f64) -> f64 {
    size * (entry - stop_loss).abs()
}

/// Percent move from `entry` to `exit`. Zero for a non-positive entry.
pub fn profit_percentage(entry: f64, exit: f64) -> f64 {
    if entry <= 0.0 {
        return 0.0;
    }
    ((exit - entry) / entry) * 100.0
}

/// Expected value per trade in R multiples.
/// EV = p * rr - (1 - p), with p = win_rate_pct / 100.
pub fn expected_value(win_rate_pct: f64, risk_reward_ratio: f64) -> f64 {
    let p = win_rate_pct / 100.0;
    p * risk_reward_ratio - (1.0 - p)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
