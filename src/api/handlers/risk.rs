use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::calculator::{self, format_currency, format_percentage};
use crate::models::{RiskMetrics, TradeInputs};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    pub entry_price: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub trading_capital: f64,
    pub risk_percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub inputs: TradeInputs,
    pub metrics: RiskMetrics,
    /// Move from entry to take-profit, in percent.
    pub profit_percentage: f64,
    pub formatted: FormattedMetrics,
}

#[derive(Debug, Serialize)]
pub struct FormattedMetrics {
    pub risk_reward_ratio: String,
    pub position_size: String,
    pub potential_profit: String,
    pub potential_loss: String,
    pub profit_percentage: String,
}

/// POST /api/risk: Position size and risk metrics for one trade setup.
pub async fn calculate(
    State(state): State<AppState>,
    Json(body): Json<RiskRequest>,
) -> Json<ApiResponse<RiskReport>> {
    let inputs = TradeInputs {
        entry_price: body.entry_price,
        stop_loss_price: body.stop_loss_price,
        take_profit_price: body.take_profit_price,
        trading_capital: body.trading_capital,
        risk_percentage: body
            .risk_percentage
            .unwrap_or(state.config.default_risk_percentage),
    };

    let metrics = calculator::calculate(&inputs);
    let profit_percentage =
        calculator::profit_percentage(inputs.entry_price, inputs.take_profit_price);
    crate::metrics::record_risk_calculation();

    tracing::debug!(
        entry = inputs.entry_price,
        stop_loss = inputs.stop_loss_price,
        position_size = metrics.position_size,
        risk_reward = metrics.risk_reward_ratio,
        "Risk metrics calculated"
    );

    let c = &state.config;
    let formatted = FormattedMetrics {
        risk_reward_ratio: format!("{:.2}", metrics.risk_reward_ratio),
        position_size: format!("{:.2} units", metrics.position_size),
        potential_profit: format_currency(metrics.potential_profit, &c.currency_symbol, c.currency_decimals),
        potential_loss: format_currency(metrics.potential_loss, &c.currency_symbol, c.currency_decimals),
        profit_percentage: format_percentage(profit_percentage, c.percentage_decimals),
    };

    ApiResponse::ok(RiskReport {
        inputs,
        metrics,
        profit_percentage,
        formatted,
    })
}
