use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiResponse;
use crate::models::Language;
use crate::AppState;

#[derive(Serialize)]
pub struct DisplaySettings {
    pub default_language: Language,
    pub currency_symbol: String,
    pub currency_decimals: usize,
    pub percentage_decimals: usize,
    pub default_risk_percentage: f64,
}

#[derive(Serialize)]
pub struct LanguageInfo {
    pub code: Language,
    pub display_name: &'static str,
    pub rtl: bool,
}

/// GET /api/config: Display settings the service runs with.
pub async fn get_config(State(state): State<AppState>) -> Json<ApiResponse<DisplaySettings>> {
    let c = &state.config;
    ApiResponse::ok(DisplaySettings {
        default_language: c.default_language,
        currency_symbol: c.currency_symbol.clone(),
        currency_decimals: c.currency_decimals,
        percentage_decimals: c.percentage_decimals,
        default_risk_percentage: c.default_risk_percentage,
    })
}

/// GET /api/languages: Supported response languages.
pub async fn languages() -> Json<ApiResponse<Vec<LanguageInfo>>> {
    let list = Language::ALL
        .into_iter()
        .map(|language| LanguageInfo {
            code: language,
            display_name: language.display_name(),
            rtl: language.is_rtl(),
        })
        .collect();

    ApiResponse::ok(list)
}
