use std::env;

use crate::calculator::format::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS};
use crate::models::Language;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Bearer token for /api routes; None disables the guard
    pub api_token: Option<String>,

    // Used when a request does not name a response language
    pub default_language: Language,

    // Display formatting
    pub currency_symbol: String,
    pub currency_decimals: usize,
    pub percentage_decimals: usize,

    // Used when a risk request omits risk_percentage
    pub default_risk_percentage: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            api_token: None,
            default_language: Language::English,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
            currency_decimals: DEFAULT_DECIMALS,
            percentage_decimals: DEFAULT_DECIMALS,
            default_risk_percentage: 1.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let language_code = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".into());
        let default_language = Language::from_code(&language_code)
            .ok_or_else(|| anyhow::anyhow!("DEFAULT_LANGUAGE '{language_code}' is not supported"))?;

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            api_token: non_empty(env::var("API_TOKEN").ok()),

            default_language,

            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            currency_decimals: env::var("CURRENCY_DECIMALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.currency_decimals),
            percentage_decimals: env::var("PERCENTAGE_DECIMALS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.percentage_decimals),
            default_risk_percentage: env::var("DEFAULT_RISK_PERCENTAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_risk_percentage),
        })
    }

    /// Returns true if the /api routes require a bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.api_token.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
