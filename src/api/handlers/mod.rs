pub mod analysis;
pub mod config;
pub mod health;
pub mod metrics;
pub mod risk;

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Language;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// Resolve an optional language code from a request body.
pub(crate) fn resolve_language(code: Option<&str>, fallback: Language) -> Result<Language, AppError> {
    match code {
        None => Ok(fallback),
        Some(code) => Language::from_code(code)
            .ok_or_else(|| AppError::BadRequest(format!("unsupported language '{code}'"))),
    }
}
