use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{resolve_language, ApiResponse};
use crate::analysis::{build_prompt, parse_analysis_response};
use crate::errors::AppError;
use crate::models::{AnalysisLevel, AnalysisResult, Language};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
    pub language: Option<String>,
}

/// POST /api/analysis/parse: Structure a raw model response.
pub async fn parse(
    State(state): State<AppState>,
    Json(body): Json<ParseRequest>,
) -> Result<Json<ApiResponse<AnalysisResult>>, AppError> {
    let language = resolve_language(body.language.as_deref(), state.config.default_language)?;

    let result = parse_analysis_response(&body.text, language);
    crate::metrics::record_parsed_response(result.trend, body.text.chars().count());

    tracing::debug!(
        %language,
        trend = %result.trend,
        has_recommendation = !result.recommendation.is_empty(),
        "Analysis response parsed"
    );

    Ok(ApiResponse::ok(result))
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub level: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub level: AnalysisLevel,
    pub language: Language,
    pub prompt: String,
}

/// POST /api/analysis/prompt: Instruction text to send with a chart image.
pub async fn prompt(
    State(state): State<AppState>,
    Json(body): Json<PromptRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    let level = AnalysisLevel::from_str(&body.level)
        .ok_or_else(|| AppError::BadRequest(format!("unknown analysis level '{}'", body.level)))?;
    let language = resolve_language(body.language.as_deref(), state.config.default_language)?;

    let prompt = build_prompt(level, language);
    crate::metrics::record_prompt_built();

    Ok(ApiResponse::ok(PromptResponse {
        level,
        language,
        prompt,
    }))
}
