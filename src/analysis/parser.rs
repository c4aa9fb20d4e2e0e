use chrono::{DateTime, Utc};

use crate::models::{AnalysisResult, Language, Trend};

/// Confidence attached to every parsed response. The model does not report
/// one, so this is a fixed value rather than something read from the text.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

const ENGLISH_TREND_KEYWORDS: [(&str, Trend); 3] = [
    ("bullish", Trend::Bullish),
    ("bearish", Trend::Bearish),
    ("sideways", Trend::Sideways),
];

const ARABIC_TREND_KEYWORDS: [(&str, Trend); 3] = [
    ("صاعد", Trend::Bullish),
    ("هابط", Trend::Bearish),
    ("جانبي", Trend::Sideways),
];

const ENGLISH_RECOMMENDATION_MARKER: &str = "Trading recommendation:";
const ARABIC_RECOMMENDATION_MARKER: &str = "التوصية:";

/// Turn a free-text model response into an [`AnalysisResult`] stamped now.
pub fn parse_analysis_response(text: &str, language: Language) -> AnalysisResult {
    parse_analysis_response_at(text, language, Utc::now())
}

/// Same as [`parse_analysis_response`] with an explicit capture time.
///
/// Only the trend and the recommendation line are extracted. Price levels,
/// indicators and patterns are left empty. Never fails: anything that is not
/// recognised falls back to the defaults.
pub fn parse_analysis_response_at(
    text: &str,
    language: Language,
    captured_at: DateTime<Utc>,
) -> AnalysisResult {
    let mut result = AnalysisResult::empty_at(captured_at);
    result.trend = detect_trend(text, language).unwrap_or_default();
    result.recommendation = extract_recommendation(text).unwrap_or_default();
    result.detailed_analysis = text.to_string();
    result.confidence = DEFAULT_CONFIDENCE;
    result
}

/// First trend keyword present in `text`, checked bullish, bearish, sideways.
/// Arabic responses fall back to the English keywords.
pub fn detect_trend(text: &str, language: Language) -> Option<Trend> {
    let localized = match language {
        Language::Arabic => first_keyword(text, &ARABIC_TREND_KEYWORDS),
        Language::English => None,
    };
    localized.or_else(|| first_keyword(text, &ENGLISH_TREND_KEYWORDS))
}

fn first_keyword(text: &str, keywords: &[(&str, Trend)]) -> Option<Trend> {
    keywords
        .iter()
        .find(|(keyword, _)| find_ignore_case(text, keyword).is_some())
        .map(|(_, trend)| *trend)
}

/// Text following the recommendation header, up to the end of its line.
pub fn extract_recommendation(text: &str) -> Option<String> {
    let start = find_ignore_case(text, ENGLISH_RECOMMENDATION_MARKER)
        .or_else(|| find_ignore_case(text, ARABIC_RECOMMENDATION_MARKER))?;

    let rest = &text[start..];
    let line = match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(line.trim().to_string())
}

/// Byte offset just past the first occurrence of `needle` in `haystack`.
/// ASCII needles match case-insensitively; others match exactly.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if !needle.is_ascii() {
        return haystack.find(needle).map(|pos| pos + needle.len());
    }

    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.len() > hay.len() {
        return None;
    }
    // An ASCII match cannot start or end inside a multi-byte character.
    (0..=hay.len() - pat.len())
        .find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
        .map(|i| i + pat.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
