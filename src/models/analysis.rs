use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Trend;

/// Structured view of one chart analysis returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trend: Trend,
    pub entry_points: Vec<f64>,
    pub exit_points: Vec<f64>,
    pub support_levels: Vec<f64>,
    pub resistance_levels: Vec<f64>,
    pub indicators: BTreeMap<String, String>,
    pub patterns: Vec<String>,
    pub recommendation: String,
    pub detailed_analysis: String,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Empty result captured at `timestamp`.
    pub fn empty_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            trend: Trend::default(),
            entry_points: Vec::new(),
            exit_points: Vec::new(),
            support_levels: Vec::new(),
            resistance_levels: Vec::new(),
            indicators: BTreeMap::new(),
            patterns: Vec::new(),
            recommendation: String::new(),
            detailed_analysis: String::new(),
            confidence: 0.0,
            timestamp,
        }
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::empty_at(Utc::now())
    }
}
