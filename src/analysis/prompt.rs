use crate::models::{AnalysisLevel, Language};

const CHART_PROMPT_HEADER: &str = "Analyze this trading chart image and provide: \n\
1. The market trend (bullish, bearish, or sideways)\n\
2. Key support and resistance levels\n\
3. Important technical patterns visible\n\
4. Trading recommendation\n";

/// Full instruction text sent alongside a chart image.
///
/// The numbered header is always English so the response keeps the
/// `Trading recommendation:` heading the parser looks for; the depth
/// instruction follows in the requested language.
pub fn build_prompt(level: AnalysisLevel, language: Language) -> String {
    format!("{CHART_PROMPT_HEADER}{}", level_instruction(level, language))
}

pub fn level_instruction(level: AnalysisLevel, language: Language) -> &'static str {
    match (language, level) {
        (Language::English, AnalysisLevel::Basic) => {
            "Provide a basic analysis focusing just on the overall trend and a simple recommendation."
        }
        (Language::English, AnalysisLevel::Intermediate) => {
            "Provide an intermediate analysis including support/resistance levels, entry/exit points, and basic technical indicators."
        }
        (Language::English, AnalysisLevel::Advanced) => {
            "Provide an advanced analysis including pattern recognition, multiple timeframe analysis, detailed support/resistance levels, and comprehensive trading strategy."
        }
        (Language::Arabic, AnalysisLevel::Basic) => {
            "قم بتوفير تحليل أساسي يركز فقط على الاتجاه العام وتوصية بسيطة."
        }
        (Language::Arabic, AnalysisLevel::Intermediate) => {
            "قم بتوفير تحليل متوسط المستوى يشمل مستويات الدعم/المقاومة، نقاط الدخول/الخروج، والمؤشرات الفنية الأساسية."
        }
        (Language::Arabic, AnalysisLevel::Advanced) => {
            "قم بتوفير تحليل متقدم يشمل التعرف على الأنماط، تحليل الإطارات الزمنية المتعددة، مستويات الدعم/المقاومة التفصيلية، واستراتيجية تداول شاملة."
        }
    }
}
