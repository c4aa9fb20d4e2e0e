use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::models::Trend;

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    for trend in [Trend::Bullish, Trend::Bearish, Trend::Sideways] {
        counter!("analysis_responses_parsed_total", "trend" => trend.as_str()).absolute(0);
    }
    counter!("risk_calculations_total").absolute(0);
    counter!("prompts_built_total").absolute(0);

    histogram!("analysis_response_chars").record(0.0);

    Ok(handle)
}

pub fn record_parsed_response(trend: Trend, chars: usize) {
    counter!("analysis_responses_parsed_total", "trend" => trend.as_str()).increment(1);
    histogram!("analysis_response_chars").record(chars as f64);
}

pub fn record_risk_calculation() {
    counter!("risk_calculations_total").increment(1);
}

pub fn record_prompt_built() {
    counter!("prompts_built_total").increment(1);
}
