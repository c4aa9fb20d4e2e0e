pub mod parser;
pub mod prompt;

pub use parser::{parse_analysis_response, parse_analysis_response_at, DEFAULT_CONFIDENCE};
pub use prompt::build_prompt;
