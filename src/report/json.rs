use serde::Serialize;

use crate::model::EstimationResult;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    result: &'a EstimationResult,
}

/// Full-precision summary; no display rounding is applied.
pub fn render_summary_json(result: &EstimationResult) -> Result<String, serde_json::Error> {
    let summary = Summary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        result,
    };
    let mut json = serde_json::to_string_pretty(&summary)?;
    json.push('\n');
    Ok(json)
}
