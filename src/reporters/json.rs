//! JSON reporter
//!
//! Outputs the full Summary as pretty-printed JSON.
//! Useful for feeding a chart front end or piping to jq.

use crate::summary::Summary;
use anyhow::Result;

/// Render summary as JSON
pub fn render(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
