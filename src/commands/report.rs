//! Execution report rendering command

use std::path::Path;

use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::display::{RenderOptions, format_summary, render_report};
use crate::error::Result;
use crate::report::{ReportSummary, parse_report};
use crate::utils::read_input;

/// Parse an execution report and print it rendered, or as JSON blocks
pub fn cmd_report(input: Option<&Path>, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let blocks = parse_report(&text);
    let summary = ReportSummary::from_blocks(&blocks);

    let json_output = json!({
        "blocks": blocks,
        "summary": summary,
    });

    if json {
        return CommandOutput::new(json_output).print(true);
    }

    let options = RenderOptions::from_config(&Config::load()?);
    let mut text_output = render_report(&blocks, &options);
    if !text_output.is_empty() {
        text_output.push_str("\n\n");
    }
    text_output.push_str(&format_summary(&summary, options.color));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(false)
}
