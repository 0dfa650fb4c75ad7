//! Test plan conversion commands
//!
//! - `encode`: plan JSON to editable text
//! - `decode`: editable text back to plan JSON

use std::path::Path;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::plan::{decode_plan, decode_plan_strict, encode_plan, plan_from_json, plan_to_json};
use crate::utils::read_input;

/// Print the text layout of a plan read as JSON
pub fn cmd_encode(input: Option<&Path>) -> Result<()> {
    let json = read_input(input)?;
    let plan = plan_from_json(&json)?;
    print!("{}", encode_plan(&plan));
    Ok(())
}

/// Print the JSON form of a plan read as text
///
/// `strict` (or `strict: true` in the config) fails when a section banner is
/// missing instead of leaving the section empty.
pub fn cmd_decode(input: Option<&Path>, strict: bool) -> Result<()> {
    let text = read_input(input)?;
    let strict = strict || Config::load()?.strict;

    let plan = if strict {
        decode_plan_strict(&text)?
    } else {
        decode_plan(&text)
    };

    if plan.is_blank() {
        tracing::warn!("decoded test plan is empty");
        eprintln!(
            "{}",
            "Warning: no test plan content was recognized in the input".yellow()
        );
    }

    println!("{}", plan_to_json(&plan)?);
    Ok(())
}
