mod config;
mod plan;
mod report;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use plan::{cmd_decode, cmd_encode};
pub use report::cmd_report;

use serde_json::Value;

use crate::error::Result;

/// Output of a command in both machine and human form.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when `json` is set, otherwise as text.
    ///
    /// Falls back to JSON when no text form was provided.
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
