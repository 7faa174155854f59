// src/ports/json.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

/// Renders result documents as pretty-printed JSON (2-space indent).
///
/// Non-ASCII text is written as UTF-8, not escaped.
#[derive(Debug, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, document: &Value) -> Result<String> {
        serde_json::to_string_pretty(document).context("Failed to render JSON output")
    }

    /// Write the rendered document followed by a newline
    pub fn write_to<W: Write>(&self, document: &Value, out: &mut W) -> Result<()> {
        let rendered = self.render(document)?;
        writeln!(out, "{}", rendered).context("Failed to write output")?;
        Ok(())
    }
}
