// src/presentation.rs
use std::fmt::Write;

use anyhow::Result;
use freeze_scope_domain::FieldError;
use freeze_scope_usecase::FieldSummary;
use serde::Serialize;

use crate::config::OutputFormat;

/// Serialize `value` for stdout, newline-terminated.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

pub fn print_data<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    print!("{}", render(value, format)?);
    Ok(())
}

/// One `path: message` line per error.
#[must_use]
pub fn render_errors(errors: &[FieldError]) -> String {
    errors.iter().fold(String::new(), |mut out, error| {
        let _ = writeln!(out, "{error}");
        out
    })
}

/// Row names followed by their indented field summaries.
#[must_use]
pub fn render_summaries(rows: &[(String, Vec<FieldSummary>)]) -> String {
    let mut out = String::new();
    for (index, (name, summaries)) in rows.iter().enumerate() {
        let _ = writeln!(out, "[{index}] {name}");
        for summary in summaries {
            let _ = writeln!(out, "    {summary}");
        }
    }
    out
}
