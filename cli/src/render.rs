//! Terminal output for classification results.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use triage::Classification;

use crate::CliError;

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    data: &'a T,
}

/// Human-readable block with category, reason, and suggested reply.
pub fn classification_text(result: &Classification) -> String {
    let reply = if result.suggested_reply.trim().is_empty() {
        "(none)"
    } else {
        result.suggested_reply.as_str()
    };
    format!(
        "Category: {}\nReason: {}\n\nSuggested reply:\n{}",
        result.category, result.explanation, reply
    )
}

pub fn json_text<T: Serialize>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

pub fn print_json<T: Serialize>(data: &T) -> Result<(), CliError> {
    let rendered = json_text(data)?;
    println!("{rendered}");
    Ok(())
}
