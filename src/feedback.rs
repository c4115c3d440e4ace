//! Feedback corpus loading and cleanup

use std::path::Path;

use crate::error::{Result, SynthError};

/// Trim surrounding whitespace from each item, keeping order and length
pub fn preprocess<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|f| f.as_ref().trim().to_string()).collect()
}

/// Built-in corpus used when no input file is given
pub fn sample_feedback() -> Vec<String> {
    [
        "I love the idea of an AI that writes emails...",
        "Privacy is my biggest concern...",
        "If this works with Gmail and Slack...",
        "Make sure it doesn't sound robotic.",
        "Would love integrations, but only if they're secure.",
        "The pricing seems a bit high for early-stage.",
        "I'm excited to see how this can save me time.",
        "Need better documentation.",
        "The UI is very intuitive.",
        "Integration with Google Calendar would be amazing.",
        "Not sure if I trust AI with sensitive information.",
        "The onboarding process was smooth.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Read a corpus file: a JSON array of strings for `.json`, else one item per line
pub fn load_feedback_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| SynthError::Io {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let items = if is_json {
        parse_json_corpus(&content)?
    } else {
        parse_line_corpus(&content)
    };
    tracing::debug!("Loaded {} feedback items from {}", items.len(), path.display());
    Ok(items)
}

fn parse_json_corpus(content: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(content).map_err(|e| SynthError::Validation {
        message: format!("feedback JSON must be an array of strings: {}", e),
    })
}

fn parse_line_corpus(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect()
}
