//! Cleanup of raw model output before it is used as a commit message or
//! branch name.

use regex_lite::Regex;

use crate::error::GeminiError;

/// Maximum length for a generated branch name.
const MAX_BRANCH_NAME_LENGTH: usize = 60;

/// Strip markdown fences, stray backticks, and surrounding quotes.
fn clean_generated_text(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // Fenced blocks: drop pure fence lines (```, ```text), keep the content
    if text.contains("```") {
        let fence = Regex::new(r"^```[a-z]*$").unwrap();
        text = text
            .lines()
            .filter(|line| !fence.is_match(line.trim()))
            .collect::<Vec<_>>()
            .join("\n");
    }
    text = text.replace('`', "");

    let text = text.trim();
    let text = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    let text = text
        .strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(text);

    text.trim().to_string()
}

/// Turn a raw model response into a commit message.
pub fn commit_message_from_response(raw: &str) -> Result<String, GeminiError> {
    let message = clean_generated_text(raw);
    if message.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }
    Ok(message)
}

/// Turn a raw model response into a valid kebab-case branch name.
///
/// Takes the first non-empty line, lowercases it, collapses anything outside
/// `[a-z0-9/_-]` into hyphens, and caps the length.
pub fn branch_name_from_response(raw: &str) -> Result<String, GeminiError> {
    let cleaned = clean_generated_text(raw);
    let first_line = cleaned
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    let lowered = first_line.to_lowercase();
    let invalid = Regex::new(r"[^a-z0-9/_-]+").unwrap();
    let name = invalid.replace_all(&lowered, "-");
    let dashes = Regex::new(r"-{2,}").unwrap();
    let name = dashes.replace_all(&name, "-");
    let name = name.trim_matches(|c| c == '-' || c == '/').to_string();

    if name.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }

    let mut name = name;
    if name.len() > MAX_BRANCH_NAME_LENGTH {
        name.truncate(MAX_BRANCH_NAME_LENGTH);
        let name = name.trim_matches(|c| c == '-' || c == '/').to_string();
        return Ok(name);
    }

    Ok(name)
}
