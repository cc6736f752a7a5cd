//! Prompt construction for AI-generated commit messages and branch names.
//!
//! Pure functions: the same diff, language, and output kind always produce
//! the same instruction string.

use std::fmt;

use clap::ValueEnum;

use crate::git::PendingDiff;

/// Output language for the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English
    En,
    /// Portuguese (Brazil)
    Pt,
}

impl Language {
    /// Human-readable name used in the prompt instruction.
    pub fn as_instruction(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Portuguese (Brazilian)",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Pt => f.write_str("pt"),
        }
    }
}

/// What the model is being asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    CommitMessage,
    BranchName,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::CommitMessage => f.write_str("commit message"),
            OutputKind::BranchName => f.write_str("branch name"),
        }
    }
}

/// Build the model prompt for the given diff, language, and output kind.
pub fn build_prompt(diff: &PendingDiff, language: Language, kind: OutputKind) -> String {
    match kind {
        OutputKind::CommitMessage => build_commit_message_prompt(diff, language),
        OutputKind::BranchName => build_branch_name_prompt(diff, language),
    }
}

fn truncation_note(diff: &PendingDiff) -> &'static str {
    if diff.truncated {
        "\n\nNote: The diff was truncated due to size. Focus on the visible changes."
    } else {
        ""
    }
}

fn build_commit_message_prompt(diff: &PendingDiff, language: Language) -> String {
    format!(
        r#"Generate a concise, meaningful git commit message in {language}, following the Conventional Commits format (e.g. 'feat: add new feature X', 'fix: correct bug Y', 'docs: update documentation Z', 'style: format code', 'refactor: restructure component A', 'test: add tests for B', 'chore: update dependencies').

Rules:
- First line (subject) at most 72 characters
- Imperative mood, no trailing period
- Describe the changes in the following git diff

## Diff
```
{diff_text}
```{truncation_note}

Respond with ONLY the commit message, no markdown fences, no explanation."#,
        language = language.as_instruction(),
        diff_text = diff.text,
        truncation_note = truncation_note(diff),
    )
}

fn build_branch_name_prompt(diff: &PendingDiff, language: Language) -> String {
    format!(
        r#"Generate a short git branch name in {language} for the changes in the following git diff.

Rules:
- kebab-case: lowercase words separated by hyphens
- 2 to 5 words, no spaces, no special characters
- Optionally prefixed with a Conventional Commits type and a slash (e.g. 'feat/add-login-form', 'fix/null-pointer-on-save')

## Diff
```
{diff_text}
```{truncation_note}

Respond with ONLY the branch name, nothing else."#,
        language = language.as_instruction(),
        diff_text = diff.text,
        truncation_note = truncation_note(diff),
    )
}
