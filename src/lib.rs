//! aicommit - A CLI tool that generates commit messages from git diffs using Gemini.
//!
//! # Overview
//!
//! aicommit collects the pending diff from the working tree (staged changes
//! preferred, unstaged as fallback), asks the Gemini API for a Conventional
//! Commits message (and optionally a kebab-case branch name), then performs
//! the matching git operations: checkout, stage, commit.

pub mod error;
pub mod gemini;
pub mod git;
pub mod prompt;
pub mod response;
pub mod run;

// Re-export commonly used types
pub use error::{GeminiError, GitError, RunError};
pub use gemini::GeminiClient;
pub use git::{DiffSource, PendingDiff};
pub use prompt::{Language, OutputKind};
pub use run::{Generate, ReviewDecision, Reviewer, RunConfig};
