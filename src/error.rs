//! Error types for aicommit modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("No changes to commit (nothing staged or unstaged)")]
    NoChanges,

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Failed to stage changes: {0}")]
    StagingFailed(#[source] git2::Error),

    #[error("Failed to create branch '{name}': {source}")]
    BranchFailed {
        name: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to checkout branch '{name}': {source}")]
    CheckoutFailed {
        name: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Errors from the Gemini API client.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error(
        "GEMINI_API_KEY not found. Set it in the environment or in a .env file in the repository"
    )]
    MissingApiKey,

    #[error("Gemini API rejected the API key (HTTP {status}). Check GEMINI_API_KEY")]
    AuthRejected { status: u16 },

    #[error("Gemini API request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Gemini returned a response that could not be parsed: {0}")]
    MalformedResponse(String),

    #[error("Gemini returned an empty response")]
    EmptyResponse,
}

/// Errors from the generate-and-commit pipeline.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Gemini(#[from] GeminiError),

    #[error("Interactive prompt failed: {0}")]
    Prompt(#[source] dialoguer::Error),

    #[error("Aborted by user")]
    Aborted,
}
