//! The generate-and-commit pipeline.
//!
//! A strictly sequential flow: collect the pending diff, generate text with
//! the model (branch name first when requested), then perform the git
//! mutations. The model call and the interactive review sit behind traits so
//! the pipeline can be exercised without a network or a terminal.

use async_trait::async_trait;
use dialoguer::Select;
use git2::Repository;
use tracing::info;

use crate::error::{GeminiError, RunError};
use crate::gemini::GeminiClient;
use crate::git::{self, DiffSource};
use crate::prompt::{build_prompt, Language, OutputKind};
use crate::response::{branch_name_from_response, commit_message_from_response};

/// Options fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub language: Language,
    pub new_branch: bool,
    pub interactive: bool,
}

/// Text generation seam, implemented by [`GeminiClient`] in production.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

#[async_trait]
impl Generate for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        GeminiClient::generate(self, prompt).await
    }
}

/// Outcome of reviewing a generated text in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Regenerate,
    Abort,
}

/// Interactive review seam. The terminal implementation shows an
/// accept/regenerate/abort selector.
pub trait Reviewer {
    fn review(&mut self, kind: OutputKind, text: &str) -> Result<ReviewDecision, RunError>;
}

/// Dialoguer-backed reviewer for the terminal.
pub struct TerminalReviewer;

impl Reviewer for TerminalReviewer {
    fn review(&mut self, kind: OutputKind, text: &str) -> Result<ReviewDecision, RunError> {
        println!("\nGenerated {kind}:\n  {text}\n");
        let choice = Select::new()
            .with_prompt(format!("Use this {kind}?"))
            .items(&["Accept", "Regenerate", "Abort"])
            .default(0)
            .interact()
            .map_err(RunError::Prompt)?;

        Ok(match choice {
            0 => ReviewDecision::Accept,
            1 => ReviewDecision::Regenerate,
            _ => ReviewDecision::Abort,
        })
    }
}

/// Generate one piece of text, looping on "regenerate" in interactive mode.
///
/// Each rejection re-sends the full prompt (diff included): re-prompting is
/// the only user-triggered re-attempt path, and it never retries a failed
/// network call.
async fn generate_reviewed(
    generator: &dyn Generate,
    reviewer: &mut dyn Reviewer,
    prompt: &str,
    kind: OutputKind,
    interactive: bool,
) -> Result<String, RunError> {
    loop {
        let raw = generator.generate(prompt).await?;
        let text = match kind {
            OutputKind::CommitMessage => commit_message_from_response(&raw)?,
            OutputKind::BranchName => branch_name_from_response(&raw)?,
        };

        if !interactive {
            return Ok(text);
        }

        match reviewer.review(kind, &text)? {
            ReviewDecision::Accept => return Ok(text),
            ReviewDecision::Regenerate => continue,
            ReviewDecision::Abort => return Err(RunError::Aborted),
        }
    }
}

/// Run the full pipeline against an open repository.
///
/// Returns the OID of the created commit and the accepted message.
pub async fn run(
    repo: &Repository,
    generator: &dyn Generate,
    reviewer: &mut dyn Reviewer,
    config: &RunConfig,
) -> Result<(git2::Oid, String), RunError> {
    info!("collecting pending diff");
    let diff = git::collect_pending_diff(repo)?;
    info!(
        source = ?diff.source,
        chars = diff.text.len(),
        "found pending changes"
    );

    let branch_name = if config.new_branch {
        info!("generating branch name");
        let prompt = build_prompt(&diff, config.language, OutputKind::BranchName);
        let name =
            generate_reviewed(generator, reviewer, &prompt, OutputKind::BranchName, config.interactive)
                .await?;
        info!(branch = %name, "branch name accepted");
        Some(name)
    } else {
        None
    };

    info!("generating commit message");
    let prompt = build_prompt(&diff, config.language, OutputKind::CommitMessage);
    let message = generate_reviewed(
        generator,
        reviewer,
        &prompt,
        OutputKind::CommitMessage,
        config.interactive,
    )
    .await?;
    info!("commit message accepted");

    if let Some(ref name) = branch_name {
        git::checkout_new_branch(repo, name)?;
    }

    if diff.source == DiffSource::Unstaged {
        git::stage_all(repo)?;
    }

    let oid = git::commit(repo, &message)?;
    Ok((oid, message))
}
