//! Pending-diff collection from the working tree using git2.

use git2::{Diff, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use tracing::{debug, warn};

use crate::error::GitError;

/// Maximum characters for the unified diff text before truncation.
const MAX_DIFF_LENGTH: usize = 30_000;

/// Where the pending diff came from.
///
/// Staged changes take precedence: when something is already in the index
/// the commit uses it as-is, and `git add` is never run. Only when the index
/// is clean do we fall back to the unstaged working tree changes (which are
/// staged wholesale before committing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSource {
    Staged,
    Unstaged,
}

/// The diff text that will be sent to the model, captured once per run.
#[derive(Debug, Clone)]
pub struct PendingDiff {
    pub text: String,
    pub source: DiffSource,
    pub truncated: bool,
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD, or `Err(GitError::DiffFailed)`
/// for real errors (corrupt HEAD, permission issues, missing objects).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e)
            if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound =>
        {
            return Ok(None);
        }
        Err(e) => return Err(GitError::DiffFailed(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::DiffFailed)?;
    Ok(Some(tree))
}

/// Collect the diff to describe: staged changes if any, otherwise unstaged.
///
/// Staged changes are `diff_tree_to_index` against HEAD (no tree for unborn
/// repos). Unstaged changes are `diff_index_to_workdir` including untracked
/// files, matching the `git add .` behavior applied later. Returns
/// `GitError::NoChanges` when both are empty.
pub fn collect_pending_diff(repo: &Repository) -> Result<PendingDiff, GitError> {
    let head_tree = resolve_head_tree(repo)?;

    let staged = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(GitError::DiffFailed)?;

    let (text, truncated) = render_diff_text(&staged)?;
    if !text.trim().is_empty() {
        debug!(chars = text.len(), truncated, "using staged diff");
        return Ok(PendingDiff {
            text,
            source: DiffSource::Staged,
            truncated,
        });
    }

    let mut opts = DiffOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .show_untracked_content(true);
    let unstaged = repo
        .diff_index_to_workdir(None, Some(&mut opts))
        .map_err(GitError::DiffFailed)?;

    let (text, truncated) = render_diff_text(&unstaged)?;
    if text.trim().is_empty() {
        return Err(GitError::NoChanges);
    }

    debug!(chars = text.len(), truncated, "using unstaged diff");
    Ok(PendingDiff {
        text,
        source: DiffSource::Unstaged,
        truncated,
    })
}

/// Render a diff in unified patch format, capped at [`MAX_DIFF_LENGTH`].
fn render_diff_text(diff: &Diff<'_>) -> Result<(String, bool), GitError> {
    let mut text = String::new();
    let mut truncated = false;

    if let Err(e) = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if truncated {
            return true;
        }

        let content = std::str::from_utf8(line.content()).unwrap_or("");

        if text.len() + content.len() + 2 > MAX_DIFF_LENGTH {
            truncated = true;
            let mut end = MAX_DIFF_LENGTH.min(text.len());
            while end > 0 && !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
            return true;
        }

        // Include the origin character for context
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(content);

        true
    }) {
        warn!("Failed to render diff text: {e}");
        return Err(GitError::DiffFailed(e));
    }

    Ok((text, truncated))
}
