//! Git mutations: staging, branch checkout, and commit creation.

use git2::{build::CheckoutBuilder, IndexAddOption, Oid, Repository};
use tracing::info;

use crate::error::GitError;

/// Stage all changes, like `git add .`.
pub fn stage_all(repo: &Repository) -> Result<(), GitError> {
    let mut index = repo.index().map_err(GitError::StagingFailed)?;
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .map_err(GitError::StagingFailed)?;
    index.write().map_err(GitError::StagingFailed)?;
    info!("staged all changes");
    Ok(())
}

/// Create a branch at HEAD and switch to it, like `git checkout -b <name>`.
///
/// Fails if the branch already exists or the repository has no commits yet.
pub fn checkout_new_branch(repo: &Repository, name: &str) -> Result<(), GitError> {
    let head_commit = repo
        .head()
        .and_then(|h| h.peel_to_commit())
        .map_err(|e| GitError::BranchFailed {
            name: name.to_string(),
            source: e,
        })?;

    repo.branch(name, &head_commit, false)
        .map_err(|e| GitError::BranchFailed {
            name: name.to_string(),
            source: e,
        })?;

    repo.set_head(&format!("refs/heads/{name}"))
        .map_err(|e| GitError::CheckoutFailed {
            name: name.to_string(),
            source: e,
        })?;
    repo.checkout_head(Some(CheckoutBuilder::default().safe()))
        .map_err(|e| GitError::CheckoutFailed {
            name: name.to_string(),
            source: e,
        })?;

    info!(branch = name, "checked out new branch");
    Ok(())
}

/// Create a commit on HEAD from the current index with the given message.
///
/// The first commit on an unborn HEAD has no parents.
pub fn commit(repo: &Repository, message: &str) -> Result<Oid, GitError> {
    let mut index = repo.index().map_err(GitError::CommitFailed)?;
    let tree_id = index.write_tree().map_err(GitError::CommitFailed)?;
    let tree = repo.find_tree(tree_id).map_err(GitError::CommitFailed)?;

    // Signature comes from git config
    let sig = repo.signature().map_err(GitError::ConfigError)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit().map_err(GitError::CommitFailed)?),
        Err(e)
            if e.code() == git2::ErrorCode::UnbornBranch
                || e.code() == git2::ErrorCode::NotFound =>
        {
            None
        }
        Err(e) => return Err(GitError::CommitFailed(e)),
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(GitError::CommitFailed)?;

    info!(oid = %oid, "created commit");
    Ok(oid)
}
