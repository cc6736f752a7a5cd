//! Git operations using git2-rs.

pub mod actions;
pub mod diff;

pub use actions::{checkout_new_branch, commit, stage_all};
pub use diff::{collect_pending_diff, DiffSource, PendingDiff};
