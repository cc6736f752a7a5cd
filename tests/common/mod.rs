//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with a test identity.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to get config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { dir, repo }
    }

    /// Create a repository that already has an initial commit.
    pub fn with_initial_commit() -> Self {
        let test_repo = Self::new();
        test_repo.write_file("README.md", "# test\n");
        test_repo.stage("README.md");
        test_repo.commit_index("init");
        test_repo
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repository root.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Stage a single file.
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is currently in the index.
    pub fn commit_index(&self, message: &str) -> Oid {
        let sig = self.signature();
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the commit HEAD points at.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .expect("No HEAD")
            .peel_to_commit()
            .expect("HEAD is not a commit")
            .message()
            .expect("Commit has no message")
            .to_string()
    }

    /// Number of commits reachable from HEAD (0 for unborn HEAD).
    pub fn commit_count(&self) -> usize {
        let Ok(head) = self.repo.head() else {
            return 0;
        };
        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        walk.push(head.target().expect("HEAD has no target")).unwrap();
        walk.count()
    }

    /// Whether the tree of the HEAD commit contains the given file.
    pub fn head_tree_contains(&self, name: &str) -> bool {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.tree().map(|t| t.get_name(name).is_some()).unwrap_or(false))
            .unwrap_or(false)
    }
}
