// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::commit::CommitIntent;
use crate::error::GitError;

/// Fixed placeholder author for every migration commit. Migration commits
/// deliberately never carry the operator's identity so they are easy to
/// tell apart from human-authored ones.
pub const MIGRATION_AUTHOR: &str = "Loom Migration <migration@ghuntley.com>";

const MIGRATION_AUTHOR_NAME: &str = "Loom Migration";
const MIGRATION_AUTHOR_EMAIL: &str = "migration@ghuntley.com";

/// A handle to the target git repository.
pub struct GitRepo {
	path: PathBuf,
}

impl GitRepo {
	/// Initializes a new repository at `path` (which must already exist)
	/// and configures the migration identity as the repo-local committer,
	/// so commits succeed on hosts without a global git config.
	pub async fn init(path: &Path) -> Result<Self, GitError> {
		let repo = Self {
			path: path.to_path_buf(),
		};

		repo.run(&["init"]).await?;
		repo
			.run(&["config", "user.name", MIGRATION_AUTHOR_NAME])
			.await?;
		repo
			.run(&["config", "user.email", MIGRATION_AUTHOR_EMAIL])
			.await?;

		debug!(path = %path.display(), "initialized migration repository");
		Ok(repo)
	}

	/// Opens an existing repository at `path`.
	pub fn open(path: &Path) -> Self {
		Self {
			path: path.to_path_buf(),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Stages every change in the working tree, including untracked files.
	pub async fn stage_all(&self) -> Result<(), GitError> {
		self.run(&["add", "-A"]).await?;
		debug!(path = %self.path.display(), "staged all changes");
		Ok(())
	}

	/// Creates a commit for `intent` and returns the new commit's SHA.
	/// Applies the intent's tag, if any, to that commit.
	///
	/// Snapshots of identical streams are legal, so empty commits are
	/// allowed.
	pub async fn commit(&self, intent: &CommitIntent) -> Result<String, GitError> {
		let message = intent.message();
		let author = format!("--author={MIGRATION_AUTHOR}");

		self
			.run(&["commit", "--allow-empty", "-m", &message, &author])
			.await?;

		let sha = self.run(&["rev-parse", "HEAD"]).await?;

		if let Some(tag) = intent.tag() {
			self.run(&["tag", tag]).await?;
			debug!(path = %self.path.display(), sha = %sha, tag = %tag, "created tagged commit");
		} else {
			debug!(path = %self.path.display(), sha = %sha, "created commit");
		}

		Ok(sha)
	}

	/// Returns the currently checked-out branch name.
	pub async fn current_branch(&self) -> Result<String, GitError> {
		self.run(&["rev-parse", "--abbrev-ref", "HEAD"]).await
	}

	/// Creates `branch` and checks it out. A name collision is a hard
	/// failure; the orchestrator does not rename around it.
	pub async fn create_branch(&self, branch: &str) -> Result<(), GitError> {
		self.run(&["checkout", "-b", branch]).await?;
		debug!(path = %self.path.display(), branch = %branch, "created and checked out branch");
		Ok(())
	}

	/// Checks out an existing branch.
	pub async fn checkout(&self, branch: &str) -> Result<(), GitError> {
		self.run(&["checkout", branch]).await?;
		debug!(path = %self.path.display(), branch = %branch, "checked out branch");
		Ok(())
	}

	/// Replays a rename: creates the destination's parent directories and
	/// runs `git mv`.
	pub async fn move_path(&self, source: &str, target: &str) -> Result<(), GitError> {
		if let Some(parent) = Path::new(target).parent() {
			if !parent.as_os_str().is_empty() {
				std::fs::create_dir_all(self.path.join(parent))?;
			}
		}

		self.run(&["mv", "-v", source, target]).await?;
		debug!(path = %self.path.display(), source = %source, target = %target, "moved path");
		Ok(())
	}

	/// Removes every top-level entry except the `.git` metadata, leaving
	/// the repository history intact for the next snapshot to commit onto.
	///
	/// Refuses to touch a directory with no `.git` entry, so a mistyped
	/// target path is never wiped.
	pub fn clear_worktree(&self) -> Result<(), GitError> {
		if !self.path.join(".git").exists() {
			return Err(GitError::NotARepository {
				path: self.path.clone(),
			});
		}

		for entry in std::fs::read_dir(&self.path)? {
			let entry = entry?;
			if entry.file_name() == ".git" {
				continue;
			}
			let entry_path = entry.path();
			if entry.file_type()?.is_dir() {
				std::fs::remove_dir_all(&entry_path)?;
			} else {
				std::fs::remove_file(&entry_path)?;
			}
		}

		debug!(path = %self.path.display(), "cleared working tree");
		Ok(())
	}

	/// Runs a git command against this repository and returns the trimmed
	/// stdout on success.
	async fn run(&self, args: &[&str]) -> Result<String, GitError> {
		let mut cmd = Command::new("git");
		cmd.arg("-C").arg(&self.path).args(args);

		trace!(
				cmd = %format!("git -C {} {}", self.path.display(), args.join(" ")),
				"running git command"
		);

		let output = cmd.output().await.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				warn!("git not found in PATH");
				GitError::GitNotInstalled
			} else {
				GitError::Io(e)
			}
		})?;

		if output.status.success() {
			Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
		} else {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
			Err(GitError::CommandFailed {
				args: args.iter().map(|s| s.to_string()).collect(),
				stderr,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::process::Command as StdCommand;
	use tempfile::TempDir;

	fn git_stdout(dir: &Path, args: &[&str]) -> String {
		let output = StdCommand::new("git")
			.arg("-C")
			.arg(dir)
			.args(args)
			.output()
			.expect("git failed");
		String::from_utf8_lossy(&output.stdout).trim().to_string()
	}

	async fn init_repo(dir: &Path) -> GitRepo {
		GitRepo::init(dir).await.expect("init failed")
	}

	/// Test: init produces a repository whose commits use the migration
	/// identity.
	///
	/// Why this test is important: all migration commits must carry the
	/// fixed placeholder author, never the operator's identity; the
	/// repo-local config is what guarantees this on any host.
	#[tokio::test]
	async fn test_init_sets_migration_identity() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		fs::write(temp.path().join("a.txt"), "a").unwrap();
		repo.stage_all().await.unwrap();
		repo
			.commit(&CommitIntent::Annotated {
				message: "first".to_string(),
			})
			.await
			.unwrap();

		let author = git_stdout(temp.path(), &["log", "-1", "--format=%an <%ae>"]);
		assert_eq!(author, MIGRATION_AUTHOR);
	}

	/// Test: a maintenance commit has the fixed message and no tag.
	#[tokio::test]
	async fn test_maintenance_commit() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		repo.commit(&CommitIntent::Maintenance).await.unwrap();

		assert_eq!(
			git_stdout(temp.path(), &["log", "-1", "--format=%s"]),
			"Added Maint"
		);
		assert_eq!(git_stdout(temp.path(), &["tag"]), "");
	}

	/// Test: an annotated commit uses the caller's message and no tag.
	#[tokio::test]
	async fn test_annotated_commit() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		repo
			.commit(&CommitIntent::Annotated {
				message: "Moving files".to_string(),
			})
			.await
			.unwrap();

		assert_eq!(
			git_stdout(temp.path(), &["log", "-1", "--format=%s"]),
			"Moving files"
		);
		assert_eq!(git_stdout(temp.path(), &["tag"]), "");
	}

	/// Test: a tagged release commit gets message `Added <tag>` and a tag
	/// object on the new commit.
	#[tokio::test]
	async fn test_tagged_release_commit() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		let sha = repo
			.commit(&CommitIntent::TaggedRelease {
				tag: "v1.0".to_string(),
			})
			.await
			.unwrap();

		assert_eq!(
			git_stdout(temp.path(), &["log", "-1", "--format=%s"]),
			"Added v1.0"
		);
		assert_eq!(git_stdout(temp.path(), &["tag"]), "v1.0");
		assert_eq!(git_stdout(temp.path(), &["rev-parse", "v1.0^{commit}"]), sha);
	}

	/// Test: commit returns a full 40-character SHA.
	#[tokio::test]
	async fn test_commit_returns_sha() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		let sha = repo.commit(&CommitIntent::Maintenance).await.unwrap();
		assert_eq!(sha.len(), 40);
		assert!(sha.chars().all(|c| c.is_ascii_hexdigit()));
	}

	/// Test: branch create + checkout round-trip.
	///
	/// Why this test is important: the orchestrator pivots between the
	/// main branch and per-release maintenance branches; both directions
	/// must work against a real git.
	#[tokio::test]
	async fn test_branch_create_and_checkout() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;
		repo.commit(&CommitIntent::Maintenance).await.unwrap();

		let main = repo.current_branch().await.unwrap();

		repo.create_branch("1.0_Maint").await.unwrap();
		assert_eq!(repo.current_branch().await.unwrap(), "1.0_Maint");

		repo.checkout(&main).await.unwrap();
		assert_eq!(repo.current_branch().await.unwrap(), main);
	}

	/// Test: creating a branch that already exists fails.
	///
	/// Why this test is important: a maintenance-branch name collision is
	/// fatal; the orchestrator relies on this surfacing as an error rather
	/// than silently reusing the branch.
	#[tokio::test]
	async fn test_branch_collision_is_error() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;
		repo.commit(&CommitIntent::Maintenance).await.unwrap();

		repo.create_branch("1.0_Maint").await.unwrap();
		let result = repo.create_branch("1.0_Maint").await;
		assert!(result.is_err());
	}

	/// Test: move_path creates missing destination directories and
	/// replays the rename through git.
	#[tokio::test]
	async fn test_move_path_creates_parent_dirs() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		fs::create_dir(temp.path().join("src")).unwrap();
		fs::write(temp.path().join("src/a.txt"), "a").unwrap();
		repo.stage_all().await.unwrap();
		repo
			.commit(&CommitIntent::Annotated {
				message: "seed".to_string(),
			})
			.await
			.unwrap();

		repo.move_path("src/a.txt", "src/b/a.txt").await.unwrap();

		assert!(temp.path().join("src/b/a.txt").exists());
		assert!(!temp.path().join("src/a.txt").exists());
	}

	/// Test: clear_worktree removes everything except .git.
	#[tokio::test]
	async fn test_clear_worktree_keeps_git_dir() {
		let temp = TempDir::new().unwrap();
		let repo = init_repo(temp.path()).await;

		fs::write(temp.path().join("a.txt"), "a").unwrap();
		fs::create_dir(temp.path().join("nested")).unwrap();
		fs::write(temp.path().join("nested/b.txt"), "b").unwrap();

		repo.clear_worktree().unwrap();

		assert!(temp.path().join(".git").exists());
		assert!(!temp.path().join("a.txt").exists());
		assert!(!temp.path().join("nested").exists());
	}

	/// Test: clearing a directory that is not a repository is refused and
	/// leaves its contents intact.
	///
	/// Why this test is important: the pipeline clears the target before
	/// every snapshot; without this guard a plan pointing at the wrong
	/// pre-existing directory would silently delete everything in it.
	#[test]
	fn test_clear_worktree_refuses_non_repo() {
		let temp = TempDir::new().unwrap();
		fs::write(temp.path().join("precious.txt"), "data").unwrap();

		let repo = GitRepo::open(temp.path());
		let result = repo.clear_worktree();

		assert!(matches!(result, Err(GitError::NotARepository { .. })));
		assert!(temp.path().join("precious.txt").exists());
	}
}
