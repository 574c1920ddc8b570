// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The migration pipeline and the release-plan orchestrator.
//!
//! One migration unit flows download → normalize → commit; the
//! orchestrator chains units across releases and their maintenance
//! streams, pivoting between the main branch and per-release
//! `<version>_Maint` branches.

use std::path::Path;

use tracing::{debug, info};

use loom_migrate_accurev::{AccurevClient, TransactionId};
use loom_migrate_config::MigrationPlan;
use loom_migrate_fs::{convert_junctions, delete_blacklisted, seed_empty_dirs};
use loom_migrate_git::{append_binary_ignore, CommitIntent, GitRepo};

use crate::error::CliError;

/// Commit message for the recurring `.gitignore` maintenance commits.
const IGNORE_BINARIES_MESSAGE: &str = "Ignore future binary files";

/// Per-snapshot settings shared by every migration unit in a plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotOptions<'a> {
	/// Relative paths deleted from the snapshot before committing.
	pub blacklist: &'a [String],
	/// Optional `.gitignore` template copied into the repository root.
	pub gitignore_template: Option<&'a Path>,
}

impl<'a> SnapshotOptions<'a> {
	pub fn from_plan(plan: &'a MigrationPlan) -> Self {
		Self {
			blacklist: &plan.blacklist,
			gitignore_template: plan.gitignore_template.as_deref(),
		}
	}
}

/// Opens the target repository, creating the directory and initializing
/// an empty repository when it does not exist yet.
///
/// Directory creation failure is distinct from every later download
/// failure; it maps to the filesystem exit code.
pub async fn ensure_repo(dir: &Path) -> Result<GitRepo, CliError> {
	if dir.join(".git").exists() {
		debug!(dir = %dir.display(), "target repository already exists");
		return Ok(GitRepo::open(dir));
	}

	if dir.exists() {
		// A pre-existing directory is only initialized when it is empty;
		// anything else is refused downstream before it can be cleared.
		let mut entries = std::fs::read_dir(dir)?;
		if entries.next().is_some() {
			return Ok(GitRepo::open(dir));
		}
	} else {
		std::fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
			path: dir.to_path_buf(),
			source,
		})?;
	}

	let repo = GitRepo::init(dir).await?;
	info!(dir = %dir.display(), "initialized migration repository");
	Ok(repo)
}

/// Materializes one stream snapshot into `dir` and normalizes it, but
/// does not commit; the caller decides the commit intent.
///
/// The transaction id is resolved once and drives the populate call; it
/// is immutable for the remainder of this migration unit.
pub async fn materialize_stream(
	accurev: &dyn AccurevClient,
	dir: &Path,
	stream: &str,
	options: &SnapshotOptions<'_>,
) -> Result<(GitRepo, TransactionId), CliError> {
	let repo = ensure_repo(dir).await?;
	repo.clear_worktree()?;

	let transaction = accurev.resolve_transaction(stream).await?;
	accurev.populate(stream, transaction, dir).await?;

	delete_blacklisted(dir, options.blacklist)?;

	if let Some(template) = options.gitignore_template {
		std::fs::copy(template, dir.join(".gitignore")).map_err(|source| {
			CliError::CopyTemplate {
				path: template.to_path_buf(),
				source,
			}
		})?;
	}

	let converted = convert_junctions(dir)?;
	let seeded = seed_empty_dirs(dir)?;

	info!(
			stream = %stream,
			transaction = %transaction,
			dir = %dir.display(),
			junctions_converted = converted.len(),
			dirs_seeded = seeded.created.len(),
			"materialized and normalized stream snapshot"
	);

	Ok((repo, transaction))
}

/// Stages the whole working tree and commits it for `intent`.
pub async fn commit_snapshot(repo: &GitRepo, intent: &CommitIntent) -> Result<String, CliError> {
	repo.stage_all().await?;
	let sha = repo.commit(intent).await?;
	Ok(sha)
}

/// Appends the binary-ignore block to `.gitignore` and commits it on the
/// current branch.
pub async fn commit_binary_ignore(repo: &GitRepo) -> Result<(), CliError> {
	append_binary_ignore(repo.path())?;
	repo.stage_all().await?;
	repo
		.commit(&CommitIntent::Annotated {
			message: IGNORE_BINARIES_MESSAGE.to_string(),
		})
		.await?;
	Ok(())
}

/// Runs the full release plan: for each release, migrate the primary
/// stream onto the main branch, collect the maintenance streams on a
/// `<version>_Maint` branch, block future binaries on that branch, and
/// return to the main branch. After all releases the binary-ignore block
/// lands once more on the main branch.
pub async fn run_plan(accurev: &dyn AccurevClient, plan: &MigrationPlan) -> Result<(), CliError> {
	let options = SnapshotOptions::from_plan(plan);

	for release in &plan.releases {
		info!(
				version = %release.version,
				stream = %release.stream_name,
				tag = %release.release_tag,
				"migrating release"
		);

		let (repo, _) =
			materialize_stream(accurev, &plan.git_repo, &release.stream_name, &options).await?;
		commit_snapshot(
			&repo,
			&CommitIntent::TaggedRelease {
				tag: release.release_tag.clone(),
			},
		)
		.await?;

		// Recorded so the pipeline works under either `master` or `main`
		// init defaults.
		let main_branch = repo.current_branch().await?;

		// A collision here is fatal; the plan is expected to be the only
		// author of this repository.
		repo.create_branch(&release.maintenance_branch()).await?;

		for maintenance in &release.maintenance {
			info!(
					version = %release.version,
					stream = %maintenance.name,
					tag = %maintenance.tag,
					"migrating maintenance stream"
			);

			let (repo, _) =
				materialize_stream(accurev, &plan.git_repo, &maintenance.name, &options).await?;

			let intent = if maintenance.tag.is_empty() {
				CommitIntent::Maintenance
			} else {
				CommitIntent::TaggedRelease {
					tag: maintenance.tag.clone(),
				}
			};
			commit_snapshot(&repo, &intent).await?;
		}

		let repo = GitRepo::open(&plan.git_repo);
		commit_binary_ignore(&repo).await?;
		repo.checkout(&main_branch).await?;
	}

	let repo = GitRepo::open(&plan.git_repo);
	commit_binary_ignore(&repo).await?;

	info!(releases = plan.releases.len(), "release plan complete");
	Ok(())
}

/// Migrates a single stream snapshot as one commit with a caller-supplied
/// message, suffixed with the transaction number that was migrated.
pub async fn run_snapshot(
	accurev: &dyn AccurevClient,
	plan: &MigrationPlan,
	stream: &str,
	message: &str,
) -> Result<(), CliError> {
	let options = SnapshotOptions::from_plan(plan);
	let (repo, transaction) = materialize_stream(accurev, &plan.git_repo, stream, &options).await?;

	let message = format!("{message}\n\nTransaction Number: {transaction}");
	commit_snapshot(&repo, &CommitIntent::Annotated { message }).await?;
	commit_binary_ignore(&repo).await?;

	Ok(())
}

/// Diffs two streams and replays the file-level moves into the target
/// repository as `git mv` operations followed by a single commit.
///
/// Returns false when the streams are identical and nothing was done.
pub async fn replay_moves(
	accurev: &dyn AccurevClient,
	repo_dir: &Path,
	base: &str,
	other: &str,
	message: &str,
) -> Result<bool, CliError> {
	let Some(records) = accurev.diff_moves(base, other).await? else {
		info!(base = %base, other = %other, "streams are identical, nothing to replay");
		return Ok(false);
	};

	let repo = GitRepo::open(repo_dir);

	for record in &records {
		// Directory renames are skipped; the file-level moves inside them
		// are replayed individually.
		if !record.is_file_move() {
			debug!(
					source = %record.source,
					target = %record.target,
					"skipping directory move"
			);
			continue;
		}

		repo.move_path(&record.source, &record.target).await?;
	}

	// git mv stages the moves itself; one commit covers all of them.
	repo
		.commit(&CommitIntent::Annotated {
			message: message.to_string(),
		})
		.await?;

	info!(base = %base, other = %other, moves = records.len(), "replayed stream moves");
	Ok(true)
}
