// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::FsError;
use crate::reparse;

/// Placeholder written into empty directories so git tracks them. The
/// file ignores everything else in its directory but tracks itself.
pub const PLACEHOLDER_CONTENT: &str = "\
# Ignore everything in this directory\n\
*\n\
# Except this file\n\
!.gitignore";

/// Outcome of a seeding pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
	/// Directories that received a new placeholder.
	pub created: Vec<PathBuf>,
	/// Directories whose placeholder already existed and was left as-is.
	pub already_present: Vec<PathBuf>,
}

enum DirState {
	Empty,
	OnlyPlaceholder,
	Populated,
}

/// Walks `root` top-down and writes a `.gitignore` placeholder into
/// every directory that contains no files and no subdirectories.
///
/// Idempotent: a directory whose only entry is the placeholder is
/// reported as already seeded, never rewritten. Symbolic links and
/// reparse points are detected and skipped independently of the junction
/// conversion pass.
pub fn seed_empty_dirs(root: &Path) -> Result<SeedReport, FsError> {
	let mut report = SeedReport::default();

	let walker = WalkDir::new(root)
		.follow_links(false)
		.into_iter()
		.filter_entry(|entry| {
			// The pass runs inside a live repository; git's own metadata
			// must never be seeded.
			entry.file_name() != ".git"
				&& !entry.path_is_symlink()
				&& !reparse::is_reparse_point(entry.path())
		});

	for entry in walker {
		let entry = entry?;
		if !entry.file_type().is_dir() {
			continue;
		}

		match classify(entry.path())? {
			DirState::Empty => {
				let placeholder = entry.path().join(".gitignore");
				std::fs::write(&placeholder, PLACEHOLDER_CONTENT)?;
				info!(path = %placeholder.display(), "seeded empty directory");
				report.created.push(entry.path().to_path_buf());
			}
			DirState::OnlyPlaceholder => {
				debug!(path = %entry.path().display(), "placeholder already present");
				report.already_present.push(entry.path().to_path_buf());
			}
			DirState::Populated => {}
		}
	}

	debug!(
			root = %root.display(),
			created = report.created.len(),
			already_present = report.already_present.len(),
			"empty directory seeding pass complete"
	);
	Ok(report)
}

fn classify(dir: &Path) -> Result<DirState, FsError> {
	let mut entries = std::fs::read_dir(dir)?;

	let first = match entries.next() {
		None => return Ok(DirState::Empty),
		Some(entry) => entry?,
	};

	if entries.next().is_none() && first.file_name() == ".gitignore" {
		Ok(DirState::OnlyPlaceholder)
	} else {
		Ok(DirState::Populated)
	}
}
