// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use tracing::{debug, info};

use crate::error::FsError;

/// Deletes blacklisted paths (build artifacts and the like) from the
/// materialized snapshot before it is committed.
///
/// Entries are relative to `root`. Paths that do not exist in this
/// snapshot are reported and skipped; a deletion that fails is fatal.
pub fn delete_blacklisted(root: &Path, entries: &[String]) -> Result<(), FsError> {
	for entry in entries {
		let path = root.join(entry);

		if !path.exists() {
			debug!(path = %path.display(), "blacklisted path not present in snapshot");
			continue;
		}

		let result = if path.is_dir() {
			std::fs::remove_dir_all(&path)
		} else {
			std::fs::remove_file(&path)
		};

		result.map_err(|source| FsError::DeletionFailed {
			path: path.clone(),
			source,
		})?;

		info!(path = %path.display(), "removed blacklisted path");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	/// Test: blacklisted files and directories are removed; everything
	/// else survives.
	#[test]
	fn test_blacklisted_paths_removed() {
		let temp = TempDir::new().unwrap();
		std::fs::create_dir_all(temp.path().join("build/out")).unwrap();
		std::fs::write(temp.path().join("build/out/a.bin"), "x").unwrap();
		std::fs::write(temp.path().join("keep.txt"), "keep").unwrap();
		std::fs::write(temp.path().join("drop.log"), "drop").unwrap();

		delete_blacklisted(
			temp.path(),
			&["build".to_string(), "drop.log".to_string()],
		)
		.unwrap();

		assert!(!temp.path().join("build").exists());
		assert!(!temp.path().join("drop.log").exists());
		assert!(temp.path().join("keep.txt").exists());
	}

	/// Test: entries missing from the snapshot are skipped, not errors.
	///
	/// Why this test is important: the blacklist is shared across every
	/// release in the plan, and most releases will not contain every
	/// blacklisted artifact.
	#[test]
	fn test_missing_entries_are_skipped() {
		let temp = TempDir::new().unwrap();

		delete_blacklisted(temp.path(), &["no/such/path".to_string()]).unwrap();
	}

	/// Test: an empty blacklist is a no-op.
	#[test]
	fn test_empty_blacklist() {
		let temp = TempDir::new().unwrap();
		std::fs::write(temp.path().join("keep.txt"), "keep").unwrap();

		delete_blacklisted(temp.path(), &[]).unwrap();

		assert!(temp.path().join("keep.txt").exists());
	}
}
