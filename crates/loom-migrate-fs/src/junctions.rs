// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::FsError;
use crate::reparse;

/// A junction that was rewritten as a relative symbolic link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedJunction {
	pub link: PathBuf,
	pub target: PathBuf,
}

/// Walks `root` top-down and converts every directory junction into a
/// relative symbolic link pointing at the same target.
///
/// The walk never descends into a junction or an existing symbolic link;
/// converted junctions are not descended into either, so a junction whose
/// target lies inside the tree cannot cause the walk to loop. Directories
/// that are already true symbolic links are left untouched.
pub fn convert_junctions(root: &Path) -> Result<Vec<ConvertedJunction>, FsError> {
	let mut converted = Vec::new();
	convert_in(root, &mut converted)?;

	debug!(
			root = %root.display(),
			converted = converted.len(),
			"junction conversion pass complete"
	);
	Ok(converted)
}

fn convert_in(dir: &Path, converted: &mut Vec<ConvertedJunction>) -> Result<(), FsError> {
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		if entry.file_name() == ".git" {
			continue;
		}
		let path = entry.path();
		let file_type = std::fs::symlink_metadata(&path)?.file_type();

		if file_type.is_symlink() {
			// Already a portable link; nothing to convert, do not descend.
			continue;
		}
		if !file_type.is_dir() {
			continue;
		}

		if reparse::is_reparse_point(&path) {
			if let Some(target) = reparse::substitute_target(&path)? {
				convert_one(&path, &target, dir)?;
				converted.push(ConvertedJunction {
					link: path,
					target,
				});
			}
			// A reparse point is never descended into, converted or not.
			continue;
		}

		convert_in(&path, converted)?;
	}

	Ok(())
}

/// Replaces the junction at `link` with a symbolic link to `target`,
/// expressed relative to `parent` so the tree stays portable when moved.
fn convert_one(link: &Path, target: &Path, parent: &Path) -> Result<(), FsError> {
	reparse::delete_reparse_point(link)?;

	let relative = relative_to(target, parent);
	reparse::create_dir_symlink(link, &relative).map_err(|source| {
		FsError::JunctionConversionFailed {
			path: link.to_path_buf(),
			source,
		}
	})?;

	info!(
			link = %link.display(),
			target = %relative.display(),
			"converted junction to relative symlink"
	);
	Ok(())
}

/// Expresses `target` relative to `base` by stripping the longest common
/// component prefix and backing out of the remainder of `base`. Falls
/// back to the absolute target when the two share no prefix (for example
/// different drives).
fn relative_to(target: &Path, base: &Path) -> PathBuf {
	let target_components: Vec<Component<'_>> = target.components().collect();
	let base_components: Vec<Component<'_>> = base.components().collect();

	let common = target_components
		.iter()
		.zip(base_components.iter())
		.take_while(|(a, b)| a == b)
		.count();

	if common == 0 {
		return target.to_path_buf();
	}

	let mut relative = PathBuf::new();
	for _ in common..base_components.len() {
		relative.push("..");
	}
	for component in &target_components[common..] {
		relative.push(component);
	}

	if relative.as_os_str().is_empty() {
		relative.push(".");
	}

	relative
}
