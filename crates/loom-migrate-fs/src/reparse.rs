// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Reparse-point plumbing. Junctions only exist on Windows, where the
//! queries shell out to `fsutil`; elsewhere the queries are compiled to
//! constant answers so the walks above them behave identically.

use std::path::Path;

use crate::error::FsError;

/// Prefix `fsutil reparsepoint query` prints before an NT-namespaced
/// substitute path.
const NT_NAMESPACE_PREFIX: &str = "\\??\\";

/// Returns whether `path` is a reparse point (junction or symlink).
#[cfg(windows)]
pub fn is_reparse_point(path: &Path) -> bool {
	std::process::Command::new("fsutil")
		.args(["reparsepoint", "query"])
		.arg(path)
		.output()
		.map(|output| output.status.success())
		.unwrap_or(false)
}

#[cfg(not(windows))]
pub fn is_reparse_point(_path: &Path) -> bool {
	false
}

/// Resolves a junction's substitute target.
///
/// Returns `Ok(None)` when the reparse point carries no substitute name
/// in the expected form, which is what a true symbolic link reports; such
/// paths are left untouched.
#[cfg(windows)]
pub fn substitute_target(path: &Path) -> Result<Option<std::path::PathBuf>, FsError> {
	let output = std::process::Command::new("fsutil")
		.args(["reparsepoint", "query"])
		.arg(path)
		.output()?;

	if !output.status.success() {
		return Ok(None);
	}

	let stdout = String::from_utf8_lossy(&output.stdout);
	Ok(parse_substitute_name(&stdout).map(std::path::PathBuf::from))
}

#[cfg(not(windows))]
pub fn substitute_target(_path: &Path) -> Result<Option<std::path::PathBuf>, FsError> {
	Ok(None)
}

/// Deletes a reparse point without deleting the directory it points to,
/// then removes the now-ordinary empty directory left behind.
#[cfg(windows)]
pub fn delete_reparse_point(path: &Path) -> Result<(), FsError> {
	let output = std::process::Command::new("fsutil")
		.args(["reparsepoint", "delete"])
		.arg(path)
		.output()?;

	if !output.status.success() {
		return Err(FsError::JunctionConversionFailed {
			path: path.to_path_buf(),
			source: std::io::Error::other(String::from_utf8_lossy(&output.stderr).into_owned()),
		});
	}

	std::fs::remove_dir(path)?;
	Ok(())
}

#[cfg(not(windows))]
pub fn delete_reparse_point(path: &Path) -> Result<(), FsError> {
	Err(FsError::JunctionConversionFailed {
		path: path.to_path_buf(),
		source: std::io::Error::other("reparse points are not supported on this platform"),
	})
}

/// Creates a directory symbolic link at `link` pointing at `target`.
#[cfg(windows)]
pub fn create_dir_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
	std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
pub fn create_dir_symlink(link: &Path, target: &Path) -> std::io::Result<()> {
	std::os::unix::fs::symlink(target, link)
}

/// Extracts the substitute name from `fsutil reparsepoint query` output,
/// stripping the NT namespace prefix.
pub(crate) fn parse_substitute_name(output: &str) -> Option<String> {
	for line in output.lines() {
		if !line.contains("Substitute") {
			continue;
		}
		if let Some(index) = line.find(NT_NAMESPACE_PREFIX) {
			let target = line[index + NT_NAMESPACE_PREFIX.len()..].trim();
			if !target.is_empty() {
				return Some(target.to_string());
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	const FSUTIL_JUNCTION_OUTPUT: &str = "\
Reparse Tag Value : 0xa0000003
Tag value: Microsoft
Tag value: Name Surrogate
Tag value: Mount Point
Substitute Name offset: 0
Substitute Name length: 62
Print Name offset:      66
Print Name Length:      54
Substitute Name:        \\??\\C:\\repositories\\gitRepo\\shared\\lib
Print Name:             C:\\repositories\\gitRepo\\shared\\lib
";

	/// Test: the substitute name is extracted with the NT prefix removed.
	#[test]
	fn test_parse_substitute_name() {
		assert_eq!(
			parse_substitute_name(FSUTIL_JUNCTION_OUTPUT),
			Some("C:\\repositories\\gitRepo\\shared\\lib".to_string())
		);
	}

	/// Test: output without a substitute name line yields None.
	///
	/// Why this test is important: a directory that is already a true
	/// symbolic link reports no mount-point substitute name; the converter
	/// must leave such paths untouched rather than erroring.
	#[test]
	fn test_parse_no_substitute_name() {
		assert_eq!(parse_substitute_name("Reparse Tag Value : 0xa000000c\n"), None);
		assert_eq!(parse_substitute_name(""), None);
	}

	/// Test: a substitute line without the NT prefix is not actionable.
	#[test]
	fn test_parse_substitute_without_prefix() {
		assert_eq!(
			parse_substitute_name("Substitute Name:        relative\\path\n"),
			None
		);
	}
}
