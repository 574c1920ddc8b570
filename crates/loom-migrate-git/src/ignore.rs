// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::GitError;

/// The standard block appended to `.gitignore` so binaries promoted into
/// AccuRev never make it into future git commits.
pub const BINARY_IGNORE_BLOCK: &str = "\n\
# Java build output\n\
.gradle/\n\
.idea/\n\
\n\
# Binary extensions\n\
*.bin\n\
*.bmp\n\
*.cfx\n\
*.dat\n\
*.der\n\
*.dll\n\
*.docx\n\
*.exe\n\
*.gif\n\
*.ico\n\
*.jpg\n\
*.lib\n\
*.mdb\n\
*.msi\n\
*.opf\n\
*.png\n\
*.pdf\n\
*.pptx\n\
*.xlsx\n\
*.zip\n";

/// Appends the binary-ignore block to `<repo>/.gitignore`, creating the
/// file if the snapshot did not ship one.
pub fn append_binary_ignore(repo: &Path) -> Result<(), GitError> {
	let path = repo.join(".gitignore");

	let mut file = std::fs::OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)?;
	file.write_all(BINARY_IGNORE_BLOCK.as_bytes())?;

	debug!(path = %path.display(), "appended binary ignore block");
	Ok(())
}
