// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use colored::Colorize;
use loom_migrate_fs::convert_junctions;

use crate::error::CliError;

#[derive(Debug, Clone, clap::Args)]
pub struct TreeArgs {
	/// Root of the tree to process
	pub dir: PathBuf,
}

/// Converts NTFS junctions under a tree into relative symlinks.
pub async fn run(args: TreeArgs) -> Result<(), CliError> {
	let converted = convert_junctions(&args.dir)?;

	for junction in &converted {
		println!(
			"  {} -> {}",
			junction.link.display(),
			junction.target.display()
		);
	}
	println!(
		"{} Converted {} junction(s) under {}",
		"✓".green(),
		converted.len().to_string().yellow(),
		args.dir.display()
	);

	Ok(())
}
