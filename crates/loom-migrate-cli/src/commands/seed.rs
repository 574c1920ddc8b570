// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use colored::Colorize;
use loom_migrate_fs::seed_empty_dirs;

use super::junctions::TreeArgs;
use crate::error::CliError;

/// Drops placeholder `.gitignore` files into empty directories so git
/// preserves them.
pub async fn run(args: TreeArgs) -> Result<(), CliError> {
	let report = seed_empty_dirs(&args.dir)?;

	for dir in &report.created {
		println!("  seeded {}", dir.display());
	}
	println!(
		"{} Seeded {} director{} ({} already seeded)",
		"✓".green(),
		report.created.len().to_string().yellow(),
		if report.created.len() == 1 { "y" } else { "ies" },
		report.already_present.len()
	);

	Ok(())
}
