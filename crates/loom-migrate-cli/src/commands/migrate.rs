// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use colored::Colorize;
use loom_migrate_accurev::AccurevClient;

use super::GlobalArgs;
use crate::error::CliError;
use crate::pipeline;

/// Runs the full release plan end to end.
///
/// Logs in once, then migrates every release and its maintenance streams
/// in plan order. Any failure aborts the run; the plan is expected to be
/// re-run against a fresh repository rather than resumed.
pub async fn run(global: &GlobalArgs) -> Result<(), CliError> {
	let plan = global.plan()?;
	let client = global.client()?;
	let credentials = global.credentials()?;

	client.login(&credentials).await?;
	pipeline::run_plan(&client, &plan).await?;

	println!(
		"{} Migrated {} release(s) into {}",
		"✓".green(),
		plan.releases.len().to_string().yellow(),
		plan.git_repo.display()
	);

	Ok(())
}
