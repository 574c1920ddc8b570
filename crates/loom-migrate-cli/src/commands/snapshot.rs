// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use colored::Colorize;
use loom_migrate_accurev::AccurevClient;

use super::GlobalArgs;
use crate::error::CliError;
use crate::pipeline;

#[derive(Debug, Clone, clap::Args)]
pub struct SnapshotArgs {
	/// The AccuRev stream to snapshot
	pub stream: String,

	/// Commit message for the snapshot
	#[arg(short, long)]
	pub message: String,
}

/// Migrates a single stream as one commit on the current branch.
///
/// The commit message records the AccuRev transaction number that was
/// migrated so the commit can be traced back to the source history.
pub async fn run(global: &GlobalArgs, args: SnapshotArgs) -> Result<(), CliError> {
	let plan = global.plan()?;
	let client = global.client()?;
	let credentials = global.credentials()?;

	client.login(&credentials).await?;
	pipeline::run_snapshot(&client, &plan, &args.stream, &args.message).await?;

	println!(
		"{} Snapshotted {} into {}",
		"✓".green(),
		args.stream.yellow(),
		plan.git_repo.display()
	);

	Ok(())
}
