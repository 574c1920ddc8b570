// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use colored::Colorize;
use loom_migrate_accurev::AccurevClient;

use super::GlobalArgs;
use crate::error::CliError;
use crate::pipeline;

#[derive(Debug, Clone, clap::Args)]
pub struct MoveArgs {
	/// The stream whose layout the repository currently matches
	pub base: String,

	/// The stream whose layout the repository should be moved towards
	pub other: String,

	/// Commit message for the replayed moves
	#[arg(short, long)]
	pub message: String,
}

/// Diffs two streams and replays the file renames between them as
/// history-preserving `git mv` operations.
pub async fn run(global: &GlobalArgs, args: MoveArgs) -> Result<(), CliError> {
	let plan = global.plan()?;
	let client = global.client()?;
	let credentials = global.credentials()?;

	client.login(&credentials).await?;

	let replayed =
		pipeline::replay_moves(&client, &plan.git_repo, &args.base, &args.other, &args.message)
			.await?;

	if replayed {
		println!(
			"{} Replayed moves from {} to {}",
			"✓".green(),
			args.base.yellow(),
			args.other.yellow()
		);
	} else {
		println!(
			"{} Streams {} and {} are identical; nothing to do",
			"✓".green(),
			args.base.yellow(),
			args.other.yellow()
		);
	}

	Ok(())
}
