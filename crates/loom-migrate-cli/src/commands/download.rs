// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use colored::Colorize;

use super::GlobalArgs;
use crate::error::CliError;
use crate::pipeline::{self, SnapshotOptions};

#[derive(Debug, Clone, clap::Args)]
pub struct DownloadArgs {
	/// The AccuRev stream to materialize
	pub stream: String,

	/// Target directory (defaults to the plan's repository)
	#[arg(long)]
	pub dir: Option<PathBuf>,

	/// Relative path to delete from the snapshot (repeatable)
	#[arg(long = "blacklist")]
	pub blacklist: Vec<String>,
}

/// Materializes one stream snapshot without committing it.
///
/// The snapshot is fully normalized (blacklist applied, junctions
/// converted, empty directories seeded); committing is left to the
/// operator so the tree can be inspected first.
pub async fn run(global: &GlobalArgs, args: DownloadArgs) -> Result<(), CliError> {
	let plan = global.plan()?;
	let client = global.client()?;

	let dir = args.dir.as_deref().unwrap_or(&plan.git_repo);
	let blacklist: Vec<String> = if args.blacklist.is_empty() {
		plan.blacklist.clone()
	} else {
		args.blacklist.clone()
	};

	let options = SnapshotOptions {
		blacklist: &blacklist,
		gitignore_template: plan.gitignore_template.as_deref(),
	};

	let (_, transaction) =
		pipeline::materialize_stream(&client, dir, &args.stream, &options).await?;

	println!(
		"{} Downloaded {} at transaction {} into {}",
		"✓".green(),
		args.stream.yellow(),
		transaction.to_string().yellow(),
		dir.display()
	);

	Ok(())
}
