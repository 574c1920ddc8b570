// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use colored::Colorize;
use loom_migrate_git::{CommitIntent, GitRepo};

use super::GlobalArgs;
use crate::error::CliError;
use crate::pipeline;

#[derive(Debug, Clone, clap::Args)]
pub struct CommitArgs {
	/// Repository to commit in (defaults to the plan's repository)
	#[arg(long)]
	pub dir: Option<PathBuf>,

	#[command(flatten)]
	pub intent: IntentArgs,
}

/// Exactly one intent must be chosen; there is no default commit shape.
/// The group covers only these three flags so `--dir` combines freely
/// with any of them.
#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub struct IntentArgs {
	/// Commit and tag as a release
	#[arg(long)]
	pub tag: Option<String>,

	/// Commit as an untagged maintenance snapshot
	#[arg(long)]
	pub maint: bool,

	/// Commit with a free-form message
	#[arg(long)]
	pub message: Option<String>,
}

impl IntentArgs {
	fn intent(&self) -> CommitIntent {
		if let Some(tag) = &self.tag {
			CommitIntent::TaggedRelease { tag: tag.clone() }
		} else if let Some(message) = &self.message {
			CommitIntent::Annotated {
				message: message.clone(),
			}
		} else {
			CommitIntent::Maintenance
		}
	}
}

/// Stages and commits the working tree of the target repository under the
/// chosen intent.
pub async fn run(global: &GlobalArgs, args: CommitArgs) -> Result<(), CliError> {
	let dir = match &args.dir {
		Some(dir) => dir.clone(),
		None => global.plan()?.git_repo,
	};

	let repo = GitRepo::open(&dir);
	let intent = args.intent.intent();
	let sha = pipeline::commit_snapshot(&repo, &intent).await?;

	println!(
		"{} Committed {} ({})",
		"✓".green(),
		&sha[..sha.len().min(12)],
		intent.message().dimmed()
	);

	Ok(())
}
