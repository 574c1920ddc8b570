// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `loom-migrate` binary entrypoint.

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use loom_migrate_cli::commands::{self, GlobalArgs};
use loom_migrate_cli::CliError;

/// One-time AccuRev to git migration tool.
#[derive(Parser, Debug)]
#[command(name = "loom-migrate", about = "Migrate AccuRev streams into a git repository", version)]
struct Args {
	#[command(flatten)]
	global: GlobalArgs,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Authenticate against the AccuRev server
	Login,

	/// Materialize and normalize one stream snapshot without committing
	Download(commands::download::DownloadArgs),

	/// Convert NTFS junctions under a tree into relative symlinks
	ConvertJunctions(commands::junctions::TreeArgs),

	/// Seed empty directories with placeholder .gitignore files
	SeedEmptyDirs(commands::junctions::TreeArgs),

	/// Stage and commit the working tree under an explicit intent
	Commit(commands::commit::CommitArgs),

	/// Run the full release plan
	Migrate,

	/// Migrate a single stream as one commit
	Snapshot(commands::snapshot::SnapshotArgs),

	/// Replay file renames between two streams as git mv operations
	MoveFiles(commands::move_files::MoveArgs),
}

fn init_tracing(json_logs: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	if json_logs {
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.json()
			.init();
	} else {
		tracing_subscriber::fmt().with_env_filter(filter).init();
	}
}

async fn dispatch(args: Args) -> Result<(), CliError> {
	match args.command {
		Command::Login => commands::login::run(&args.global).await,
		Command::Download(download) => commands::download::run(&args.global, download).await,
		Command::ConvertJunctions(tree) => commands::junctions::run(tree).await,
		Command::SeedEmptyDirs(tree) => commands::seed::run(tree).await,
		Command::Commit(commit) => commands::commit::run(&args.global, commit).await,
		Command::Migrate => commands::migrate::run(&args.global).await,
		Command::Snapshot(snapshot) => commands::snapshot::run(&args.global, snapshot).await,
		Command::MoveFiles(moves) => commands::move_files::run(&args.global, moves).await,
	}
}

#[tokio::main]
async fn main() {
	let args = Args::parse();
	init_tracing(args.global.json_logs);

	if let Err(error) = dispatch(args).await {
		eprintln!("{} {}", "✗".red(), error);
		std::process::exit(error.exit_code());
	}
}
