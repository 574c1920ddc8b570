// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! One module per subcommand, plus the global arguments shared by all of
//! them.

pub mod commit;
pub mod download;
pub mod junctions;
pub mod login;
pub mod migrate;
pub mod move_files;
pub mod seed;
pub mod snapshot;

use std::path::PathBuf;

use loom_migrate_accurev::{CommandAccurevClient, Credentials};
use loom_migrate_config::MigrationPlan;

use crate::error::CliError;

/// Arguments accepted by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
	/// Path to the migration plan
	#[arg(long, global = true, default_value = "migration.json")]
	pub config: PathBuf,

	/// AccuRev server, as HOST:PORT
	#[arg(long, global = true, env = "LOOM_MIGRATE_HOST")]
	pub accurev_host: Option<String>,

	/// AccuRev username
	#[arg(long, global = true, env = "LOOM_MIGRATE_USER")]
	pub user: Option<String>,

	/// AccuRev password
	#[arg(long, global = true, env = "LOOM_MIGRATE_PASSWORD", hide_env_values = true)]
	pub password: Option<String>,

	/// Emit logs as JSON lines instead of human-readable output
	#[arg(long, global = true)]
	pub json_logs: bool,
}

impl GlobalArgs {
	/// Builds the AccuRev client, requiring the server host.
	pub fn client(&self) -> Result<CommandAccurevClient, CliError> {
		let host = self.accurev_host.as_deref().ok_or_else(|| {
			CliError::Usage("--accurev-host (or LOOM_MIGRATE_HOST) is required".to_string())
		})?;
		Ok(CommandAccurevClient::new(host))
	}

	/// Extracts the login credentials, requiring both halves.
	pub fn credentials(&self) -> Result<Credentials, CliError> {
		match (&self.user, &self.password) {
			(Some(user), Some(password)) => Ok(Credentials::new(user, password)),
			_ => Err(CliError::Usage(
				"--user and --password (or LOOM_MIGRATE_USER / LOOM_MIGRATE_PASSWORD) are required"
					.to_string(),
			)),
		}
	}

	/// Loads and validates the migration plan.
	pub fn plan(&self) -> Result<MigrationPlan, CliError> {
		Ok(MigrationPlan::load(&self.config)?)
	}
}
