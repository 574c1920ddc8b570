// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use colored::Colorize;
use loom_migrate_accurev::AccurevClient;

use super::GlobalArgs;
use crate::error::CliError;

/// Authenticates against the AccuRev server and exits.
///
/// Useful to verify credentials before kicking off a long migration run.
pub async fn run(global: &GlobalArgs) -> Result<(), CliError> {
	let client = global.client()?;
	let credentials = global.credentials()?;

	client.login(&credentials).await?;

	println!(
		"{} Logged in to AccuRev as {}",
		"✓".green(),
		credentials.username.yellow()
	);

	Ok(())
}
