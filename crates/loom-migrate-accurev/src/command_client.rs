// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::client::{AccurevClient, Credentials, MoveRecord, TransactionId};
use crate::error::AccurevError;
use crate::parse::{parse_move_records, parse_transaction_id};

/// AccuRev client implementation using the `accurev` CLI.
pub struct CommandAccurevClient {
	/// `host:port` of the AccuRev server, passed to `accurev login -H`.
	host: String,
}

impl CommandAccurevClient {
	pub fn new(host: impl Into<String>) -> Self {
		Self { host: host.into() }
	}
}

#[async_trait]
impl AccurevClient for CommandAccurevClient {
	async fn login(&self, credentials: &Credentials) -> Result<(), AccurevError> {
		debug!(username = %credentials.username, host = %self.host, "logging into accurev");

		let output = spawn_accurev(&[
			"login",
			"-H",
			&self.host,
			&credentials.username,
			credentials.password.expose(),
		])
		.await?;

		if output.status.success() {
			debug!(username = %credentials.username, "accurev login succeeded");
			Ok(())
		} else {
			Err(AccurevError::LoginFailed {
				username: credentials.username.clone(),
				stderr: stderr_of(&output),
			})
		}
	}

	async fn resolve_transaction(&self, stream: &str) -> Result<TransactionId, AccurevError> {
		let stream_flag = format!("-s{stream}");
		let history = run_accurev(&["hist", "-ft", &stream_flag, "-t", "now.1"]).await?;

		let transaction =
			parse_transaction_id(&history).ok_or_else(|| AccurevError::TransactionNotFound {
				stream: stream.to_string(),
			})?;

		debug!(stream = %stream, transaction = %transaction, "resolved stream transaction");
		Ok(transaction)
	}

	async fn populate(
		&self,
		stream: &str,
		transaction: TransactionId,
		dir: &Path,
	) -> Result<(), AccurevError> {
		debug!(
				stream = %stream,
				transaction = %transaction,
				dir = %dir.display(),
				"populating stream"
		);

		// Per-file listing is suppressed; only the exit code matters.
		let stream_flag = format!("-v{stream}");
		let location_flag = format!("-L{}", dir.display());
		let transaction_flag = format!("-t{transaction}");
		run_accurev(&["pop", "-R", &stream_flag, &location_flag, &transaction_flag, "."]).await?;

		Ok(())
	}

	async fn diff_moves(
		&self,
		base: &str,
		other: &str,
	) -> Result<Option<Vec<MoveRecord>>, AccurevError> {
		let output = spawn_accurev(&["diff", "-v", base, "-V", other, "-a", "-i"]).await?;

		// accurev diff is tri-state: 0 = identical, 1 = differences
		// found, anything else = error.
		match output.status.code() {
			Some(0) => {
				debug!(base = %base, other = %other, "streams are identical");
				Ok(None)
			}
			Some(1) => {
				let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
				let records = parse_move_records(&stdout);
				debug!(
						base = %base,
						other = %other,
						move_count = records.len(),
						"extracted move records from stream diff"
				);
				Ok(Some(records))
			}
			_ => Err(AccurevError::DiffFailed {
				base: base.to_string(),
				other: other.to_string(),
				stderr: stderr_of(&output),
			}),
		}
	}
}

/// Runs an accurev command, failing on a non-zero exit code, and returns
/// the captured stdout.
async fn run_accurev(args: &[&str]) -> Result<String, AccurevError> {
	trace!(cmd = %format!("accurev {}", args.join(" ")), "running accurev command");

	let output = spawn_accurev(args).await?;

	if output.status.success() {
		Ok(String::from_utf8_lossy(&output.stdout).into_owned())
	} else {
		Err(AccurevError::CommandFailed {
			args: args.iter().map(|s| s.to_string()).collect(),
			stderr: stderr_of(&output),
		})
	}
}

/// Spawns `accurev` with output captured in memory. The command's stdout
/// is never echoed to the terminal and never touches the filesystem.
/// Deliberately does no argument logging: login arguments carry the
/// password.
async fn spawn_accurev(args: &[&str]) -> Result<std::process::Output, AccurevError> {
	let output = Command::new("accurev")
		.args(args)
		.stdin(Stdio::null())
		.output()
		.await
		.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				warn!("accurev not found in PATH");
				AccurevError::AccurevNotInstalled
			} else {
				AccurevError::Io(e)
			}
		})?;

	Ok(output)
}

fn stderr_of(output: &std::process::Output) -> String {
	String::from_utf8_lossy(&output.stderr).trim().to_string()
}
