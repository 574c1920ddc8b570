// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::error::AccurevError;

/// A point in AccuRev history. Once resolved for a migration unit it is
/// never re-resolved; the same value drives the populate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// AccuRev password, redacted from `Debug` output so credentials never
/// end up in logs.
#[derive(Clone)]
pub struct Password(String);

impl Password {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the underlying password for handing to the `accurev` CLI.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Password(***)")
	}
}

/// Username/password pair for the source system. Held in memory only and
/// used once per process.
#[derive(Debug, Clone)]
pub struct Credentials {
	pub username: String,
	pub password: Password,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: Password::new(password),
		}
	}
}

/// A rename extracted from an AccuRev stream diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
	pub source: String,
	pub target: String,
}

impl MoveRecord {
	/// Returns true if the target names a file rather than a directory.
	///
	/// AccuRev reports directory renames alongside the renames of the
	/// files inside them; only the file-level moves are replayed, so a
	/// target whose basename has no extension is treated as a directory
	/// move and skipped.
	pub fn is_file_move(&self) -> bool {
		self
			.target
			.rsplit('/')
			.next()
			.map(|basename| basename.contains('.'))
			.unwrap_or(false)
	}
}

/// Trait abstracting AccuRev operations so the pipeline can be exercised
/// without an AccuRev server.
#[async_trait]
pub trait AccurevClient: Send + Sync {
	/// Establish a session. A single attempt; failure is fatal to the run.
	async fn login(&self, credentials: &Credentials) -> Result<(), AccurevError>;

	/// Resolve a stream name to the transaction id of its most recent
	/// transaction ("now").
	async fn resolve_transaction(&self, stream: &str) -> Result<TransactionId, AccurevError>;

	/// Recursively materialize the stream's files as of `transaction`
	/// into `dir`, suppressing per-file output.
	async fn populate(
		&self,
		stream: &str,
		transaction: TransactionId,
		dir: &Path,
	) -> Result<(), AccurevError>;

	/// Diff two streams and extract the renames.
	///
	/// Returns `None` when the streams are identical (diff exit code 0),
	/// `Some(records)` when differences were found (exit code 1). Any
	/// other exit code is an error.
	async fn diff_moves(
		&self,
		base: &str,
		other: &str,
	) -> Result<Option<Vec<MoveRecord>>, AccurevError>;
}
