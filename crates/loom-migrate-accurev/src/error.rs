// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccurevError>;

#[derive(Error, Debug)]
pub enum AccurevError {
	#[error("accurev not found in PATH")]
	AccurevNotInstalled,

	#[error("accurev login failed for user {username}: {stderr}")]
	LoginFailed { username: String, stderr: String },

	#[error("accurev {} failed: {stderr}", args.join(" "))]
	CommandFailed { args: Vec<String>, stderr: String },

	#[error("no transaction line found in history output for stream {stream}")]
	TransactionNotFound { stream: String },

	#[error("accurev diff between {base} and {other} failed: {stderr}")]
	DiffFailed {
		base: String,
		other: String,
		stderr: String,
	},

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
