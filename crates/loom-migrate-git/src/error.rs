// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitError>;

#[derive(Error, Debug)]
pub enum GitError {
	#[error("git not found in PATH")]
	GitNotInstalled,

	#[error("{path} is not a git repository")]
	NotARepository { path: PathBuf },

	#[error("git {} failed: {stderr}", args.join(" "))]
	CommandFailed { args: Vec<String>, stderr: String },

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
