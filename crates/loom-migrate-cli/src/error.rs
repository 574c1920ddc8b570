// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

use loom_migrate_accurev::AccurevError;
use loom_migrate_config::ConfigError;
use loom_migrate_fs::FsError;
use loom_migrate_git::GitError;

/// Process exit codes. Zero is success; each failure class gets its own
/// code so wrapper scripts can tell the stages apart.
pub const EXIT_UNKNOWN: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_ACCUREV: i32 = 3;
pub const EXIT_GIT: i32 = 4;
pub const EXIT_FILESYSTEM: i32 = 5;

#[derive(Error, Debug)]
pub enum CliError {
	#[error("{0}")]
	Usage(String),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Accurev(#[from] AccurevError),

	#[error(transparent)]
	Git(#[from] GitError),

	#[error(transparent)]
	Fs(#[from] FsError),

	#[error("failed to create target directory {path}: {source}")]
	CreateDir {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to copy gitignore template {path}: {source}")]
	CopyTemplate {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl CliError {
	/// Maps the failure class to its process exit code.
	pub fn exit_code(&self) -> i32 {
		match self {
			CliError::Usage(_) | CliError::Config(_) => EXIT_CONFIG,
			CliError::Accurev(_) => EXIT_ACCUREV,
			CliError::Git(_) => EXIT_GIT,
			CliError::Fs(_) | CliError::CreateDir { .. } | CliError::CopyTemplate { .. } => {
				EXIT_FILESYSTEM
			}
			CliError::Io(_) => EXIT_UNKNOWN,
		}
	}
}
