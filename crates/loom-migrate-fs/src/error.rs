// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Error, Debug)]
pub enum FsError {
	#[error("failed to delete blacklisted path {path}: {source}")]
	DeletionFailed {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to convert junction {path}: {source}")]
	JunctionConversionFailed {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("walk error: {0}")]
	Walk(#[from] walkdir::Error),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}
