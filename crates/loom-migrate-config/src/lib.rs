// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Release plan configuration for the AccuRev-to-git migration.
//!
//! The plan is loaded once at startup from `migration.json`. Field names
//! keep wire compatibility with the configuration files written for the
//! original migration tooling, hence the explicit serde renames. Required
//! fields are enforced by deserialization, so a malformed plan fails
//! before any external command runs.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read migration plan {path}: {source}")]
	Read {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to parse migration plan {path}: {source}")]
	Parse {
		path: PathBuf,
		source: serde_json::Error,
	},
}

/// The full declarative migration plan.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationPlan {
	/// Target git repository directory.
	#[serde(rename = "gitRepo")]
	pub git_repo: PathBuf,

	/// Relative paths deleted from every snapshot before it is committed.
	#[serde(default)]
	pub blacklist: Vec<String>,

	/// Optional `.gitignore` template copied into the repository root of
	/// every snapshot.
	#[serde(rename = "gitignoreTemplate", default)]
	pub gitignore_template: Option<PathBuf>,

	/// Releases to migrate, in order.
	pub releases: Vec<Release>,
}

/// One release: a primary stream plus its maintenance streams.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
	/// Version label; the maintenance branch is named `<version>_Maint`.
	#[serde(rename = "Version")]
	pub version: String,

	/// Primary stream migrated onto the main branch.
	#[serde(rename = "StreamName")]
	pub stream_name: String,

	/// Tag applied to the primary stream's commit.
	#[serde(rename = "ReleaseTag")]
	pub release_tag: String,

	/// Maintenance streams migrated onto the `<version>_Maint` branch.
	#[serde(rename = "Maint", default)]
	pub maintenance: Vec<MaintenanceStream>,
}

/// A maintenance stream and the tag (possibly empty) for its commit.
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceStream {
	pub name: String,
	#[serde(default)]
	pub tag: String,
}

impl Release {
	/// Branch that collects this release's maintenance snapshots.
	pub fn maintenance_branch(&self) -> String {
		format!("{}_Maint", self.version)
	}
}

impl MigrationPlan {
	/// Loads and validates the plan from a JSON file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}
}
