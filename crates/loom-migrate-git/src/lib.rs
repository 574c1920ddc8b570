// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Git operations for the AccuRev-to-git migration.
//!
//! A thin wrapper over the `git` CLI scoped to one repository path. All
//! migration commits carry a fixed placeholder author so they are
//! distinguishable from human-authored commits.

pub mod commit;
pub mod error;
pub mod ignore;
pub mod repo;

pub use commit::CommitIntent;
pub use error::{GitError, Result};
pub use ignore::{append_binary_ignore, BINARY_IGNORE_BLOCK};
pub use repo::{GitRepo, MIGRATION_AUTHOR};
