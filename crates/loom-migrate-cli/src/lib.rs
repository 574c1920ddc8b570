// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Implementation of the `loom-migrate` CLI.
//!
//! The migration is a strictly sequential pipeline: authenticate against
//! AccuRev, materialize a stream snapshot, normalize the tree, commit it.
//! The orchestrator in [`pipeline`] repeats that pipeline across the
//! releases of a declarative plan. Any failure terminates the whole run
//! with a stage-specific exit code; there is no retry and no resume.

pub mod commands;
pub mod error;
pub mod pipeline;

pub use error::CliError;
