// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! AccuRev client for the one-time AccuRev-to-git migration.
//!
//! Everything here shells out to the `accurev` CLI; the [`AccurevClient`]
//! trait is the seam that lets the migration pipeline run against a fake
//! in tests. Output of external commands is captured in memory and parsed
//! by the pure functions in [`parse`].

pub mod client;
pub mod command_client;
pub mod error;
pub mod parse;

pub use client::{AccurevClient, Credentials, MoveRecord, Password, TransactionId};
pub use command_client::CommandAccurevClient;
pub use error::{AccurevError, Result};
