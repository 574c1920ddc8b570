// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Filesystem normalization passes run on a freshly populated snapshot
//! before it is committed: junction-to-symlink conversion, empty
//! directory seeding, and blacklist deletion.
//!
//! Each pass is self-contained; in particular both tree walks detect and
//! refuse to descend into reparse points independently, so the passes
//! compose in any order.

pub mod blacklist;
pub mod error;
pub mod junctions;
pub mod reparse;
pub mod seed;

pub use blacklist::delete_blacklisted;
pub use error::{FsError, Result};
pub use junctions::{convert_junctions, ConvertedJunction};
pub use seed::{seed_empty_dirs, SeedReport, PLACEHOLDER_CONTENT};
