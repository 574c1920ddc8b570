// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pure parsers for the fixed-format text the `accurev` CLI produces.

use crate::client::{MoveRecord, TransactionId};

/// Marker in `accurev diff` output denoting a rename.
const MOVED_TO: &str = "moved to";

/// Extracts the transaction id from `accurev hist -ft` output.
///
/// The id lives on the first line whose first whitespace-delimited token
/// is `transaction`; it is the second token, up to the first `;`. Returns
/// `None` when no such line exists, which callers must surface as a
/// resolution failure rather than continuing with a stale id.
pub fn parse_transaction_id(history: &str) -> Option<TransactionId> {
	for line in history.lines() {
		let mut tokens = line.split_whitespace();
		if tokens.next() != Some("transaction") {
			continue;
		}
		return tokens
			.next()
			.and_then(|field| field.split(';').next())
			.and_then(|digits| digits.parse::<u64>().ok())
			.map(TransactionId);
	}
	None
}

/// Extracts move records from `accurev diff -a -i` output.
///
/// Every line containing the `moved to` marker is split on the marker;
/// each side is trimmed and has leading `./` and `/` sequences stripped.
pub fn parse_move_records(diff: &str) -> Vec<MoveRecord> {
	diff
		.lines()
		.filter_map(|line| {
			let (source, target) = line.split_once(MOVED_TO)?;
			Some(MoveRecord {
				source: normalize_diff_path(source),
				target: normalize_diff_path(target),
			})
		})
		.collect()
}

/// Strips surrounding whitespace and leading `./` / `/` sequences.
///
/// AccuRev prints depot-relative paths like `/./src/a.txt`; git wants
/// `src/a.txt`. Only prefixes are stripped so dotfiles such as
/// `.gitignore` survive intact.
fn normalize_diff_path(raw: &str) -> String {
	let mut path = raw.trim();
	loop {
		if let Some(rest) = path.strip_prefix("./") {
			path = rest;
		} else if let Some(rest) = path.strip_prefix('/') {
			path = rest;
		} else {
			break;
		}
	}
	path.to_string()
}
