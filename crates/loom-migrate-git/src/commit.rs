// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// What a migration commit is for, made explicit so the three intents
/// cannot be confused the way sentinel tag values could be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitIntent {
	/// A maintenance-stream snapshot: fixed `Added Maint` message, no tag.
	Maintenance,
	/// A commit with a caller-supplied message and no tag.
	Annotated { message: String },
	/// A release snapshot: `Added <tag>` message, then a tag object named
	/// `<tag>` on the new commit.
	TaggedRelease { tag: String },
}

impl CommitIntent {
	/// The commit message this intent produces.
	pub fn message(&self) -> String {
		match self {
			CommitIntent::Maintenance => "Added Maint".to_string(),
			CommitIntent::Annotated { message } => message.clone(),
			CommitIntent::TaggedRelease { tag } => format!("Added {tag}"),
		}
	}

	/// The tag to create after committing, if any. At most one tag per
	/// migration unit.
	pub fn tag(&self) -> Option<&str> {
		match self {
			CommitIntent::TaggedRelease { tag } => Some(tag),
			_ => None,
		}
	}
}
