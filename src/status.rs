// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::{error::Result, name::ArchiveName};

pub const FAILURE_MESSAGE: &str = "Failed to create archive.";

/// The one-line status shown after a pack attempt.
pub fn describe(archive: Option<&ArchiveName>) -> String {
	match archive {
		Some(name) => format!("Folder packed successfully: {name}"),
		None => FAILURE_MESSAGE.to_string(),
	}
}

#[inline]
pub fn describe_result(result: &Result<ArchiveName>) -> String {
	describe(result.as_ref().ok())
}
