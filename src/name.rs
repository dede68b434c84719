// SPDX-License-Identifier: Apache-2.0 OR MIT
use chrono::NaiveDateTime;
use std::{fmt, path::Path};

const PREFIX: &str = "backup_";
const EXTENSION: &str = ".zip";
/// `YY-MM-DD_HH.MM.SS`, 24-hour clock.
const TIMESTAMP_FORMAT: &str = "%y-%m-%d_%H.%M.%S";

/// The file name of a backup archive, `backup_<subject>@<timestamp>.zip`.
///
/// The subject is inserted verbatim. A subject containing path separators
/// will point outside the output directory, or fail to be created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveName(String);

impl ArchiveName {
	pub fn new(subject: &str, timestamp: &NaiveDateTime) -> Self {
		Self(format!(
			"{PREFIX}{subject}@{}{EXTENSION}",
			timestamp.format(TIMESTAMP_FORMAT)
		))
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ArchiveName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<Path> for ArchiveName {
	fn as_ref(&self) -> &Path {
		Path::new(&self.0)
	}
}

#[cfg(test)]
mod test {
	use super::ArchiveName;
	use chrono::{NaiveDate, NaiveDateTime};

	fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2024, 1, 15)
			.and_then(|date| date.and_hms_opt(h, m, s))
			.expect("valid timestamp")
	}

	#[test]
	fn format() {
		let name = ArchiveName::new("weekly", &at(10, 30, 0));
		assert_eq!(name.as_str(), "backup_weekly@24-01-15_10.30.00.zip");
	}

	#[test]
	fn zero_padded_24h() {
		let timestamp = NaiveDate::from_ymd_opt(2009, 3, 4)
			.and_then(|date| date.and_hms_opt(21, 5, 7))
			.expect("valid timestamp");
		assert_eq!(
			ArchiveName::new("x", &timestamp).to_string(),
			"backup_x@09-03-04_21.05.07.zip"
		);
	}

	#[test]
	fn seconds_distinguish() {
		assert_ne!(
			ArchiveName::new("daily", &at(8, 0, 0)),
			ArchiveName::new("daily", &at(8, 0, 1))
		);
		// same subject in the same second collides
		assert_eq!(
			ArchiveName::new("daily", &at(8, 0, 0)),
			ArchiveName::new("daily", &at(8, 0, 0))
		);
	}

	#[test]
	fn subject_verbatim() {
		let name = ArchiveName::new("my docs/2", &at(0, 0, 0));
		assert_eq!(name.as_str(), "backup_my docs/2@24-01-15_00.00.00.zip");
	}
}
