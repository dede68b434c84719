// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::{
	error::{Error, Result},
	name::ArchiveName,
};
use chrono::{DateTime as ChronoDateTime, Datelike, Local, NaiveDateTime, Timelike};
use std::{
	borrow::Cow,
	collections::HashSet,
	ffi::OsStr,
	fs::{self, File},
	io::{self, Error as IoError, Seek, Write},
	path::{Component, Path, PathBuf},
	time::SystemTime,
};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, DateTime, ZipWriter};

const DEFAULT_PERMISSIONS: u32 = 0o644;
const EXECUTABLE_PERMISSIONS: u32 = 0o755;

/// Packs directories into deflate-compressed zip archives.
#[derive(Debug, Clone)]
pub struct Archiver {
	output_dir: PathBuf,
}

impl Archiver {
	/// An archiver writing into the current working directory.
	pub fn new() -> Self {
		Self::default()
	}

	/// Write archives into `dir` instead of the current working directory.
	pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.output_dir = dir.into();
		self
	}

	/// Pack every regular file under `source` into
	/// `backup_<subject>@<YY-MM-DD_HH.MM.SS>.zip`, named after the current
	/// local time.
	///
	/// Returns the name of the archive that was written.
	pub fn pack(&self, source: impl AsRef<Path>, subject: &str) -> Result<ArchiveName> {
		let now = Local::now().naive_local();
		self.pack_at(source, subject, now)
	}

	/// Same as [`Archiver::pack`], with the timestamp supplied by the caller.
	pub fn pack_at(
		&self,
		source: impl AsRef<Path>,
		subject: &str,
		timestamp: NaiveDateTime,
	) -> Result<ArchiveName> {
		let source = source.as_ref();
		let result = self.pack_impl(source, subject, &timestamp);
		if let Err(err) = &result {
			warn!(source = %source.display(), "{err}");
		}
		result
	}

	fn pack_impl(
		&self,
		source: &Path,
		subject: &str,
		timestamp: &NaiveDateTime,
	) -> Result<ArchiveName> {
		validate_source(source)?;
		let name = ArchiveName::new(subject, timestamp);
		let output = self.output_dir.join(&name);
		let entries = write_archive(source, &output)?;
		info!(archive = %output.display(), entries, "packed {}", source.display());
		Ok(name)
	}
}

impl Default for Archiver {
	fn default() -> Self {
		Self {
			output_dir: PathBuf::from("."),
		}
	}
}

fn validate_source(source: &Path) -> Result<()> {
	// Any failure to stat counts as missing, dangling symlinks included.
	let metadata = match fs::metadata(source) {
		Ok(metadata) => metadata,
		Err(err) => {
			debug!(source = %source.display(), "failed to stat source: {err}");
			return Err(Error::NotFound(source.to_path_buf()));
		}
	};
	if !metadata.is_dir() {
		return Err(Error::NotADirectory(source.to_path_buf()));
	}
	Ok(())
}

/// Writes the archive, returning the number of entries added.
fn write_archive(source: &Path, output: &Path) -> Result<usize> {
	let mut archive = ArchiveBuilder::new(File::create(output)?);
	let output = output.canonicalize()?;
	let output_name = output.file_name().map(ToOwned::to_owned);

	for entry in WalkDir::new(source).sort_by_file_name() {
		let entry = entry?;
		if !entry.file_type().is_file() {
			continue;
		}
		let path = entry.path();
		if output_name.as_deref() == path.file_name() && path.canonicalize()? == output {
			debug!(path = %path.display(), "skipping the archive being written");
			continue;
		}
		let stripped_path = path
			.strip_prefix(source)
			.map_err(|err| IoError::new(io::ErrorKind::Other, err))?;
		archive.add_file(path, stripped_path)?;
	}

	let entries = archive.entries();
	archive.finish()?.sync_all()?;
	Ok(entries)
}

/// Adds files to a zip container under unique entry names.
///
/// The inner writer finalizes the central directory when dropped, so a
/// builder abandoned after an error still leaves a readable container.
struct ArchiveBuilder<W: Write + Seek> {
	zip: ZipWriter<W>,
	names: HashSet<String>,
}

impl<W: Write + Seek> ArchiveBuilder<W> {
	fn new(writer: W) -> Self {
		Self {
			zip: ZipWriter::new(writer),
			names: HashSet::new(),
		}
	}

	fn entries(&self) -> usize {
		self.names.len()
	}

	/// Compresses the file at `path` into the entry named after `relative`.
	fn add_file(&mut self, path: &Path, relative: &Path) -> Result<()> {
		let mut file = File::open(path)?;
		let metadata = file.metadata()?;
		let mut options: FileOptions<'_, ()> = FileOptions::default()
			.compression_method(CompressionMethod::Deflated)
			.unix_permissions(if is_executable::is_executable(path) {
				EXECUTABLE_PERMISSIONS
			} else {
				DEFAULT_PERMISSIONS
			});
		if let Some(modified) = metadata.modified().ok().and_then(zip_time) {
			options = options.last_modified_time(modified);
		}

		let name = self.unique_name(entry_name(relative));
		self.zip.start_file(name.as_str(), options)?;
		let bytes = io::copy(&mut file, &mut self.zip)?;
		debug!(entry = %name, bytes, "added file to archive");
		self.names.insert(name);
		Ok(())
	}

	/// Appends `~2`, `~3`, ... to the file stem until `name` is unused.
	fn unique_name(&self, name: String) -> String {
		if !self.names.contains(&name) {
			return name;
		}
		let file_start = name.rfind('/').map_or(0, |i| i + 1);
		let split = match name[file_start..].rfind('.') {
			Some(dot) if dot > 0 => file_start + dot,
			_ => name.len(),
		};
		let (stem, extension) = name.split_at(split);
		let mut n = 2;
		loop {
			let candidate = format!("{stem}~{n}{extension}");
			if !self.names.contains(&candidate) {
				return candidate;
			}
			n += 1;
		}
	}

	fn finish(self) -> Result<W> {
		Ok(self.zip.finish()?)
	}
}

/// Joins the components of a relative path with `/`.
fn entry_name(path: &Path) -> String {
	path.components()
		.filter_map(|c| match c {
			Component::Normal(part) => Some(component_name(part)),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join("/")
}

/// A path component as UTF-8, with invalid bytes written as `%XX`.
fn component_name(part: &OsStr) -> Cow<'_, str> {
	if let Some(part) = part.to_str() {
		return Cow::Borrowed(part);
	}
	let mut name = String::new();
	let mut bytes = part.as_encoded_bytes();
	while !bytes.is_empty() {
		match std::str::from_utf8(bytes) {
			Ok(valid) => {
				name.push_str(valid);
				break;
			}
			Err(err) => {
				let (valid, rest) = bytes.split_at(err.valid_up_to());
				name.push_str(std::str::from_utf8(valid).unwrap_or_default());
				let invalid = err.error_len().unwrap_or(rest.len());
				for byte in &rest[..invalid] {
					name.push_str(&format!("%{byte:02X}"));
				}
				bytes = &rest[invalid..];
			}
		}
	}
	Cow::Owned(name)
}

/// Local wall-clock time in zip's 1980–2107 range, or `None` outside it.
fn zip_time(time: SystemTime) -> Option<DateTime> {
	let local = ChronoDateTime::<Local>::from(time);
	let year = u16::try_from(local.year()).ok()?;
	DateTime::from_date_and_time(
		year,
		local.month() as u8,
		local.day() as u8,
		local.hour() as u8,
		local.minute() as u8,
		local.second() as u8,
	)
	.ok()
}
