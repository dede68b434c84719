// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::{io::Error as IoError, path::PathBuf};
use thiserror::Error as ThisError;
use walkdir::Error as WalkError;
use zip::result::ZipError;

#[derive(Debug, ThisError)]
pub enum Error {
	#[error("No such directory: {}", .0.display())]
	NotFound(PathBuf),
	#[error("Not a directory: {}", .0.display())]
	NotADirectory(PathBuf),
	#[error("Error creating zip archive: {0}")]
	Io(#[from] IoError),
	#[error("Error creating zip archive: {0}")]
	Walk(#[from] WalkError),
	#[error("Error creating zip archive: {0}")]
	Zip(#[from] ZipError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The source path does not exist.
	NotFound,
	/// The source path exists but is not a directory.
	NotADirectory,
	/// Creating or writing the archive failed.
	WriteFailure,
}

impl Error {
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::NotFound(_) => ErrorKind::NotFound,
			Self::NotADirectory(_) => ErrorKind::NotADirectory,
			Self::Io(_) | Self::Walk(_) | Self::Zip(_) => ErrorKind::WriteFailure,
		}
	}
}

impl PartialEq for Error {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::NotFound(path), Self::NotFound(other_path))
			| (Self::NotADirectory(path), Self::NotADirectory(other_path)) => path == other_path,
			(Self::Io(io_err), Self::Io(other_io_err)) => {
				io_err.kind() == other_io_err.kind()
					&& io_err.raw_os_error() == other_io_err.raw_os_error()
					&& io_err.to_string() == other_io_err.to_string()
			}
			(Self::Walk(walk_err), Self::Walk(other_walk_err)) => {
				walk_err.path() == other_walk_err.path()
					&& walk_err.depth() == other_walk_err.depth()
					&& walk_err.to_string() == other_walk_err.to_string()
			}
			(Self::Zip(zip_err), Self::Zip(other_zip_err)) => {
				zip_err.to_string() == other_zip_err.to_string()
			}
			_ => false,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
	use super::{Error, ErrorKind};
	use std::{io, path::PathBuf};

	#[test]
	fn messages() {
		assert_eq!(
			Error::NotFound(PathBuf::from("/no/such/dir")).to_string(),
			"No such directory: /no/such/dir"
		);
		assert_eq!(
			Error::NotADirectory(PathBuf::from("/tmp/afile.txt")).to_string(),
			"Not a directory: /tmp/afile.txt"
		);
		let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
		assert_eq!(err.to_string(), "Error creating zip archive: denied");
		assert_eq!(err.kind(), ErrorKind::WriteFailure);
	}
}
