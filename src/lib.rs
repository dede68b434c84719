// SPDX-License-Identifier: Apache-2.0 OR MIT
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
	clippy::perf,
	clippy::complexity,
	clippy::style,
	clippy::correctness,
	clippy::missing_const_for_fn
)]
#![allow(clippy::tabs_in_doc_comments)]

//! This crate packs a directory into a timestamped, deflate-compressed zip
//! archive for backups.
//!
//! Archives are named `backup_<subject>@<YY-MM-DD_HH.MM.SS>.zip` and hold
//! every regular file under the source directory, stored under its path
//! relative to that directory.
//!
//! # Examples
//!
//! ## Packing a directory
//! ```rust,no_run
//! use dirpack::{status, Archiver};
//!
//! let result = Archiver::new().pack("/tmp/docs", "weekly");
//! if let Err(err) = &result {
//! 	println!("{err}");
//! }
//! println!("{}", status::describe_result(&result));
//! ```
//!
//! ## Telling failures apart
//! ```rust,no_run
//! use dirpack::{Archiver, ErrorKind};
//!
//! match Archiver::new().pack("/no/such/dir", "x") {
//! 	Ok(name) => println!("wrote {name}"),
//! 	Err(err) if err.kind() == ErrorKind::NotFound => println!("check the path"),
//! 	Err(err) => println!("{err}"),
//! }
//! ```
//!
//! # License
//!
//! `dirpack` is licensed under either the MIT license or the Apache License
//! 2.0, at the choice of the user.

/// Packing directories into zip archives.
pub mod archiver;
/// Error handling for packing archives.
pub mod error;
/// Archive file naming.
pub mod name;
/// Status messages for pack results.
pub mod status;

pub use archiver::Archiver;
pub use error::{Error, ErrorKind, Result};
pub use name::ArchiveName;
