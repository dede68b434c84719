// SPDX-License-Identifier: Apache-2.0 OR MIT
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Pack a directory into a timestamped zip archive
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct AppArgs {
	/// The directory to pack
	#[clap(short, long, value_parser)]
	pub path: PathBuf,
	/// The name of the backup, embedded in the archive's file name
	#[clap(short, long, value_parser)]
	pub name: String,
	/// The directory to write the archive to
	#[clap(short, long, value_parser, default_value = ".")]
	pub output_dir: PathBuf,
	/// Log more details to stderr (repeat for more)
	#[clap(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}
