// SPDX-License-Identifier: Apache-2.0 OR MIT
mod app;

use self::app::args::AppArgs;
use clap::Parser;
use color_eyre::{
	eyre::{eyre, WrapErr},
	Result,
};
use std::process::ExitCode;
use tracing::Level;

fn main() -> Result<ExitCode> {
	color_eyre::install().wrap_err("failed to install color-eyre handler")?;
	let args = AppArgs::parse();

	let level = match args.verbose {
		0 => Level::ERROR,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.try_init()
		.map_err(|err| eyre!("failed to install tracing subscriber: {}", err))?;
	tracing::debug!("parsed arguments: {:?}", args);

	Ok(app::pack::pack(args))
}
