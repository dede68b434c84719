// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::args::AppArgs;
use dirpack::{status, Archiver};
use std::process::ExitCode;

/// Packs the requested directory, printing the diagnostic (if any) and the
/// status line.
pub fn pack(args: AppArgs) -> ExitCode {
	let result = Archiver::new()
		.output_dir(args.output_dir)
		.pack(&args.path, &args.name);
	if let Err(err) = &result {
		println!("{err}");
	}
	println!("{}", status::describe_result(&result));
	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(_) => ExitCode::FAILURE,
	}
}
