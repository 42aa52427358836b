#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![warn(clippy::all)]

use assetmin::{minify_file, FileType, MinifyError};
use log::debug;
use std::{env, path::PathBuf, process::exit};

fn fail(err: &MinifyError) -> ! {
	match err {
		// Printed to stdout, same as the usage line.
		MinifyError::UnknownFileType(_) => println!("Error: {}", err),
		_ => eprintln!("Error: {}", err),
	}
	exit(err.exit_code());
}

fn main() {
	pretty_env_logger::init();

	let args: Vec<String> = env::args().skip(1).collect();
	if args.len() != 3 {
		println!("Usage: assetmin <input_file> <output_file> <file_type>");
		exit(1);
	}

	let input = PathBuf::from(&args[0]);
	let output = PathBuf::from(&args[1]);
	let file_type: FileType = args[2].parse().unwrap_or_else(|err| fail(&err));

	debug!("Minifying {:?} into {:?} as {}", input, output, file_type);

	minify_file(&input, &output, file_type).unwrap_or_else(|err| fail(&err));

	println!("{} minification complete.", file_type.label());
}
