use assetmin::{minify, FileType, MinifyError};
use std::{env, io, io::{Read, Write}, process::exit};

fn main() {
	pretty_env_logger::init();

	let args: Vec<String> = env::args().skip(1).collect();
	if args.len() != 1 {
		eprintln!("Usage: minifier <file_type> < input > output");
		exit(exitcode::USAGE);
	}

	let file_type: FileType = args[0].parse().unwrap_or_else(|err: MinifyError| {
		eprintln!("Error: {}", err);
		exit(err.exit_code());
	});

	let mut stdin = String::new();
	io::stdin().lock().read_to_string(&mut stdin).unwrap_or_else(|err| {
		eprintln!("Unable to read from stdin! Additional info below:\n{}", err);
		exit(exitcode::IOERR);
	});

	let minified = minify(&stdin, file_type).unwrap_or_else(|err| {
		eprintln!("Unable to minify {}! Additional info below:\n{}", file_type.label(), err);
		exit(err.exit_code());
	});

	io::stdout().lock().write_all(minified.as_bytes()).unwrap_or_else(|err| {
		eprintln!("Unable to write to stdout! Additional info below:\n{}", err);
		exit(exitcode::IOERR);
	});
}
