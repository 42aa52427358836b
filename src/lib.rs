#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![warn(clippy::all)]

//! Minify a single CSS, JavaScript or HTML file.
//!
//! The actual minification is delegated to [`lightningcss`], [`oxc`] and
//! [`minify_html`]; this crate only picks the right one for a [`FileType`].

mod css;
mod html;
mod js;

pub use css::minify_css;
pub use html::minify_html;
pub use js::minify_js;

use log::debug;
use std::{fmt, fs, io, path::{Path, PathBuf}, str::FromStr, string::FromUtf8Error};
use thiserror::Error;

/// The kinds of file that can be minified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
	Css,
	Js,
	Html,
}

impl FileType {
	pub const ALL: [Self; 3] = [Self::Css, Self::Js, Self::Html];

	/// The tag accepted on the command line.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Css => "css",
			Self::Js => "js",
			Self::Html => "html",
		}
	}

	/// Upper-case name, as shown in the completion message.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Css => "CSS",
			Self::Js => "JS",
			Self::Html => "HTML",
		}
	}
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FileType {
	type Err = MinifyError;

	fn from_str(tag: &str) -> Result<Self, Self::Err> {
		Self::ALL.iter()
			.copied()
			.find(|file_type| file_type.as_str() == tag)
			.ok_or_else(|| MinifyError::UnknownFileType(tag.to_string()))
	}
}

#[derive(Debug, Error)]
pub enum MinifyError {
	#[error("Unknown file type: {0}")]
	UnknownFileType(String),

	#[error("Unable to read {path:?}: {source}")]
	Read {
		path: PathBuf,
		source: io::Error,
	},

	#[error("Unable to write {path:?}: {source}")]
	Write {
		path: PathBuf,
		source: io::Error,
	},

	#[error("Unable to minify CSS: {0}")]
	Css(String),

	#[error("Unable to minify JS: {0}")]
	Js(String),

	#[error("Minifier produced invalid UTF-8: {0}")]
	Utf8(#[from] FromUtf8Error),
}

impl MinifyError {
	/// Process exit status for this error.
	#[must_use]
	pub const fn exit_code(&self) -> exitcode::ExitCode {
		match self {
			Self::UnknownFileType(_) => 1,
			Self::Read { .. } => exitcode::NOINPUT,
			Self::Write { .. } => exitcode::CANTCREAT,
			Self::Css(_) | Self::Js(_) => exitcode::DATAERR,
			Self::Utf8(_) => exitcode::SOFTWARE,
		}
	}
}

/// Minify `content` with the minifier for `file_type`.
///
/// # Errors
///
/// Fails when the underlying minifier rejects the input.
pub fn minify(content: &str, file_type: FileType) -> Result<String, MinifyError> {
	debug!("Minifying {} bytes of {}", content.len(), file_type.label());

	let minified = match file_type {
		FileType::Css => minify_css(content)?,
		FileType::Js => minify_js(content)?,
		FileType::Html => minify_html(content)?,
	};

	debug!("{} minified to {} bytes", file_type.label(), minified.len());
	Ok(minified)
}

/// Read `input`, minify it and write the result to `output`.
///
/// `output` is created or truncated only once minification has succeeded.
///
/// # Errors
///
/// Fails if `input` can't be read, `output` can't be written, or the
/// minifier rejects the input.
pub fn minify_file(input: &Path, output: &Path, file_type: FileType) -> Result<(), MinifyError> {
	let content = fs::read_to_string(input).map_err(|source| MinifyError::Read {
		path: input.to_path_buf(),
		source,
	})?;

	let minified = minify(&content, file_type)?;

	fs::write(output, minified).map_err(|source| MinifyError::Write {
		path: output.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::{minify, minify_file, FileType, MinifyError};
	use std::fs;

	#[test]
	fn parses_known_tags() {
		assert_eq!("css".parse::<FileType>().unwrap(), FileType::Css);
		assert_eq!("js".parse::<FileType>().unwrap(), FileType::Js);
		assert_eq!("html".parse::<FileType>().unwrap(), FileType::Html);
	}

	#[test]
	fn rejects_unknown_tags() {
		for tag in &["xml", "CSS", " js", ""] {
			match tag.parse::<FileType>() {
				Err(MinifyError::UnknownFileType(found)) => assert_eq!(&found, tag),
				other => panic!("expected unknown file type for {:?}, got {:?}", tag, other),
			}
		}
	}

	#[test]
	fn unknown_tag_message() {
		let err = "xml".parse::<FileType>().unwrap_err();
		assert_eq!(err.to_string(), "Unknown file type: xml");
		assert_eq!(err.exit_code(), 1);
	}

	#[test]
	fn labels_are_upper_case() {
		for file_type in &FileType::ALL {
			assert_eq!(file_type.label(), file_type.as_str().to_uppercase());
			assert_eq!(file_type.to_string(), file_type.as_str());
		}
	}

	#[test]
	fn dispatch_shrinks_input() {
		let inputs = [
			(FileType::Css, "body {\n  color: red;\n}\n"),
			(FileType::Js, "function foo() {\n  // answer\n  return 1;\n}\n"),
			(FileType::Html, "<!-- note -->\n<p>\n    Hello   world\n</p>\n"),
		];

		for (file_type, input) in &inputs {
			let output = minify(input, *file_type).unwrap();
			assert!(!output.is_empty(), "{} output was empty", file_type);
			assert!(output.len() < input.len(), "{} output {:?} did not shrink", file_type, output);
		}
	}

	#[test]
	fn minify_file_writes_output() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("style.css");
		let output = dir.path().join("style.min.css");
		fs::write(&input, "body {  color: red;  }").unwrap();

		minify_file(&input, &output, FileType::Css).unwrap();

		let minified = fs::read_to_string(&output).unwrap();
		assert!(minified.contains("body{"));
		assert!(!minified.contains("  "));
	}

	#[test]
	fn minify_file_truncates_existing_output() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("a.css");
		let output = dir.path().join("b.css");
		fs::write(&input, "a { color: blue; }").unwrap();
		fs::write(&output, "x".repeat(4096)).unwrap();

		minify_file(&input, &output, FileType::Css).unwrap();

		assert!(fs::read_to_string(&output).unwrap().len() < 4096);
	}

	#[test]
	fn missing_input_is_a_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("out.js");

		let err = minify_file(&dir.path().join("missing.js"), &output, FileType::Js).unwrap_err();

		assert!(matches!(err, MinifyError::Read { .. }));
		assert_eq!(err.exit_code(), exitcode::NOINPUT);
		assert!(!output.exists());
	}

	#[test]
	fn rejected_input_leaves_output_untouched() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("broken.js");
		let output = dir.path().join("out.js");
		fs::write(&input, "function (").unwrap();

		let err = minify_file(&input, &output, FileType::Js).unwrap_err();

		assert!(matches!(err, MinifyError::Js(_)));
		assert!(!output.exists());
	}
}
