use crate::MinifyError;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

/// Minify a stylesheet with [`lightningcss`].
///
/// # Errors
///
/// Fails if the stylesheet can't be parsed, minified or printed.
pub fn minify_css(input: &str) -> Result<String, MinifyError> {
	// Invalid rules and declarations are dropped instead of failing the run.
	let parser_options = ParserOptions {
		error_recovery: true,
		..ParserOptions::default()
	};

	let mut stylesheet = StyleSheet::parse(input, parser_options)
		.map_err(|err| MinifyError::Css(err.to_string()))?;

	stylesheet.minify(MinifyOptions::default())
		.map_err(|err| MinifyError::Css(err.to_string()))?;

	let result = stylesheet.to_css(PrinterOptions {
		minify: true,
		..PrinterOptions::default()
	}).map_err(|err| MinifyError::Css(err.to_string()))?;

	Ok(result.code)
}
