use crate::MinifyError;
use minify_html::{minify, Cfg};

/// Minify a document with [`minify_html`].
///
/// Inline scripts and styles are passed through as-is, and the doctype is
/// kept intact.
///
/// # Errors
///
/// Fails only if the minifier hands back invalid UTF-8.
pub fn minify_html(input: &str) -> Result<String, MinifyError> {
	let mut cfg = Cfg::new();
	cfg.do_not_minify_doctype = true;
	Ok(String::from_utf8(minify(input.as_bytes(), &cfg))?)
}
