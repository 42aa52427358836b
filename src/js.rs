use crate::MinifyError;
use oxc::{
	allocator::Allocator,
	codegen::{Codegen, CodegenOptions},
	minifier::{Minifier, MinifierOptions},
	parser::Parser,
	span::SourceType,
};

/// Minify a classic (non-module) script with [`oxc`].
///
/// # Errors
///
/// Fails if the script doesn't parse; nothing is emitted for broken input.
pub fn minify_js(input: &str) -> Result<String, MinifyError> {
	let allocator = Allocator::default();
	let mut parsed = Parser::new(&allocator, input, SourceType::cjs()).parse();

	if parsed.panicked || !parsed.errors.is_empty() {
		let message = parsed.errors.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join("; ");
		return Err(MinifyError::Js(message));
	}

	let minified = Minifier::new(MinifierOptions::default()).minify(&allocator, &mut parsed.program);

	let codegen = Codegen::new()
		.with_options(CodegenOptions::minify())
		.with_scoping(minified.scoping)
		.build(&parsed.program);

	Ok(codegen.code)
}
