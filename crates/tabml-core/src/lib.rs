//! Compiler for an indentation-based HTML template language.
//!
//! ```text
//! div.container
//!   p#greeting Hello world
//! ```
//!
//! becomes
//!
//! ```text
//! <div class="container">
//! 	<p id="greeting">Hello world</p>
//! </div>
//! ```
//!
//! The pipeline is [`normalize`] (raw text to canonical tab-indented text)
//! followed by [`compile_template`] (tokenize, expand inline blocks, parse,
//! emit).

mod ast;
mod diagnostic;
mod elements;
mod emit;
mod error;
mod lexer;
mod normalize;
mod parser;
mod scan;

pub use ast::{AttrItem, AttrList, Line, LineTag};
pub use diagnostic::{
    Diagnostic, DiagnosticSeverity, W_ATTR_UNCLOSED, W_ATTR_UNRESOLVED, W_DEPTH_JUMP,
};
pub use emit::{HtmlEmitOptions, emit_html, emit_html_with_options};
pub use error::CompileError;
pub use lexer::{expand_inline_blocks, tokenize};
pub use normalize::{
    IndentStyle, content_lines, detect_indent_style, infer_indent_width, normalize,
};
pub use parser::{ParseResult, check_depth, parse, parse_line};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject lines more than one level deeper than the line before them.
    pub strict_depth: bool,
    pub emit: HtmlEmitOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiles canonical text to HTML with default options.
pub fn compile_template(canonical: &str) -> Result<String, CompileError> {
    compile_template_with_options(canonical, &CompileOptions::default()).map(|out| out.html)
}

pub fn compile_template_with_options(
    canonical: &str,
    options: &CompileOptions,
) -> Result<Compiled, CompileError> {
    let parsed = parse(canonical);
    if parsed.lines.is_empty() {
        return Err(CompileError::EmptyInput);
    }
    if options.strict_depth {
        check_depth(&parsed.lines)?;
    }
    let html = emit_html_with_options(&parsed.lines, &options.emit);
    Ok(Compiled {
        html,
        diagnostics: parsed.diagnostics,
    })
}

/// Normalizes raw text and compiles it.
pub fn render(raw: &str, options: &CompileOptions) -> Result<Compiled, CompileError> {
    compile_template_with_options(&normalize(raw), options)
}
