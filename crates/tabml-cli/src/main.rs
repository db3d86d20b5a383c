mod encoding;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tabml_core::{
    CompileOptions, Diagnostic, HtmlEmitOptions, content_lines, detect_indent_style,
    infer_indent_width, normalize, render,
};

use crate::encoding::Encoding;

/// Compile indentation-based templates to HTML.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Template file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file, overwritten if present (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoding of the template and of the HTML output
    #[arg(long, value_enum, default_value_t = Encoding::Ascii)]
    encoding: Encoding,

    /// Reject lines indented more than one level past the line before them
    #[arg(long)]
    strict: bool,

    /// Indent output with N spaces per level instead of a tab
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Print the canonical tab-indented text instead of HTML
    #[arg(long)]
    normalize_only: bool,

    /// Report diagnostics on stderr
    #[arg(long, value_enum, value_name = "MODE")]
    diagnostics: Option<DiagnosticsMode>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DiagnosticsMode {
    Json,
    Pretty,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let bytes = read_input(cli.input.as_deref())?;
    let source = cli
        .encoding
        .decode(&bytes)
        .with_context(|| format!("failed to decode input as {:?}", cli.encoding))?;

    let output = if cli.normalize_only {
        let lines = content_lines(&source);
        log::info!(
            "indentation: {:?}, width {}",
            detect_indent_style(&lines),
            infer_indent_width(&lines)
        );
        let mut canonical = normalize(&source);
        if !canonical.is_empty() {
            canonical.push('\n');
        }
        canonical
    } else {
        let options = CompileOptions {
            strict_depth: cli.strict,
            emit: HtmlEmitOptions {
                indent: cli
                    .indent
                    .map_or_else(|| "\t".to_string(), |width| " ".repeat(width)),
            },
        };
        let compiled = render(&source, &options).context("failed to compile template")?;
        for diagnostic in &compiled.diagnostics {
            log::warn!("{}: {}", diagnostic.code, diagnostic.message);
        }
        if let Some(mode) = cli.diagnostics {
            emit_diagnostics(&compiled.diagnostics, mode)?;
        }
        compiled.html
    };

    let encoded = cli
        .encoding
        .encode(&output)
        .with_context(|| format!("failed to encode output as {:?}", cli.encoding))?;
    write_output(cli.output.as_deref(), &encoded)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to write stdout")
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'a str,
    severity: &'a str,
    message: &'a str,
}

fn emit_diagnostics(diagnostics: &[Diagnostic], mode: DiagnosticsMode) -> Result<()> {
    match mode {
        DiagnosticsMode::Json => {
            let items: Vec<JsonDiagnostic<'_>> = diagnostics
                .iter()
                .map(|diag| JsonDiagnostic {
                    code: diag.code,
                    severity: diag.severity.label(),
                    message: &diag.message,
                })
                .collect();
            eprintln!("{}", serde_json::to_string_pretty(&items)?);
        }
        DiagnosticsMode::Pretty => {
            for diag in diagnostics {
                eprintln!("{} {} {}", diag.severity.label(), diag.code, diag.message);
            }
        }
    }
    Ok(())
}
