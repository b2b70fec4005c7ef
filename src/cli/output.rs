//! Handles all user-facing output for the CLI.
//!
//! Programs, parse trees and diagnostics are written to any `WriteColor`, so
//! tests can capture them in a `termcolor::Buffer`.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::ast::Program;
use crate::cli::args::OutputFormat;
use crate::diagnostics::ConversionDiagnostic;
use crate::errors::VarlangError;
use crate::syntax::ParseTree;

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Renders a program in the requested format.
pub fn format_program(program: &Program, format: OutputFormat) -> io::Result<String> {
    Ok(match format {
        OutputFormat::Debug => format!("{:?}", program.exp()),
        OutputFormat::Pretty => format!("{:#?}", program.exp()),
        OutputFormat::Json => serde_json::to_string(program)?,
    })
}

pub fn print_program(
    writer: &mut impl WriteColor,
    program: &Program,
    format: OutputFormat,
) -> io::Result<()> {
    let rendered = format_program(program, format)?;
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    writeln!(writer, "{}", rendered)?;
    writer.reset()
}

pub fn print_tree(writer: &mut impl WriteColor, tree: &ParseTree) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(writer, "parse tree:")?;
    writer.reset()?;
    writeln!(writer, " {}", tree)
}

pub fn print_diagnostics(
    writer: &mut impl WriteColor,
    diagnostics: &[ConversionDiagnostic],
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(writer, "warning")?;
        writer.reset()?;
        let span = diagnostic.span();
        writeln!(writer, " [at {}-{}]: {}", span.start, span.end, diagnostic)?;
    }
    Ok(())
}

/// Prints an error to standard error through miette's report handler.
pub fn print_error(error: VarlangError) {
    eprintln!("{:?}", miette::Report::new(error));
}
