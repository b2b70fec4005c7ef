//! The VarLang Command-Line Interface.
//!
//! Reads one expression from the command line, or lines from standard input
//! after a `$ ` prompt, and prints the program each one converts to.

use std::io::{self, IsTerminal, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::Level;

use crate::ast::build_program;
use crate::cli::args::{DiagnosticMode, VarlangArgs};
use crate::diagnostics::{DiagnosticBuffer, TracingSink};
use crate::errors::{SourceContext, VarlangError};
use crate::reader::Reader;
use crate::syntax::parse_tree;

pub mod args;
pub mod output;

/// Installs the stderr log subscriber. Repeated calls are ignored.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

/// The main entry point for the CLI.
pub fn run(args: &VarlangArgs) -> miette::Result<()> {
    let color = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color);

    match &args.expr {
        Some(expr) => {
            let source = SourceContext::new("<expr>", expr.as_str());
            convert_line(&source, args, &mut stdout)?;
            Ok(())
        }
        None => run_prompt(args, &mut stdout),
    }
}

/// Prompt loop over standard input. A bad line is reported and skipped.
fn run_prompt(args: &VarlangArgs, out: &mut StandardStream) -> miette::Result<()> {
    let stdin = io::stdin();
    let mut reader = Reader::new(stdin.lock(), io::stdout());

    while let Some(source) = reader.read_next_program()? {
        if source.content.trim().is_empty() {
            continue;
        }
        if let Err(error) = convert_line(&source, args, out) {
            out.flush().map_err(VarlangError::from)?;
            output::print_error(error);
        }
    }
    writeln!(out).map_err(VarlangError::from)?;
    Ok(())
}

/// Parse, convert and print one line according to `args`.
pub fn convert_line(
    source: &SourceContext,
    args: &VarlangArgs,
    out: &mut impl WriteColor,
) -> Result<(), VarlangError> {
    let tree = parse_tree(source)?;
    if args.tree {
        output::print_tree(out, &tree)?;
    }

    let result = match args.diagnostics {
        DiagnosticMode::Print => {
            let mut diagnostics = DiagnosticBuffer::new();
            let result = build_program(&tree, source, &mut diagnostics);
            output::print_diagnostics(out, diagnostics.as_slice())?;
            result
        }
        DiagnosticMode::Log => {
            let mut sink = TracingSink;
            build_program(&tree, source, &mut sink)
        }
    };

    output::print_program(out, &result?, args.format)?;
    Ok(())
}
