//! Defines the command-line arguments for the VarLang reader.
//!
//! Uses `clap` with its "derive" feature for a declarative argument structure.

use clap::{ArgAction, Parser, ValueEnum};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "varlang",
    version,
    about = "Read VarLang arithmetic and print its abstract syntax tree."
)]
pub struct VarlangArgs {
    /// Expression to read. Without it, lines are read from standard input.
    pub expr: Option<String>,

    /// Also print the concrete parse tree.
    #[arg(long)]
    pub tree: bool,

    /// How to print the resulting program.
    #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
    pub format: OutputFormat,

    /// Where conversion diagnostics go.
    #[arg(long, value_enum, default_value_t = DiagnosticMode::Print)]
    pub diagnostics: DiagnosticMode,

    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line `Debug` rendering.
    Debug,
    /// Indented `Debug` rendering.
    Pretty,
    /// JSON.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticMode {
    /// Print alongside the output, highlighted.
    Print,
    /// Send to the log as warnings.
    Log,
}
