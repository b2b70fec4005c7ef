//! VarLang Reader
//!
//! Turns text into a [`Program`]: parse, lower, convert. [`Reader`] adds the
//! line protocol on top: print the `$ ` prompt, read one line, parse it.

use std::io::{BufRead, Write};

use crate::ast::{build_program, Program};
use crate::diagnostics::DiagnosticSink;
use crate::errors::{SourceContext, VarlangError};
use crate::syntax::parse_tree;

pub const PROMPT: &str = "$ ";

/// Parse one line of source into a program.
pub fn parse_program(
    source: &SourceContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<Program, VarlangError> {
    let tree = parse_tree(source)?;
    tracing::debug!(tree = %tree, "parse tree");
    build_program(&tree, source, sink)
}

/// Convenience wrapper around [`parse_program`] for a bare string.
pub fn parse_str(text: &str, sink: &mut dyn DiagnosticSink) -> Result<Program, VarlangError> {
    parse_program(&SourceContext::new("<input>", text), sink)
}

/// Reads programs one line at a time from `input`, prompting on `output`.
pub struct Reader<R, W> {
    input: R,
    output: W,
    line_number: usize,
}

impl<R: BufRead, W: Write> Reader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Prompt and read the next line. `None` at end of input.
    pub fn read_next_program(&mut self) -> Result<Option<SourceContext>, VarlangError> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let text = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(SourceContext::line(self.line_number, text)))
    }

    /// Prompt, read and parse the next line. `None` at end of input.
    pub fn read(&mut self, sink: &mut dyn DiagnosticSink) -> Result<Option<Program>, VarlangError> {
        match self.read_next_program()? {
            Some(source) => parse_program(&source, sink).map(Some),
            None => Ok(None),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
