//! Shared helpers for the VarLang integration tests.

#![allow(dead_code)]

use varlang::syntax::{parse_tree, ParseTree};
use varlang::{parse_program, ConversionDiagnostic, DiagnosticBuffer, Exp, SourceContext, VarlangError};

/// Result of reading one line: the program (or error) plus every diagnostic.
pub struct Reading {
    pub result: Result<Exp, VarlangError>,
    pub diagnostics: Vec<ConversionDiagnostic>,
}

pub fn read(line: &str) -> Reading {
    let mut buffer = DiagnosticBuffer::new();
    let result = parse_program(&SourceContext::new("test", line), &mut buffer).map(|p| p.into_exp());
    Reading {
        result,
        diagnostics: buffer.into_vec(),
    }
}

/// Reads a line that must convert without diagnostics.
pub fn read_clean(line: &str) -> Exp {
    let reading = read(line);
    assert!(
        reading.diagnostics.is_empty(),
        "unexpected diagnostics for {line:?}: {:?}",
        reading.diagnostics
    );
    reading.result.unwrap()
}

pub fn tree(line: &str) -> ParseTree {
    parse_tree(&SourceContext::new("test", line)).unwrap()
}

pub fn c(value: i64) -> Exp {
    Exp::Const(value)
}

pub fn v(name: &str) -> Exp {
    Exp::Var(name.to_string())
}
