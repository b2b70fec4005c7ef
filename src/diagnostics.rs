//! Conversion diagnostics.
//!
//! The tree converter never fails: when it meets something it cannot turn into
//! an expression it reports a [`ConversionDiagnostic`] to a [`DiagnosticSink`]
//! and carries on. Sinks only observe; they cannot change what the converter
//! returns.

use thiserror::Error;

use crate::syntax::{RuleKind, Span};

/// Something the converter noticed while walking a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionDiagnostic {
    /// A rule node the converter does not (yet) turn into an expression.
    #[error("conversion error (from parse tree to AST): found unknown/unhandled case {rule}")]
    UnhandledRule { rule: RuleKind, span: Span },

    /// A terminal that is neither punctuation nor an integer literal.
    #[error("illegal terminal {text}")]
    IllegalTerminal { text: String, span: Span },

    /// A node the parser itself flagged as erroneous.
    #[error("parser error node: {text}")]
    ParserErrorNode { text: String, span: Span },
}

impl ConversionDiagnostic {
    pub fn span(&self) -> Span {
        match self {
            ConversionDiagnostic::UnhandledRule { span, .. }
            | ConversionDiagnostic::IllegalTerminal { span, .. }
            | ConversionDiagnostic::ParserErrorNode { span, .. } => *span,
        }
    }
}

/// Receives conversion diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: ConversionDiagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: ConversionDiagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Reports every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: ConversionDiagnostic) {
        let span = diagnostic.span();
        tracing::warn!(start = span.start, end = span.end, "{}", diagnostic);
    }
}

/// Collects diagnostics in order, for tests or for later presentation.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticBuffer {
    diagnostics: Vec<ConversionDiagnostic>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[ConversionDiagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Takes the collected diagnostics, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<ConversionDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn into_vec(self) -> Vec<ConversionDiagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn emit(&mut self, diagnostic: ConversionDiagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
