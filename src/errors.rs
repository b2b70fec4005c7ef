//! VarLang error handling
//!
//! Caller-visible failures. Problems the tree converter can recover from are
//! not errors: they travel as diagnostics (see [`crate::diagnostics`]).

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::syntax::Span;

// ============================================================================
// SOURCE CONTEXT
// ============================================================================

/// Named source text used to attach snippets to errors.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Source context for a line typed at the prompt.
    pub fn line(line_number: usize, content: impl Into<String>) -> Self {
        Self::new(format!("<line:{}>", line_number), content)
    }

    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum VarlangError {
    /// The parsing engine rejected the line outright.
    #[error("syntax error: {message}")]
    #[diagnostic(code(varlang::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("here")]
        span: SourceSpan,
    },

    /// The line parsed but its top-level expression produced no AST.
    #[error("no program: `{found}` could not be converted to an expression")]
    #[diagnostic(
        code(varlang::no_program),
        help("this construct is not supported by the reader yet")
    )]
    NoProgram {
        found: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("unsupported")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(code(varlang::io))]
    Io(#[from] std::io::Error),
}

impl VarlangError {
    pub fn syntax(source: &SourceContext, message: impl Into<String>, span: Span) -> Self {
        VarlangError::Syntax {
            message: message.into(),
            src: source.to_named_source(),
            span: span.into(),
        }
    }

    pub fn no_program(source: &SourceContext, found: impl Into<String>, span: Span) -> Self {
        VarlangError::NoProgram {
            found: found.into(),
            src: source.to_named_source(),
            span: span.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, VarlangError::Syntax { .. })
    }

    pub fn is_no_program(&self) -> bool {
        matches!(self, VarlangError::NoProgram { .. })
    }
}
