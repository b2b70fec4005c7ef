//! VarLang reader: one line of arithmetic source in, one abstract syntax tree out.

pub use crate::ast::{Exp, Program};
pub use crate::diagnostics::{ConversionDiagnostic, DiagnosticBuffer, DiagnosticSink, TracingSink};
pub use crate::errors::{SourceContext, VarlangError};
pub use crate::reader::{parse_program, parse_str, Reader};

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod reader;
pub mod syntax;
