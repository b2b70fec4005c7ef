//! Syntax module for VarLang
//!
//! Everything between raw source text and the concrete parse tree: the pest
//! grammar, the closed set of rule identities, and the tree the converter walks.

use serde::{Deserialize, Serialize};

pub mod parser;
pub mod rule;
pub mod tree;

pub use parser::parse_tree;
pub use rule::RuleKind;
pub use tree::ParseTree;

/// Represents a span in the source code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}
