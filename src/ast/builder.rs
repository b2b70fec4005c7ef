//! # AST Builder
//!
//! Converts a concrete [`ParseTree`] into [`Exp`] nodes and wraps the result
//! in a [`Program`].
//!
//! Every conversion returns `Option<Exp>`. `None` means the node has no AST
//! meaning (punctuation) or is not handled (the `let` form); it is dropped by
//! [`TreeToExpConverter::convert_children`], the only place absences are
//! filtered. Malformed terminals and parser error nodes become [`Exp::Error`]
//! instead, so they stay visible to the evaluator.
//!
//! The walk never fails. Anything it cannot handle is reported to the
//! [`DiagnosticSink`] and the conversion of sibling subtrees continues.

use crate::ast::{Exp, Program};
use crate::diagnostics::{ConversionDiagnostic, DiagnosticSink};
use crate::errors::{SourceContext, VarlangError};
use crate::syntax::{ParseTree, RuleKind, Span};

/// Tokens that belong to the concrete syntax only.
const CONCRETE_SYNTAX_TOKENS: [&str; 6] = ["(", ")", "+", "-", "*", "/"];

// ============================================================================
// PUBLIC API
// ============================================================================

/// Assemble a [`Program`] from a tree rooted at the `program` rule.
///
/// The program holds a single expression: the first child of the root. If
/// that child converts to nothing there is no program.
pub fn build_program(
    tree: &ParseTree,
    source: &SourceContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<Program, VarlangError> {
    let Some(RuleKind::Program) = tree.rule_kind() else {
        return Err(VarlangError::no_program(source, tree.text(), tree.span()));
    };
    let Some(body) = tree.children().first() else {
        return Err(VarlangError::no_program(source, "", tree.span()));
    };

    TreeToExpConverter::new(sink)
        .convert(body)
        .map(Program::new)
        .ok_or_else(|| VarlangError::no_program(source, body.text(), body.span()))
}

/// Walks a concrete parse tree and builds expressions.
pub struct TreeToExpConverter<'a> {
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> TreeToExpConverter<'a> {
    pub fn new(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Convert one node. `None` means the node contributes nothing to the AST.
    pub fn convert(&mut self, tree: &ParseTree) -> Option<Exp> {
        match tree {
            ParseTree::Rule {
                rule,
                children,
                span,
            } => self.visit_rule(*rule, children, *span),
            ParseTree::Terminal { text, span } => self.visit_terminal(text, *span),
            ParseTree::Error { text, span } => self.visit_error_node(text, *span),
        }
    }

    fn visit_rule(&mut self, rule: RuleKind, children: &[ParseTree], span: Span) -> Option<Exp> {
        tracing::trace!(%rule, children = children.len(), "visit rule");
        match rule {
            // The grammar gives both rules exactly one child.
            RuleKind::Exp | RuleKind::NumExp => self.convert_children(children).into_iter().next(),
            RuleKind::VarExp => match children.first() {
                Some(name) => Some(Exp::Var(name.text())),
                None => self.unhandled(rule, span),
            },
            RuleKind::AddExp => Some(Exp::Add(self.convert_children(children))),
            RuleKind::SubExp => Some(Exp::Sub(self.convert_children(children))),
            RuleKind::MultExp => Some(Exp::Mult(self.convert_children(children))),
            RuleKind::DivExp => Some(Exp::Div(self.convert_children(children))),
            // TODO: decide the binding structure of `let` before converting it.
            RuleKind::LetExp => self.unhandled(rule, span),
            RuleKind::Program => self.unhandled(rule, span),
        }
    }

    fn visit_terminal(&mut self, text: &str, span: Span) -> Option<Exp> {
        if is_concrete_syntax_token(text) {
            return None;
        }
        if let Ok(value) = text.parse::<i64>() {
            return Some(Exp::Const(value));
        }
        self.sink.emit(ConversionDiagnostic::IllegalTerminal {
            text: text.to_string(),
            span,
        });
        Some(Exp::Error)
    }

    fn visit_error_node(&mut self, text: &str, span: Span) -> Option<Exp> {
        self.sink.emit(ConversionDiagnostic::ParserErrorNode {
            text: text.to_string(),
            span,
        });
        Some(Exp::Error)
    }

    /// Convert children left to right, keeping only those that produced an
    /// expression.
    fn convert_children(&mut self, children: &[ParseTree]) -> Vec<Exp> {
        children
            .iter()
            .filter_map(|child| self.convert(child))
            .collect()
    }

    fn unhandled(&mut self, rule: RuleKind, span: Span) -> Option<Exp> {
        self.sink
            .emit(ConversionDiagnostic::UnhandledRule { rule, span });
        None
    }
}

fn is_concrete_syntax_token(text: &str) -> bool {
    CONCRETE_SYNTAX_TOKENS.contains(&text)
}
