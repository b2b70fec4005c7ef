//! Concrete parse tree.
//!
//! The tree keeps every token the parser saw, parentheses and operator glyphs
//! included. Rule nodes carry a [`RuleKind`]; leaves are either terminal tokens
//! or error nodes for input the grammar could only classify as unknown.

use serde::{Deserialize, Serialize};

use super::{RuleKind, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseTree {
    Rule {
        rule: RuleKind,
        children: Vec<ParseTree>,
        span: Span,
    },
    Terminal {
        text: String,
        span: Span,
    },
    Error {
        text: String,
        span: Span,
    },
}

impl ParseTree {
    pub fn rule(rule: RuleKind, children: Vec<ParseTree>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Span::new(first.span().start, last.span().end),
            _ => Span::default(),
        };
        ParseTree::Rule {
            rule,
            children,
            span,
        }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        let text = text.into();
        let span = Span::new(0, text.len());
        ParseTree::Terminal { text, span }
    }

    pub fn error(text: impl Into<String>) -> Self {
        let text = text.into();
        let span = Span::new(0, text.len());
        ParseTree::Error { text, span }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseTree::Rule { span, .. }
            | ParseTree::Terminal { span, .. }
            | ParseTree::Error { span, .. } => *span,
        }
    }

    /// The rule identity, if this is a rule node.
    pub fn rule_kind(&self) -> Option<RuleKind> {
        match self {
            ParseTree::Rule { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Rule { children, .. } => children,
            _ => &[],
        }
    }

    /// Source text covered by this node: the token text for leaves, the
    /// concatenated leaf text for rule nodes.
    pub fn text(&self) -> String {
        match self {
            ParseTree::Terminal { text, .. } | ParseTree::Error { text, .. } => text.clone(),
            ParseTree::Rule { children, .. } => children.iter().map(ParseTree::text).collect(),
        }
    }

    /// LISP-style dump of the tree, e.g. `(program (exp (numexp 3)))`.
    pub fn to_string_tree(&self) -> String {
        match self {
            ParseTree::Terminal { text, .. } | ParseTree::Error { text, .. } => text.clone(),
            ParseTree::Rule { rule, children, .. } if children.is_empty() => rule.name().to_string(),
            ParseTree::Rule { rule, children, .. } => {
                let inner = children
                    .iter()
                    .map(ParseTree::to_string_tree)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("({} {})", rule.name(), inner)
            }
        }
    }
}

impl std::fmt::Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_tree())
    }
}
