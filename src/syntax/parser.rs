//! VarLang Parser
//!
//! Runs the pest grammar over one line of source and lowers the resulting
//! pairs into a [`ParseTree`]. The parser is purely syntactic: it decides what
//! is a rule node, a terminal token or an error node, and nothing else.

use pest::{error::Error, iterators::Pair, Parser};
use pest_derive::Parser;

use super::{ParseTree, RuleKind, Span};
use crate::errors::{SourceContext, VarlangError};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct VarlangParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse one line of source into a concrete parse tree rooted at `program`.
pub fn parse_tree(source: &SourceContext) -> Result<ParseTree, VarlangError> {
    let mut pairs = VarlangParser::parse(Rule::program, &source.content)
        .map_err(|e| convert_parse_error(e, source))?;

    let program = pairs
        .next()
        .ok_or_else(|| VarlangError::syntax(source, "empty parse", Span::default()))?;

    lower(program).ok_or_else(|| {
        VarlangError::syntax(source, "program rule produced no tree", Span::default())
    })
}

// ============================================================================
// LOWERING
// ============================================================================

/// How a pest rule shows up in the concrete parse tree.
enum Lowering {
    Rule(RuleKind),
    Token,
    Unknown,
    /// End of input and silent rules: never part of the tree.
    Omitted,
}

fn lowering(rule: Rule) -> Lowering {
    match rule {
        Rule::program => Lowering::Rule(RuleKind::Program),
        Rule::exp => Lowering::Rule(RuleKind::Exp),
        Rule::varexp => Lowering::Rule(RuleKind::VarExp),
        Rule::numexp => Lowering::Rule(RuleKind::NumExp),
        Rule::addexp => Lowering::Rule(RuleKind::AddExp),
        Rule::subexp => Lowering::Rule(RuleKind::SubExp),
        Rule::multexp => Lowering::Rule(RuleKind::MultExp),
        Rule::divexp => Lowering::Rule(RuleKind::DivExp),
        Rule::letexp => Lowering::Rule(RuleKind::LetExp),

        Rule::number
        | Rule::identifier
        | Rule::let_kw
        | Rule::lparen
        | Rule::rparen
        | Rule::plus
        | Rule::minus
        | Rule::times
        | Rule::divide => Lowering::Token,

        Rule::unknown => Lowering::Unknown,

        Rule::EOI
        | Rule::WHITESPACE
        | Rule::sum
        | Rule::product
        | Rule::atom
        | Rule::binding
        | Rule::token_char => Lowering::Omitted,
    }
}

fn lower(pair: Pair<Rule>) -> Option<ParseTree> {
    let span = get_span(&pair);
    match lowering(pair.as_rule()) {
        Lowering::Rule(rule) => Some(ParseTree::Rule {
            rule,
            children: pair.into_inner().filter_map(lower).collect(),
            span,
        }),
        Lowering::Token => Some(ParseTree::Terminal {
            text: pair.as_str().to_string(),
            span,
        }),
        Lowering::Unknown => Some(ParseTree::Error {
            text: pair.as_str().to_string(),
            span,
        }),
        Lowering::Omitted => None,
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

fn get_span(pair: &Pair<Rule>) -> Span {
    Span {
        start: pair.as_span().start(),
        end: pair.as_span().end(),
    }
}

fn convert_parse_error(error: Error<Rule>, source: &SourceContext) -> VarlangError {
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => Span {
            start: pos,
            end: pos,
        },
        pest::error::InputLocation::Span((start, end)) => Span { start, end },
    };

    let message = match &error.variant {
        pest::error::ErrorVariant::ParsingError { positives, .. } if positives.is_empty() => {
            "unexpected input".to_string()
        }
        pest::error::ErrorVariant::ParsingError { positives, .. } => {
            let expected: Vec<String> = positives.iter().map(describe_rule).collect();
            format!("expected {}", expected.join(", "))
        }
        pest::error::ErrorVariant::CustomError { message } => message.clone(),
    };

    VarlangError::syntax(source, message, span)
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of input".to_string(),
        Rule::lparen => "'('".to_string(),
        Rule::rparen => "')'".to_string(),
        Rule::plus => "'+'".to_string(),
        Rule::minus => "'-'".to_string(),
        Rule::times => "'*'".to_string(),
        Rule::divide => "'/'".to_string(),
        other => format!("{:?}", other),
    }
}
