//! AST module for VarLang
//!
//! The abstract syntax tree handed to an evaluator. Concrete syntax such as
//! parentheses and operator glyphs is gone by the time a node is built here.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};

pub mod builder;

pub use builder::{build_program, TreeToExpConverter};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A VarLang expression.
///
/// Arithmetic variants are n-ary: `1+2+3` is a single `Add` holding three
/// operands. Any operand count is structurally legal, including zero.
///
/// # Examples
///
/// ```rust
/// use varlang::ast::Exp;
/// let sum = Exp::Add(vec![Exp::Const(3), Exp::Var("x".into())]);
/// assert_eq!(sum.operands().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exp {
    Const(i64),
    Var(String),
    Add(Vec<Exp>),
    Sub(Vec<Exp>),
    Mult(Vec<Exp>),
    Div(Vec<Exp>),
    /// Placeholder for a node that could not be understood.
    Error,
}

/// One parsed line: exactly one top-level expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    exp: Exp,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Exp {
    /// Operands of an arithmetic expression; empty for every other variant.
    pub fn operands(&self) -> &[Exp] {
        match self {
            Exp::Add(operands) | Exp::Sub(operands) | Exp::Mult(operands) | Exp::Div(operands) => {
                operands
            }
            Exp::Const(_) | Exp::Var(_) | Exp::Error => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Exp::Error)
    }

    /// True if this node or any node below it is `Exp::Error`.
    pub fn contains_error(&self) -> bool {
        self.is_error() || self.operands().iter().any(Exp::contains_error)
    }

    /// Returns the type name of this node (for diagnostics and debugging).
    pub fn type_name(&self) -> &'static str {
        match self {
            Exp::Const(_) => "Const",
            Exp::Var(_) => "Var",
            Exp::Add(_) => "Add",
            Exp::Sub(_) => "Sub",
            Exp::Mult(_) => "Mult",
            Exp::Div(_) => "Div",
            Exp::Error => "Error",
        }
    }
}

impl Program {
    pub fn new(exp: Exp) -> Self {
        Self { exp }
    }

    pub fn exp(&self) -> &Exp {
        &self.exp
    }

    pub fn into_exp(self) -> Exp {
        self.exp
    }
}
