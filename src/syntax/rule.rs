//! Grammar rule identities.
//!
//! `RuleKind` is the closed set of grammar productions the tree converter
//! knows about. Indices follow the order of the rules in `grammar.pest`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the grammar production that produced a parse-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Program,
    Exp,
    VarExp,
    NumExp,
    AddExp,
    SubExp,
    MultExp,
    DivExp,
    LetExp,
}

impl RuleKind {
    /// All rule identities in grammar-file order.
    pub const ALL: [RuleKind; 9] = [
        RuleKind::Program,
        RuleKind::Exp,
        RuleKind::VarExp,
        RuleKind::NumExp,
        RuleKind::AddExp,
        RuleKind::SubExp,
        RuleKind::MultExp,
        RuleKind::DivExp,
        RuleKind::LetExp,
    ];

    /// The rule's position in the grammar file.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a rule identity by its grammar-file position.
    pub fn from_index(index: usize) -> Option<RuleKind> {
        Self::ALL.get(index).copied()
    }

    /// The rule name as written in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Program => "program",
            RuleKind::Exp => "exp",
            RuleKind::VarExp => "varexp",
            RuleKind::NumExp => "numexp",
            RuleKind::AddExp => "addexp",
            RuleKind::SubExp => "subexp",
            RuleKind::MultExp => "multexp",
            RuleKind::DivExp => "divexp",
            RuleKind::LetExp => "letexp",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
