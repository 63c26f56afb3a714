use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::ast_node::{annotated_node, spanned_node, AstNodeTrait},
    codegen::tree_walker::TreeWalker,
};

/// The literal values of the IC language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i32),
    Bool(bool),
    String(String),
    Null,
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{i}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Null => write!(f, "null"),
        }
    }
}

/// A node representing a literal value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNode {
    pub value: Literal,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl LiteralNode {
    pub fn new(value: Literal) -> Self {
        Self {
            value,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(LiteralNode);
spanned_node!(LiteralNode);

impl AstNodeTrait for LiteralNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_literal(self)
    }
}

impl Display for LiteralNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
