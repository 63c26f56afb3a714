use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        expression_node::ExpressionNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a `return` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnNode {
    /// The value being returned. `None` for a bare `return;`
    pub value: Option<ExpressionNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl ReturnNode {
    pub fn new(value: Option<ExpressionNode>) -> Self {
        Self {
            value,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(ReturnNode);
spanned_node!(ReturnNode);

impl AstNodeTrait for ReturnNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_return(self)
    }
}

impl Display for ReturnNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {value};"),
            None => write!(f, "return;"),
        }
    }
}
