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

/// A parenthesized expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBlockNode {
    pub expr: Box<ExpressionNode>,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl ExpressionBlockNode {
    pub fn new(expr: ExpressionNode) -> Self {
        Self {
            expr: Box::new(expr),
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(ExpressionBlockNode);
spanned_node!(ExpressionBlockNode);

impl AstNodeTrait for ExpressionBlockNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_expression_block(self)
    }
}

impl Display for ExpressionBlockNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
