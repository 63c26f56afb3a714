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
        statement_node::StatementNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a `while` loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileNode {
    pub condition: ExpressionNode,
    pub body: Box<StatementNode>,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl WhileNode {
    pub fn new(condition: ExpressionNode, body: StatementNode, span: Option<Span>) -> Self {
        Self {
            condition,
            body: Box::new(body),
            span,
            required_registers: 0,
        }
    }
}

annotated_node!(WhileNode);
spanned_node!(WhileNode);

impl AstNodeTrait for WhileNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_while(self)
    }
}

impl Display for WhileNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.body)
    }
}
