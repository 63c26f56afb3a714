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

/// A node representing an `if` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfNode {
    pub condition: ExpressionNode,
    pub body: Box<StatementNode>,
    pub else_clause: Box<Option<StatementNode>>,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl IfNode {
    pub fn new(
        condition: ExpressionNode,
        body: StatementNode,
        else_clause: Option<StatementNode>,
        span: Option<Span>,
    ) -> Self {
        Self {
            condition,
            body: Box::new(body),
            else_clause: Box::new(else_clause),
            span,
            required_registers: 0,
        }
    }
}

annotated_node!(IfNode);
spanned_node!(IfNode);

impl AstNodeTrait for IfNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_if(self)
    }
}

impl Display for IfNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.body)?;

        if let Some(clause) = &*self.else_clause {
            write!(f, " else {clause}")?;
        }

        Ok(())
    }
}
