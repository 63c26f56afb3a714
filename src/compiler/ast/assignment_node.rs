use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::{evaluation_order::EvaluationOrder, RegisterSize};
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AnnotatedNode, AstNodeTrait},
        expression_node::ExpressionNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing an assignment statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentNode {
    /// left-hand side. The location being assigned to.
    pub lhs: Box<ExpressionNode>,

    /// right-hand side
    pub rhs: Box<ExpressionNode>,

    /// The text span in the original file that this node represents. Used for
    /// error messages.
    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl AssignmentNode {
    pub fn new(lhs: ExpressionNode, rhs: ExpressionNode) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span: None,
            required_registers: 0,
        }
    }

    /// Which side should be evaluated first. "Left" here is the value (`rhs`),
    /// as the target location is only needed once the value is ready.
    pub fn evaluation_order(&self) -> EvaluationOrder {
        EvaluationOrder::for_operands(
            self.rhs.required_registers(),
            self.lhs.required_registers(),
        )
    }
}

annotated_node!(AssignmentNode);
spanned_node!(AssignmentNode);

impl AstNodeTrait for AssignmentNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_assignment(self)
    }
}

impl Display for AssignmentNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.lhs, self.rhs)
    }
}
