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

/// All possible unary operations
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub enum UnaryOperation {
    /// Arithmetic negation
    Negate,

    /// Logical not
    Bang,
}

impl Display for UnaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOperation::Negate => "-",
            UnaryOperation::Bang => "!",
        };

        write!(f, "{s}")
    }
}

/// Representation of a unary operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOpNode {
    pub expr: Box<ExpressionNode>,

    pub op: UnaryOperation,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl UnaryOpNode {
    pub fn new(expr: ExpressionNode, op: UnaryOperation) -> Self {
        Self {
            expr: Box::new(expr),
            op,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(UnaryOpNode);
spanned_node!(UnaryOpNode);

impl AstNodeTrait for UnaryOpNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_unary_op(self)
    }
}

impl Display for UnaryOpNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.expr)
    }
}
