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

/// All possible binary operations
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    AndAnd,
    OrOr,
}

impl BinaryOperation {
    /// Is this a logical (boolean-valued) operation, rather than arithmetic?
    pub fn is_logical(self) -> bool {
        !matches!(
            self,
            BinaryOperation::Add
                | BinaryOperation::Sub
                | BinaryOperation::Mul
                | BinaryOperation::Div
                | BinaryOperation::Mod
        )
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Mod => "%",
            BinaryOperation::Lt => "<",
            BinaryOperation::Lte => "<=",
            BinaryOperation::Gt => ">",
            BinaryOperation::Gte => ">=",
            BinaryOperation::Eq => "==",
            BinaryOperation::Neq => "!=",
            BinaryOperation::AndAnd => "&&",
            BinaryOperation::OrOr => "||",
        };

        write!(f, "{s}")
    }
}

/// Representation of a binary operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOpNode {
    /// Left-hand side
    pub l: Box<ExpressionNode>,

    /// Right-hand side
    pub r: Box<ExpressionNode>,

    /// The operation to perform
    pub op: BinaryOperation,

    /// The text span in the original file that this node represents. Used for error messages.
    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl BinaryOpNode {
    pub fn new(l: ExpressionNode, r: ExpressionNode, op: BinaryOperation) -> Self {
        Self {
            l: Box::new(l),
            r: Box::new(r),
            op,
            span: None,
            required_registers: 0,
        }
    }

    /// Which operand should be evaluated first.
    pub fn evaluation_order(&self) -> EvaluationOrder {
        EvaluationOrder::for_operands(self.l.required_registers(), self.r.required_registers())
    }
}

annotated_node!(BinaryOpNode);
spanned_node!(BinaryOpNode);

impl AstNodeTrait for BinaryOpNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_binary_op(self)
    }
}

impl Display for BinaryOpNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.l, self.op, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_logical() {
        assert!(!BinaryOperation::Add.is_logical());
        assert!(!BinaryOperation::Mod.is_logical());
        assert!(BinaryOperation::Lte.is_logical());
        assert!(BinaryOperation::OrOr.is_logical());
    }

    #[test]
    fn test_evaluation_order() {
        let mut node = BinaryOpNode::new(
            ExpressionNode::from(1),
            ExpressionNode::from(2),
            BinaryOperation::Mul,
        );
        assert_eq!(node.evaluation_order(), EvaluationOrder::LeftFirst);

        node.r.set_required_registers(2);
        assert_eq!(node.evaluation_order(), EvaluationOrder::RightFirst);
    }

    #[test]
    fn test_display() {
        let node = BinaryOpNode::new(
            ExpressionNode::from(1),
            ExpressionNode::from(2),
            BinaryOperation::Lte,
        );

        assert_eq!(node.to_string(), "1 <= 2");
    }
}
