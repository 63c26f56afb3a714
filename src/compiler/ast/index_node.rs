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

/// An array element location, e.g. `arr[i + 1]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNode {
    pub array: Box<ExpressionNode>,

    pub index: Box<ExpressionNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl IndexNode {
    pub fn new(array: ExpressionNode, index: ExpressionNode) -> Self {
        Self {
            array: Box::new(array),
            index: Box::new(index),
            span: None,
            required_registers: 0,
        }
    }

    /// Which of the array and index should be evaluated first
    pub fn evaluation_order(&self) -> EvaluationOrder {
        EvaluationOrder::for_operands(
            self.array.required_registers(),
            self.index.required_registers(),
        )
    }
}

annotated_node!(IndexNode);
spanned_node!(IndexNode);

impl AstNodeTrait for IndexNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_index(self)
    }
}

impl Display for IndexNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.array, self.index)
    }
}
