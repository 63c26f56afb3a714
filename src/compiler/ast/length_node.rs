use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::{RegisterSize, LENGTH};
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        expression_node::ExpressionNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// An array length query, e.g. `arr.length`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthNode {
    pub array: Box<ExpressionNode>,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl LengthNode {
    pub fn new(array: ExpressionNode) -> Self {
        Self {
            array: Box::new(array),
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(LengthNode);
spanned_node!(LengthNode);

impl AstNodeTrait for LengthNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_length(self)
    }
}

impl Display for LengthNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{LENGTH}", self.array)
    }
}
