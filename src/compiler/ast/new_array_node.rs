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
        type_node::TypeNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// An array allocation, e.g. `new int[n * 2]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArrayNode {
    /// The type of the array's elements
    pub type_: TypeNode,

    /// The number of elements to allocate
    pub size: Box<ExpressionNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl NewArrayNode {
    pub fn new(type_: TypeNode, size: ExpressionNode) -> Self {
        Self {
            type_,
            size: Box::new(size),
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(NewArrayNode);
spanned_node!(NewArrayNode);

impl AstNodeTrait for NewArrayNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_new_array(self)
    }
}

impl Display for NewArrayNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "new {}[{}]", self.type_, self.size)
    }
}
