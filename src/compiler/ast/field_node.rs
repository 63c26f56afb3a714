use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use ustr::Ustr;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        type_node::TypeNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a field declaration within a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub type_: TypeNode,

    pub name: Ustr,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl FieldNode {
    pub fn new<T>(type_: TypeNode, name: T) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            type_,
            name: name.into(),
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(FieldNode);
spanned_node!(FieldNode);

impl AstNodeTrait for FieldNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_field(self)
    }
}

impl Display for FieldNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.type_, self.name)
    }
}
