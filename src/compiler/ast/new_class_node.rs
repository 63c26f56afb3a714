use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use ustr::Ustr;

use crate::compiler::{
    ast::ast_node::{annotated_node, spanned_node, AstNodeTrait},
    codegen::tree_walker::TreeWalker,
};

/// An object allocation, e.g. `new Node()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassNode {
    pub class_name: Ustr,
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl NewClassNode {
    pub fn new<T>(class_name: T) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            class_name: class_name.into(),
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(NewClassNode);
spanned_node!(NewClassNode);

impl AstNodeTrait for NewClassNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_new_class(self)
    }
}

impl Display for NewClassNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "new {}()", self.class_name)
    }
}
