use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::{RegisterSize, THIS};
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::ast_node::{annotated_node, spanned_node, AstNodeTrait},
    codegen::tree_walker::TreeWalker,
};

/// A reference to the implicit receiver, `this`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ThisNode {
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl ThisNode {
    pub fn new(span: Option<Span>) -> Self {
        Self {
            span,
            required_registers: 0,
        }
    }
}

annotated_node!(ThisNode);
spanned_node!(ThisNode);

impl AstNodeTrait for ThisNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_this(self)
    }
}

impl Display for ThisNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{THIS}")
    }
}
