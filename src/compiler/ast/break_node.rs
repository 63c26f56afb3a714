use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::ast_node::{annotated_node, spanned_node, AstNodeTrait},
    codegen::tree_walker::TreeWalker,
};

/// Representation of a `break` statement
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BreakNode {
    pub span: Option<Span>,
    pub required_registers: RegisterSize,
}

impl BreakNode {
    pub fn new(span: Option<Span>) -> Self {
        Self {
            span,
            required_registers: 0,
        }
    }
}

annotated_node!(BreakNode);
spanned_node!(BreakNode);

impl AstNodeTrait for BreakNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_break(self)
    }
}

impl Display for BreakNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "break;")
    }
}
