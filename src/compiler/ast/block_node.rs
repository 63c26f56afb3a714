use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use itertools::Itertools;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        statement_node::StatementNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a `{ ... }` statement block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub body: Vec<StatementNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl BlockNode {
    pub fn new(body: Vec<StatementNode>) -> Self {
        Self {
            body,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(BlockNode);
spanned_node!(BlockNode);

impl AstNodeTrait for BlockNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_block(self)
    }
}

impl Display for BlockNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.body.iter().map(|item| item.to_string()).join(" ");

        write!(f, "{{ {s} }}")
    }
}
