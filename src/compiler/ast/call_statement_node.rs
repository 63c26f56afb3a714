use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, AstNodeTrait, SpannedNode},
        call_node::CallNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A call used as a statement, with its result discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStatementNode {
    pub call: CallNode,

    pub required_registers: RegisterSize,
}

impl CallStatementNode {
    pub fn new(call: CallNode) -> Self {
        Self {
            call,
            required_registers: 0,
        }
    }
}

annotated_node!(CallStatementNode);

impl SpannedNode for CallStatementNode {
    fn span(&self) -> Option<Span> {
        self.call.span
    }
}

impl AstNodeTrait for CallStatementNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_call_statement(self)
    }
}

impl Display for CallStatementNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.call)
    }
}
