use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::Result;
use itertools::Itertools;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, AstNodeTrait},
        class_node::ClassNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a full program. This is the top-level translation unit.
#[derive(Debug, PartialEq, Clone, Default, Eq)]
pub struct ProgramNode {
    /// The list of classes declared in this program
    pub classes: Vec<ClassNode>,

    pub required_registers: RegisterSize,
}

impl ProgramNode {
    pub fn new(classes: Vec<ClassNode>) -> Self {
        Self {
            classes,
            required_registers: 0,
        }
    }
}

annotated_node!(ProgramNode);

impl AstNodeTrait for ProgramNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_program(self)
    }
}

impl Display for ProgramNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = self.classes.iter().map(|a| a.to_string()).join("\n");

        write!(f, "{s}")
    }
}
