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
        expression_node::ExpressionNode,
        type_node::TypeNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a local variable declaration, with optional initializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVarNode {
    pub type_: TypeNode,

    pub name: Ustr,

    /// The initial value, if one was written
    pub value: Option<ExpressionNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl LocalVarNode {
    pub fn new<T>(type_: TypeNode, name: T, value: Option<ExpressionNode>) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            type_,
            name: name.into(),
            value,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(LocalVarNode);
spanned_node!(LocalVarNode);

impl AstNodeTrait for LocalVarNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_local_var(self)
    }
}

impl Display for LocalVarNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} = {};", self.type_, self.name, value),
            None => write!(f, "{} {};", self.type_, self.name),
        }
    }
}
