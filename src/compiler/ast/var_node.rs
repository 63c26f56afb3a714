use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use lazy_format::lazy_format;
use ustr::Ustr;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        expression_node::ExpressionNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a variable location: a local, a formal, or a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarNode {
    /// The expression this location is qualified by, as in `expr.name`.
    pub receiver: Option<Box<ExpressionNode>>,

    /// The name of the variable.
    pub name: Ustr,

    /// The span of the string in the original file
    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl VarNode {
    pub fn new(name: &str) -> Self {
        Self {
            receiver: None,
            name: Ustr::from(name),
            span: None,
            required_registers: 0,
        }
    }

    /// Create a location qualified by a receiver expression, e.g. `node.next`
    pub fn new_external(receiver: ExpressionNode, name: &str) -> Self {
        Self {
            receiver: Some(Box::new(receiver)),
            ..Self::new(name)
        }
    }

    /// Is this location accessed through an explicit receiver?
    #[inline]
    pub fn is_external(&self) -> bool {
        self.receiver.is_some()
    }
}

annotated_node!(VarNode);
spanned_node!(VarNode);

impl AstNodeTrait for VarNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_var(self)
    }
}

impl Display for VarNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let fmt = lazy_format!(
            if let Some(e) = &self.receiver => ("{}.{}", e, self.name)
            else ("{}", self.name)
        );

        write!(f, "{fmt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ast::this_node::ThisNode;

    #[test]
    fn test_is_external() {
        let node = VarNode::new("x");
        assert!(!node.is_external());

        let node = VarNode::new_external(ThisNode::new(None).into(), "x");
        assert!(node.is_external());
    }

    #[test]
    fn test_display() {
        assert_eq!(VarNode::new("x").to_string(), "x");
        assert_eq!(
            VarNode::new_external(VarNode::new("list").into(), "head").to_string(),
            "list.head"
        );
    }
}
