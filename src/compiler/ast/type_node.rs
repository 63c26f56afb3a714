use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::{
    ic_type::{IcType, PrimitiveType},
    RegisterSize,
};
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::ast_node::{annotated_node, spanned_node, AstNodeTrait},
    codegen::tree_walker::TreeWalker,
};

/// A reference to a type, as written in a declaration, e.g. `int[][]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNode {
    /// The element type
    pub type_: IcType,

    /// How many array dimensions wrap the element type
    pub dimensions: usize,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl TypeNode {
    pub fn new<T>(type_: T, dimensions: usize) -> Self
    where
        T: Into<IcType>,
    {
        Self {
            type_: type_.into(),
            dimensions,
            span: None,
            required_registers: 0,
        }
    }

    /// A plain `int`
    pub fn int() -> Self {
        Self::new(PrimitiveType::Int, 0)
    }

    /// A plain `void`, for method return types
    pub fn void() -> Self {
        Self::new(PrimitiveType::Void, 0)
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }
}

annotated_node!(TypeNode);
spanned_node!(TypeNode);

impl AstNodeTrait for TypeNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_type(self)
    }
}

impl Display for TypeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_, "[]".repeat(self.dimensions))
    }
}

#[cfg(test)]
mod tests {
    use ustr::ustr;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypeNode::int().to_string(), "int");
        assert_eq!(
            TypeNode::new(IcType::Class(ustr("Node")), 2).to_string(),
            "Node[][]"
        );
    }

    #[test]
    fn test_is_array() {
        assert!(!TypeNode::int().is_array());
        assert!(TypeNode::new(PrimitiveType::Boolean, 1).is_array());
    }
}
