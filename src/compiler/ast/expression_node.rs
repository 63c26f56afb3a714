use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        ast_node::{AnnotatedNode, AstNodeTrait, SpannedNode},
        binary_op_node::BinaryOpNode,
        call_node::CallNode,
        expression_block_node::ExpressionBlockNode,
        index_node::IndexNode,
        length_node::LengthNode,
        literal_node::{Literal, LiteralNode},
        new_array_node::NewArrayNode,
        new_class_node::NewClassNode,
        this_node::ThisNode,
        unary_op_node::UnaryOpNode,
        var_node::VarNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A wrapper node for anything that can be considered an expression
/// (i.e. an operation that returns a value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionNode {
    BinaryOp(BinaryOpNode),
    Call(CallNode),
    ExpressionBlock(ExpressionBlockNode),
    Index(IndexNode),
    Length(LengthNode),
    Literal(LiteralNode),
    NewArray(NewArrayNode),
    NewClass(NewClassNode),
    This(ThisNode),
    UnaryOp(UnaryOpNode),
    Var(VarNode),
}

impl ExpressionNode {
    /// Is this expression something that can be assigned to?
    pub fn is_location(&self) -> bool {
        matches!(self, ExpressionNode::Var(_) | ExpressionNode::Index(_))
    }
}

/// A convenience helper to get the first `span` we can find in a list of nodes.
/// Returns a default if no spans are found.
///
/// # Arguments
/// `nodes` - A reference to a slice of Expression nodes.
pub fn first_span(nodes: &[&ExpressionNode]) -> Span {
    nodes
        .iter()
        .find_map(|node| node.span())
        .unwrap_or_else(|| Span::new(0, 0..0))
}

macro_rules! delegated_traits {
    ( $( $x:path ),+ ) => {
        impl AstNodeTrait for ExpressionNode {
            fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
                match self {
                $(
                    $x(y) => y.visit(tree_walker),
                )*
                }
            }
        }

        impl AnnotatedNode for ExpressionNode {
            fn required_registers(&self) -> RegisterSize {
                match self {
                $(
                    $x(y) => y.required_registers,
                )*
                }
            }

            fn set_required_registers(&mut self, registers: RegisterSize) {
                match self {
                $(
                    $x(y) => y.required_registers = registers,
                )*
                }
            }
        }

        impl Display for ExpressionNode {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                match self {
                $(
                    $x(y) => write!(f, "{}", y),
                )*
                }
            }
        }

        impl SpannedNode for ExpressionNode {
            fn span(&self) -> Option<Span> {
                match self {
                    $(
                        $x(y) => y.span,
                    )*
                }
            }
        }
    };
}

delegated_traits!(
    ExpressionNode::BinaryOp,
    ExpressionNode::Call,
    ExpressionNode::ExpressionBlock,
    ExpressionNode::Index,
    ExpressionNode::Length,
    ExpressionNode::Literal,
    ExpressionNode::NewArray,
    ExpressionNode::NewClass,
    ExpressionNode::This,
    ExpressionNode::UnaryOp,
    ExpressionNode::Var
);

impl From<BinaryOpNode> for ExpressionNode {
    fn from(node: BinaryOpNode) -> Self {
        Self::BinaryOp(node)
    }
}

impl From<CallNode> for ExpressionNode {
    fn from(node: CallNode) -> Self {
        Self::Call(node)
    }
}

impl From<ExpressionBlockNode> for ExpressionNode {
    fn from(node: ExpressionBlockNode) -> Self {
        Self::ExpressionBlock(node)
    }
}

impl From<IndexNode> for ExpressionNode {
    fn from(node: IndexNode) -> Self {
        Self::Index(node)
    }
}

impl From<LengthNode> for ExpressionNode {
    fn from(node: LengthNode) -> Self {
        Self::Length(node)
    }
}

impl From<LiteralNode> for ExpressionNode {
    fn from(node: LiteralNode) -> Self {
        Self::Literal(node)
    }
}

impl From<NewArrayNode> for ExpressionNode {
    fn from(node: NewArrayNode) -> Self {
        Self::NewArray(node)
    }
}

impl From<NewClassNode> for ExpressionNode {
    fn from(node: NewClassNode) -> Self {
        Self::NewClass(node)
    }
}

impl From<ThisNode> for ExpressionNode {
    fn from(node: ThisNode) -> Self {
        Self::This(node)
    }
}

impl From<UnaryOpNode> for ExpressionNode {
    fn from(node: UnaryOpNode) -> Self {
        Self::UnaryOp(node)
    }
}

impl From<VarNode> for ExpressionNode {
    fn from(node: VarNode) -> Self {
        Self::Var(node)
    }
}

impl From<i32> for ExpressionNode {
    fn from(value: i32) -> Self {
        Self::Literal(LiteralNode::new(Literal::Int(value)))
    }
}

impl From<bool> for ExpressionNode {
    fn from(value: bool) -> Self {
        Self::Literal(LiteralNode::new(Literal::Bool(value)))
    }
}

impl From<&str> for ExpressionNode {
    fn from(value: &str) -> Self {
        Self::Literal(LiteralNode::new(Literal::String(String::from(value))))
    }
}
