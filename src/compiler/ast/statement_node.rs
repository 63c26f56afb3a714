use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::{
    ast::{
        assignment_node::AssignmentNode,
        ast_node::{AnnotatedNode, AstNodeTrait, SpannedNode},
        block_node::BlockNode,
        break_node::BreakNode,
        call_node::CallNode,
        call_statement_node::CallStatementNode,
        continue_node::ContinueNode,
        if_node::IfNode,
        local_var_node::LocalVarNode,
        return_node::ReturnNode,
        while_node::WhileNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A wrapper node for anything that can appear in a method body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementNode {
    Assignment(AssignmentNode),
    Block(BlockNode),
    Break(BreakNode),
    CallStatement(CallStatementNode),
    Continue(ContinueNode),
    If(IfNode),
    LocalVar(LocalVarNode),
    Return(ReturnNode),
    While(WhileNode),
}

macro_rules! delegated_traits {
    ( $( $x:path ),+ ) => {
        impl AstNodeTrait for StatementNode {
            fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
                match self {
                $(
                    $x(y) => y.visit(tree_walker),
                )*
                }
            }
        }

        impl AnnotatedNode for StatementNode {
            fn required_registers(&self) -> RegisterSize {
                match self {
                $(
                    $x(y) => y.required_registers(),
                )*
                }
            }

            fn set_required_registers(&mut self, registers: RegisterSize) {
                match self {
                $(
                    $x(y) => y.set_required_registers(registers),
                )*
                }
            }
        }

        impl SpannedNode for StatementNode {
            fn span(&self) -> Option<Span> {
                match self {
                $(
                    $x(y) => y.span(),
                )*
                }
            }
        }

        impl Display for StatementNode {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                match self {
                $(
                    $x(y) => write!(f, "{}", y),
                )*
                }
            }
        }
    };
}

delegated_traits!(
    StatementNode::Assignment,
    StatementNode::Block,
    StatementNode::Break,
    StatementNode::CallStatement,
    StatementNode::Continue,
    StatementNode::If,
    StatementNode::LocalVar,
    StatementNode::Return,
    StatementNode::While
);

impl From<AssignmentNode> for StatementNode {
    fn from(node: AssignmentNode) -> Self {
        Self::Assignment(node)
    }
}

impl From<BlockNode> for StatementNode {
    fn from(node: BlockNode) -> Self {
        Self::Block(node)
    }
}

impl From<BreakNode> for StatementNode {
    fn from(node: BreakNode) -> Self {
        Self::Break(node)
    }
}

impl From<CallStatementNode> for StatementNode {
    fn from(node: CallStatementNode) -> Self {
        Self::CallStatement(node)
    }
}

impl From<CallNode> for StatementNode {
    fn from(node: CallNode) -> Self {
        Self::CallStatement(CallStatementNode::new(node))
    }
}

impl From<ContinueNode> for StatementNode {
    fn from(node: ContinueNode) -> Self {
        Self::Continue(node)
    }
}

impl From<IfNode> for StatementNode {
    fn from(node: IfNode) -> Self {
        Self::If(node)
    }
}

impl From<LocalVarNode> for StatementNode {
    fn from(node: LocalVarNode) -> Self {
        Self::LocalVar(node)
    }
}

impl From<ReturnNode> for StatementNode {
    fn from(node: ReturnNode) -> Self {
        Self::Return(node)
    }
}

impl From<WhileNode> for StatementNode {
    fn from(node: WhileNode) -> Self {
        Self::While(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ast::expression_node::ExpressionNode;

    #[test]
    fn test_from_call_node_wraps_in_a_call_statement() {
        let call = CallNode::new_virtual(None, "run", vec![]);
        let clone = call.clone();

        assert_eq!(
            StatementNode::from(call),
            StatementNode::CallStatement(CallStatementNode::new(clone))
        );
    }

    #[test]
    fn test_annotation_delegates_to_the_wrapped_node() {
        let mut node = StatementNode::from(ReturnNode::new(Some(ExpressionNode::from(1))));

        node.set_required_registers(4);

        assert_eq!(node.required_registers(), 4);
        match node {
            StatementNode::Return(r) => assert_eq!(r.required_registers, 4),
            x => panic!("unexpected node {x:?}"),
        }
    }
}
