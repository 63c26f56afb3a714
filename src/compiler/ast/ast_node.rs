use auto_impl::auto_impl;
use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};

use crate::compiler::codegen::tree_walker::TreeWalker;

#[auto_impl(&mut)]
pub trait AstNodeTrait {
    /// This is the double-dispatch endpoint for tree-walking
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()>;
}

pub trait SpannedNode {
    /// Return the implementing node's span.
    fn span(&self) -> Option<Span>;
}

/// Nodes that carry a register requirement annotation.
pub trait AnnotatedNode {
    /// The number of registers needed to evaluate this node and everything
    /// beneath it. Zero until a
    /// [`RegisterCounterWalker`](crate::compiler::codegen::register_counter_walker::RegisterCounterWalker)
    /// has visited the node.
    fn required_registers(&self) -> RegisterSize;

    /// Store the computed requirement on the node.
    fn set_required_registers(&mut self, registers: RegisterSize);
}

/// Implement [`AnnotatedNode`] for node structs that store their annotation in
/// a `required_registers` field.
macro_rules! annotated_node {
    ( $( $node:ty ),+ $(,)? ) => {
        $(
            impl $crate::compiler::ast::ast_node::AnnotatedNode for $node {
                #[inline]
                fn required_registers(&self) -> ic_rs_core::RegisterSize {
                    self.required_registers
                }

                #[inline]
                fn set_required_registers(&mut self, registers: ic_rs_core::RegisterSize) {
                    self.required_registers = registers;
                }
            }
        )+
    };
}

/// Implement [`SpannedNode`] for node structs with a `span` field.
macro_rules! spanned_node {
    ( $( $node:ty ),+ $(,)? ) => {
        $(
            impl $crate::compiler::ast::ast_node::SpannedNode for $node {
                #[inline]
                fn span(&self) -> Option<ic_rs_errors::span::Span> {
                    self.span
                }
            }
        )+
    };
}

pub(crate) use annotated_node;
pub(crate) use spanned_node;
