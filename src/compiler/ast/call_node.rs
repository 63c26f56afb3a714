use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::{evaluation_order::argument_order, RegisterSize};
use ic_rs_errors::{span::Span, Result};
use itertools::Itertools;
use ustr::Ustr;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AnnotatedNode, AstNodeTrait},
        expression_node::ExpressionNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// How the method being called is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallKind {
    /// `Class.method(...)`
    Static { class_name: Ustr },

    /// `method(...)` or `expr.method(...)`, dispatched through the receiver
    Virtual {
        /// The explicit receiver, if one was written
        receiver: Option<Box<ExpressionNode>>,
    },
}

/// Representation of a method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    pub kind: CallKind,

    /// The name of the method being called
    pub name: Ustr,

    /// The list of arguments being passed.
    pub arguments: Vec<ExpressionNode>,

    /// The text span in the original file that this node represents. Used for error messages.
    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl CallNode {
    pub fn new_static<T, U>(class_name: T, name: U, arguments: Vec<ExpressionNode>) -> Self
    where
        T: Into<Ustr>,
        U: Into<Ustr>,
    {
        Self {
            kind: CallKind::Static {
                class_name: class_name.into(),
            },
            name: name.into(),
            arguments,
            span: None,
            required_registers: 0,
        }
    }

    pub fn new_virtual<T>(
        receiver: Option<ExpressionNode>,
        name: T,
        arguments: Vec<ExpressionNode>,
    ) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            kind: CallKind::Virtual {
                receiver: receiver.map(Box::new),
            },
            name: name.into(),
            arguments,
            span: None,
            required_registers: 0,
        }
    }

    /// Get the explicit receiver of a virtual call, if there is one.
    pub fn receiver(&self) -> Option<&ExpressionNode> {
        match &self.kind {
            CallKind::Virtual {
                receiver: Some(receiver),
            } => Some(receiver.as_ref()),
            _ => None,
        }
    }

    /// Is this a virtual call through an explicit receiver?
    #[inline]
    pub fn is_external(&self) -> bool {
        self.receiver().is_some()
    }

    /// The register requirements of everything evaluated before the call is made:
    /// each argument in order, followed by the explicit receiver if there is one.
    pub fn operand_requirements(&self) -> Vec<RegisterSize> {
        self.arguments
            .iter()
            .chain(self.receiver())
            .map(|arg| arg.required_registers())
            .collect()
    }

    /// The order to evaluate the operands in, as indices into
    /// [`operand_requirements`](Self::operand_requirements). Heaviest first.
    pub fn evaluation_order(&self) -> Vec<usize> {
        argument_order(&self.operand_requirements())
    }
}

annotated_node!(CallNode);
spanned_node!(CallNode);

impl AstNodeTrait for CallNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_call(self)
    }
}

impl Display for CallNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let args = self.arguments.iter().map(|a| a.to_string()).join(", ");

        match &self.kind {
            CallKind::Static { class_name } => {
                write!(f, "{}.{}({})", class_name, self.name, args)
            }
            CallKind::Virtual {
                receiver: Some(receiver),
            } => write!(f, "{}.{}({})", receiver, self.name, args),
            CallKind::Virtual { receiver: None } => write!(f, "{}({})", self.name, args),
        }
    }
}
