use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use itertools::Itertools;
use ustr::Ustr;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        formal_node::FormalNode,
        statement_node::StatementNode,
        type_node::TypeNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// How a method is bound
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MethodKind {
    /// Dispatched through the receiver at runtime
    Virtual,

    /// Resolved statically through the class name
    Static,

    /// Declared in the runtime library. Has no body.
    Library,
}

/// A node representing a method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub kind: MethodKind,

    pub return_type: TypeNode,

    pub name: Ustr,

    pub formals: Vec<FormalNode>,

    pub body: Vec<StatementNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl MethodNode {
    pub fn new<T>(
        kind: MethodKind,
        return_type: TypeNode,
        name: T,
        formals: Vec<FormalNode>,
        body: Vec<StatementNode>,
    ) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            kind,
            return_type,
            name: name.into(),
            formals,
            body,
            span: None,
            required_registers: 0,
        }
    }

    #[inline]
    pub fn is_library(&self) -> bool {
        self.kind == MethodKind::Library
    }
}

annotated_node!(MethodNode);
spanned_node!(MethodNode);

impl AstNodeTrait for MethodNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_method(self)
    }
}

impl Display for MethodNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            MethodKind::Virtual => "",
            MethodKind::Static => "static ",
            MethodKind::Library => "static ",
        };
        let formals = self.formals.iter().map(|x| x.to_string()).join(", ");

        if self.is_library() {
            return write!(f, "{prefix}{} {}({});", self.return_type, self.name, formals);
        }

        let body = self.body.iter().map(|x| x.to_string()).join(" ");

        write!(
            f,
            "{prefix}{} {}({}) {{ {} }}",
            self.return_type, self.name, formals, body
        )
    }
}
