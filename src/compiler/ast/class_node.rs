use std::{
    fmt,
    fmt::{Display, Formatter},
};

use ic_rs_core::RegisterSize;
use ic_rs_errors::{span::Span, Result};
use itertools::Itertools;
use lazy_format::lazy_format;
use ustr::Ustr;

use crate::compiler::{
    ast::{
        ast_node::{annotated_node, spanned_node, AstNodeTrait},
        field_node::FieldNode,
        method_node::MethodNode,
    },
    codegen::tree_walker::TreeWalker,
};

/// A node representing a class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// The name of the class
    pub name: Ustr,

    /// The name of the class this one `extends`, if any
    pub super_class: Option<Ustr>,

    pub fields: Vec<FieldNode>,

    pub methods: Vec<MethodNode>,

    pub span: Option<Span>,

    pub required_registers: RegisterSize,
}

impl ClassNode {
    pub fn new<T>(name: T, fields: Vec<FieldNode>, methods: Vec<MethodNode>) -> Self
    where
        T: Into<Ustr>,
    {
        Self {
            name: name.into(),
            super_class: None,
            fields,
            methods,
            span: None,
            required_registers: 0,
        }
    }
}

annotated_node!(ClassNode);
spanned_node!(ClassNode);

impl AstNodeTrait for ClassNode {
    fn visit(&mut self, tree_walker: &mut impl TreeWalker) -> Result<()> {
        tree_walker.visit_class(self)
    }
}

impl Display for ClassNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let extends = lazy_format!(
            if let Some(s) = &self.super_class => (" extends {}", s)
            else ("")
        );
        let members = self
            .fields
            .iter()
            .map(|x| x.to_string())
            .chain(self.methods.iter().map(|x| x.to_string()))
            .join(" ");

        write!(f, "class {}{} {{ {} }}", self.name, extends, members)
    }
}
