use std::fmt::Write;

use ic_rs_core::RegisterSize;
use ic_rs_errors::Result;
use tree_walker::TreeWalker;

use crate::compiler::{
    ast::{
        assignment_node::AssignmentNode,
        ast_node::AstNodeTrait,
        binary_op_node::BinaryOpNode,
        block_node::BlockNode,
        break_node::BreakNode,
        call_node::{CallKind, CallNode},
        call_statement_node::CallStatementNode,
        class_node::ClassNode,
        continue_node::ContinueNode,
        expression_block_node::ExpressionBlockNode,
        field_node::FieldNode,
        formal_node::FormalNode,
        if_node::IfNode,
        index_node::IndexNode,
        length_node::LengthNode,
        literal_node::LiteralNode,
        local_var_node::LocalVarNode,
        method_node::{MethodKind, MethodNode},
        new_array_node::NewArrayNode,
        new_class_node::NewClassNode,
        program_node::ProgramNode,
        return_node::ReturnNode,
        this_node::ThisNode,
        type_node::TypeNode,
        unary_op_node::UnaryOpNode,
        var_node::VarNode,
        while_node::WhileNode,
    },
    codegen::tree_walker,
};

/// A tree walker for rendering an AST, along with each node's register
/// requirement, as an indented listing.
///
/// # Examples
/// ```
/// use ic_rs::compiler::{
///     ast::{
///         assignment_node::AssignmentNode,
///         binary_op_node::{BinaryOpNode, BinaryOperation},
///         expression_node::ExpressionNode,
///         var_node::VarNode,
///     },
///     codegen::{tree_printer::TreePrinter, tree_walker::TreeWalker},
/// };
///
/// let mut node = AssignmentNode::new(
///     VarNode::new("x").into(),
///     BinaryOpNode::new(ExpressionNode::from(1), ExpressionNode::from(2), BinaryOperation::Add).into(),
/// );
///
/// let mut printer = TreePrinter::new();
/// printer.visit_assignment(&mut node).expect("error walking the tree");
///
/// assert!(printer.output().starts_with("Assignment [regs: 0]\n"));
/// ```
#[derive(Debug, Default)]
pub struct TreePrinter {
    indent: usize,
    output: String,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listing rendered so far
    #[inline]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the printer, returning the listing
    #[inline]
    pub fn into_output(self) -> String {
        self.output
    }

    fn println_indented(&mut self, output: &str) {
        // Writing to a `String` cannot fail.
        let _ = writeln!(self.output, "{:width$}{}", "", output, width = self.indent);
    }

    /// Run `f` one indentation level deeper. The level is restored even if `f` fails.
    fn indented<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.indent += 2;
        let result = f(self);
        self.indent -= 2;

        result
    }

    fn println_annotated(&mut self, output: &str, registers: RegisterSize) {
        self.println_indented(&format!("{output} [regs: {registers}]"));
    }
}

impl TreeWalker for TreePrinter {
    fn visit_program(&mut self, node: &mut ProgramNode) -> Result<()> {
        self.println_annotated("Program", node.required_registers);
        self.indented(|printer| {
            for class in &mut node.classes {
                class.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_class(&mut self, node: &mut ClassNode) -> Result<()> {
        let header = match node.super_class {
            Some(super_class) => format!("Class {} extends {}", node.name, super_class),
            None => format!("Class {}", node.name),
        };
        self.println_annotated(&header, node.required_registers);
        self.indented(|printer| {
            for field in &mut node.fields {
                field.visit(printer)?;
            }

            for method in &mut node.methods {
                method.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_field(&mut self, node: &mut FieldNode) -> Result<()> {
        self.println_annotated(
            &format!("Field {} {}", node.type_, node.name),
            node.required_registers,
        );

        Ok(())
    }

    fn visit_method(&mut self, node: &mut MethodNode) -> Result<()> {
        let kind = match node.kind {
            MethodKind::Virtual => "Method",
            MethodKind::Static => "Static Method",
            MethodKind::Library => "Library Method",
        };
        self.println_annotated(
            &format!("{kind} {} {}", node.return_type, node.name),
            node.required_registers,
        );
        self.indented(|printer| {
            for formal in &mut node.formals {
                formal.visit(printer)?;
            }

            for statement in &mut node.body {
                statement.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_formal(&mut self, node: &mut FormalNode) -> Result<()> {
        self.println_annotated(
            &format!("Formal {} {}", node.type_, node.name),
            node.required_registers,
        );

        Ok(())
    }

    fn visit_type(&mut self, node: &mut TypeNode) -> Result<()> {
        self.println_annotated(&format!("Type {node}"), node.required_registers);

        Ok(())
    }

    fn visit_assignment(&mut self, node: &mut AssignmentNode) -> Result<()> {
        self.println_annotated("Assignment", node.required_registers);
        self.indented(|printer| {
            node.lhs.visit(printer)?;
            node.rhs.visit(printer)?;

            Ok(())
        })
    }

    fn visit_block(&mut self, node: &mut BlockNode) -> Result<()> {
        self.println_annotated("Block", node.required_registers);
        self.indented(|printer| {
            for statement in &mut node.body {
                statement.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_break(&mut self, node: &mut BreakNode) -> Result<()> {
        self.println_annotated("Break", node.required_registers);

        Ok(())
    }

    fn visit_call_statement(&mut self, node: &mut CallStatementNode) -> Result<()> {
        self.println_annotated("Call Statement", node.required_registers);
        self.indented(|printer| node.call.visit(printer))
    }

    fn visit_continue(&mut self, node: &mut ContinueNode) -> Result<()> {
        self.println_annotated("Continue", node.required_registers);

        Ok(())
    }

    fn visit_if(&mut self, node: &mut IfNode) -> Result<()> {
        self.println_annotated("If", node.required_registers);
        self.indented(|printer| {
            node.condition.visit(printer)?;
            node.body.visit(printer)?;

            if let Some(else_clause) = &mut *node.else_clause {
                printer.println_indented("else:");
                else_clause.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_local_var(&mut self, node: &mut LocalVarNode) -> Result<()> {
        self.println_annotated(
            &format!("Local Var {} {}", node.type_, node.name),
            node.required_registers,
        );

        if let Some(expression) = &mut node.value {
            self.indented(|printer| expression.visit(printer))?;
        }

        Ok(())
    }

    fn visit_return(&mut self, node: &mut ReturnNode) -> Result<()> {
        self.println_annotated("Return", node.required_registers);

        if let Some(expression) = &mut node.value {
            self.indented(|printer| expression.visit(printer))?;
        }

        Ok(())
    }

    fn visit_while(&mut self, node: &mut WhileNode) -> Result<()> {
        self.println_annotated("While", node.required_registers);
        self.indented(|printer| {
            node.condition.visit(printer)?;
            node.body.visit(printer)?;

            Ok(())
        })
    }

    fn visit_binary_op(&mut self, node: &mut BinaryOpNode) -> Result<()> {
        self.println_annotated(&format!("Binary Op {}", node.op), node.required_registers);
        self.indented(|printer| {
            node.l.visit(printer)?;
            node.r.visit(printer)?;

            Ok(())
        })
    }

    fn visit_call(&mut self, node: &mut CallNode) -> Result<()> {
        let header = match &node.kind {
            CallKind::Static { class_name } => format!("Static Call {}.{}", class_name, node.name),
            CallKind::Virtual { .. } => format!("Call {}", node.name),
        };
        self.println_annotated(&header, node.required_registers);
        self.indented(|printer| {
            for argument in &mut node.arguments {
                argument.visit(printer)?;
            }

            if let CallKind::Virtual {
                receiver: Some(receiver),
            } = &mut node.kind
            {
                printer.println_indented("receiver:");
                receiver.visit(printer)?;
            }

            Ok(())
        })
    }

    fn visit_expression_block(&mut self, node: &mut ExpressionBlockNode) -> Result<()> {
        self.println_annotated("Expression Block", node.required_registers);
        self.indented(|printer| node.expr.visit(printer))
    }

    fn visit_index(&mut self, node: &mut IndexNode) -> Result<()> {
        self.println_annotated("Index", node.required_registers);
        self.indented(|printer| {
            node.array.visit(printer)?;
            node.index.visit(printer)?;

            Ok(())
        })
    }

    fn visit_length(&mut self, node: &mut LengthNode) -> Result<()> {
        self.println_annotated("Length", node.required_registers);
        self.indented(|printer| node.array.visit(printer))
    }

    fn visit_literal(&mut self, node: &mut LiteralNode) -> Result<()> {
        self.println_annotated(&format!("Literal {}", node.value), node.required_registers);

        Ok(())
    }

    fn visit_new_array(&mut self, node: &mut NewArrayNode) -> Result<()> {
        self.println_annotated(&format!("New Array {}", node.type_), node.required_registers);
        self.indented(|printer| node.size.visit(printer))
    }

    fn visit_new_class(&mut self, node: &mut NewClassNode) -> Result<()> {
        self.println_annotated(
            &format!("New Class {}", node.class_name),
            node.required_registers,
        );

        Ok(())
    }

    fn visit_this(&mut self, node: &mut ThisNode) -> Result<()> {
        self.println_annotated("This", node.required_registers);

        Ok(())
    }

    fn visit_unary_op(&mut self, node: &mut UnaryOpNode) -> Result<()> {
        self.println_annotated(&format!("Unary Op {}", node.op), node.required_registers);
        self.indented(|printer| node.expr.visit(printer))
    }

    fn visit_var(&mut self, node: &mut VarNode) -> Result<()> {
        self.println_annotated(&format!("Var {}", node.name), node.required_registers);

        if let Some(receiver) = &mut node.receiver {
            self.indented(|printer| receiver.visit(printer))?;
        }

        Ok(())
    }
}
