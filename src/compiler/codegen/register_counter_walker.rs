use std::fmt::Display;

use ic_rs_core::{
    register_requirement::{combine, merge},
    RegisterSize,
};
use ic_rs_errors::{ic_error, ic_warning, IcError, Result};
use tracing::{debug, instrument, trace};
use ustr::Ustr;

use crate::compiler::{
    ast::{
        assignment_node::AssignmentNode,
        ast_node::{AnnotatedNode, AstNodeTrait},
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
        method_node::MethodNode,
        new_array_node::NewArrayNode,
        new_class_node::NewClassNode,
        program_node::ProgramNode,
        return_node::ReturnNode,
        statement_node::StatementNode,
        this_node::ThisNode,
        type_node::TypeNode,
        unary_op_node::UnaryOpNode,
        var_node::VarNode,
        while_node::WhileNode,
    },
    codegen::tree_walker::{ContextHolder, TreeWalker},
    compilation_context::CompilationContext,
};

/// A tree walker that labels every node with the number of registers needed
/// to evaluate it without spilling (Sethi-Ullman numbering).
///
/// Children are always visited before their parent reads them, so a single
/// pass leaves the whole tree annotated. The program root ends up holding the
/// largest requirement anywhere in the tree.
#[derive(Debug, Default)]
pub struct RegisterCounterWalker {
    /// The compilation context
    context: CompilationContext,

    /// The class whose members are currently being visited
    current_class: Option<Ustr>,
}

impl RegisterCounterWalker {
    pub fn new(context: CompilationContext) -> Self {
        Self {
            context,
            current_class: None,
        }
    }

    /// Store `registers` on the node, and log it.
    fn annotate<N>(node: &mut N, registers: RegisterSize)
    where
        N: AnnotatedNode + Display,
    {
        trace!(registers, "{node}");
        node.set_required_registers(registers);
    }

    /// The largest annotation across a list of statements
    fn max_of(statements: &[StatementNode]) -> RegisterSize {
        statements
            .iter()
            .map(AnnotatedNode::required_registers)
            .max()
            .unwrap_or(0)
    }

    /// Report a method that needs more registers than the target has.
    fn check_spill(&mut self, node: &MethodNode) {
        let config = &self.context.config;

        if !config.spills(node.required_registers) {
            return;
        }

        let available = config.max_registers.unwrap_or_default();
        let name = match self.current_class {
            Some(class) => format!("{class}.{}", node.name),
            None => node.name.to_string(),
        };
        let error: IcError = if config.deny_spills {
            ic_error!(
                node.span,
                "method `{}` requires {} registers, but only {} are available",
                name,
                node.required_registers,
                available
            )
        } else {
            ic_warning!(
                node.span,
                "method `{}` requires {} registers, but only {} are available",
                name,
                node.required_registers,
                available
            )
        };

        self.context.add_error(
            error.with_note("intermediate values will be spilled to memory"),
        );
    }
}

impl ContextHolder for RegisterCounterWalker {
    fn into_context(self) -> CompilationContext {
        self.context
    }
}

impl TreeWalker for RegisterCounterWalker {
    fn visit_program(&mut self, node: &mut ProgramNode) -> Result<()> {
        for class in &mut node.classes {
            class.visit(self)?;
        }

        let registers = node
            .classes
            .iter()
            .map(AnnotatedNode::required_registers)
            .max()
            .unwrap_or(0);

        debug!(registers, "program annotated");
        Self::annotate(node, registers);

        Ok(())
    }

    #[instrument(skip_all, fields(class = %node.name))]
    fn visit_class(&mut self, node: &mut ClassNode) -> Result<()> {
        self.current_class = Some(node.name);

        for field in &mut node.fields {
            field.visit(self)?;
        }

        for method in &mut node.methods {
            method.visit(self)?;
        }

        self.current_class = None;

        let registers = node
            .fields
            .iter()
            .map(AnnotatedNode::required_registers)
            .chain(node.methods.iter().map(AnnotatedNode::required_registers))
            .max()
            .unwrap_or(0);

        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_field(&mut self, node: &mut FieldNode) -> Result<()> {
        node.type_.visit(self)?;
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_method(&mut self, node: &mut MethodNode) -> Result<()> {
        node.return_type.visit(self)?;

        for formal in &mut node.formals {
            formal.visit(self)?;
        }

        for statement in &mut node.body {
            statement.visit(self)?;
        }

        // library methods are implemented by the runtime, whatever they hold
        let registers = if node.is_library() {
            0
        } else {
            Self::max_of(&node.body)
        };
        Self::annotate(node, registers);

        debug!(method = %node.name, registers, "method annotated");

        self.check_spill(node);

        Ok(())
    }

    fn visit_formal(&mut self, node: &mut FormalNode) -> Result<()> {
        node.type_.visit(self)?;
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_type(&mut self, node: &mut TypeNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_assignment(&mut self, node: &mut AssignmentNode) -> Result<()> {
        node.rhs.visit(self)?;
        node.lhs.visit(self)?;

        let registers = combine(
            node.rhs.required_registers(),
            node.lhs.required_registers(),
        );
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_block(&mut self, node: &mut BlockNode) -> Result<()> {
        for statement in &mut node.body {
            statement.visit(self)?;
        }

        let registers = Self::max_of(&node.body);
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_break(&mut self, node: &mut BreakNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_call_statement(&mut self, node: &mut CallStatementNode) -> Result<()> {
        node.call.visit(self)?;

        let registers = node.call.required_registers();
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_continue(&mut self, node: &mut ContinueNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_if(&mut self, node: &mut IfNode) -> Result<()> {
        node.condition.visit(self)?;
        node.body.visit(self)?;

        let mut registers = node
            .condition
            .required_registers()
            .max(node.body.required_registers());

        if let Some(else_clause) = &mut *node.else_clause {
            else_clause.visit(self)?;
            registers = registers.max(else_clause.required_registers());
        }

        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_local_var(&mut self, node: &mut LocalVarNode) -> Result<()> {
        node.type_.visit(self)?;

        let registers = match &mut node.value {
            Some(expression) => {
                expression.visit(self)?;
                expression.required_registers()
            }
            None => 0,
        };

        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_return(&mut self, node: &mut ReturnNode) -> Result<()> {
        let registers = match &mut node.value {
            Some(expression) => {
                expression.visit(self)?;
                expression.required_registers()
            }
            None => 0,
        };

        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_while(&mut self, node: &mut WhileNode) -> Result<()> {
        node.condition.visit(self)?;
        node.body.visit(self)?;

        let registers = node
            .condition
            .required_registers()
            .max(node.body.required_registers());
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_binary_op(&mut self, node: &mut BinaryOpNode) -> Result<()> {
        node.l.visit(self)?;
        node.r.visit(self)?;

        let registers = combine(node.l.required_registers(), node.r.required_registers());
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_call(&mut self, node: &mut CallNode) -> Result<()> {
        for argument in &mut node.arguments {
            argument.visit(self)?;
        }

        if let CallKind::Virtual {
            receiver: Some(receiver),
        } = &mut node.kind
        {
            receiver.visit(self)?;
        }

        let registers = merge(&node.operand_requirements());
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_expression_block(&mut self, node: &mut ExpressionBlockNode) -> Result<()> {
        node.expr.visit(self)?;

        let registers = node.expr.required_registers();
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_index(&mut self, node: &mut IndexNode) -> Result<()> {
        node.array.visit(self)?;
        node.index.visit(self)?;

        let registers = combine(
            node.array.required_registers(),
            node.index.required_registers(),
        );
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_length(&mut self, node: &mut LengthNode) -> Result<()> {
        node.array.visit(self)?;

        let registers = node.array.required_registers();
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_literal(&mut self, node: &mut LiteralNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_new_array(&mut self, node: &mut NewArrayNode) -> Result<()> {
        node.type_.visit(self)?;
        node.size.visit(self)?;

        let registers = node.size.required_registers();
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_new_class(&mut self, node: &mut NewClassNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_this(&mut self, node: &mut ThisNode) -> Result<()> {
        Self::annotate(node, 0);

        Ok(())
    }

    fn visit_unary_op(&mut self, node: &mut UnaryOpNode) -> Result<()> {
        node.expr.visit(self)?;

        let registers = node.expr.required_registers();
        Self::annotate(node, registers);

        Ok(())
    }

    fn visit_var(&mut self, node: &mut VarNode) -> Result<()> {
        let registers = match &mut node.receiver {
            Some(receiver) => {
                receiver.visit(self)?;
                receiver.required_registers()
            }
            None => 0,
        };

        Self::annotate(node, registers);

        Ok(())
    }
}
