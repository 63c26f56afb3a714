use ic_rs_errors::Result;

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
        method_node::MethodNode,
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
    compilation_context::CompilationContext,
};

pub trait ContextHolder {
    /// Consume this walker, and return its `Context`.
    ///
    /// This is intended for use after a walker has completed processing, and
    /// you're ready to re-take ownership of the context for the next step.
    fn into_context(self) -> CompilationContext;
}

/// A trait for types that can walk abstract syntax trees
pub trait TreeWalker {
    /// Visit a program node. This is the top-level translation unit.
    fn visit_program(&mut self, node: &mut ProgramNode) -> Result<()>
    where
        Self: Sized,
    {
        for class in &mut node.classes {
            class.visit(self)?;
        }

        Ok(())
    }

    /// Visit a class declaration
    fn visit_class(&mut self, node: &mut ClassNode) -> Result<()>
    where
        Self: Sized,
    {
        for field in &mut node.fields {
            field.visit(self)?;
        }

        for method in &mut node.methods {
            method.visit(self)?;
        }

        Ok(())
    }

    /// Visit a field declaration
    fn visit_field(&mut self, node: &mut FieldNode) -> Result<()>
    where
        Self: Sized,
    {
        node.type_.visit(self)
    }

    /// Visit a method declaration
    fn visit_method(&mut self, node: &mut MethodNode) -> Result<()>
    where
        Self: Sized,
    {
        node.return_type.visit(self)?;

        for formal in &mut node.formals {
            formal.visit(self)?;
        }

        for statement in &mut node.body {
            statement.visit(self)?;
        }

        Ok(())
    }

    /// Visit a formal parameter
    fn visit_formal(&mut self, node: &mut FormalNode) -> Result<()>
    where
        Self: Sized,
    {
        node.type_.visit(self)
    }

    /// Visit a type reference
    fn visit_type(&mut self, _node: &mut TypeNode) -> Result<()> {
        Ok(())
    }

    /// Visit an assignment node
    fn visit_assignment(&mut self, node: &mut AssignmentNode) -> Result<()>
    where
        Self: Sized,
    {
        node.rhs.visit(self)?;
        node.lhs.visit(self)?;

        Ok(())
    }

    /// Visit a code block
    fn visit_block(&mut self, node: &mut BlockNode) -> Result<()>
    where
        Self: Sized,
    {
        for statement in &mut node.body {
            statement.visit(self)?;
        }

        Ok(())
    }

    /// Visit a break node
    fn visit_break(&mut self, _node: &mut BreakNode) -> Result<()> {
        Ok(())
    }

    /// Visit a call used as a statement
    fn visit_call_statement(&mut self, node: &mut CallStatementNode) -> Result<()>
    where
        Self: Sized,
    {
        node.call.visit(self)
    }

    /// Visit a continue node
    fn visit_continue(&mut self, _node: &mut ContinueNode) -> Result<()> {
        Ok(())
    }

    /// Visit an `if` statement
    fn visit_if(&mut self, node: &mut IfNode) -> Result<()>
    where
        Self: Sized,
    {
        node.condition.visit(self)?;
        node.body.visit(self)?;
        if let Some(n) = &mut *node.else_clause {
            n.visit(self)?;
        }

        Ok(())
    }

    /// Visit a local variable declaration
    fn visit_local_var(&mut self, node: &mut LocalVarNode) -> Result<()>
    where
        Self: Sized,
    {
        node.type_.visit(self)?;

        if let Some(expr) = &mut node.value {
            expr.visit(self)?;
        }

        Ok(())
    }

    /// Visit a method return node
    fn visit_return(&mut self, node: &mut ReturnNode) -> Result<()>
    where
        Self: Sized,
    {
        if let Some(expression) = &mut node.value {
            expression.visit(self)?;
        }

        Ok(())
    }

    /// Visit a `while` loop
    fn visit_while(&mut self, node: &mut WhileNode) -> Result<()>
    where
        Self: Sized,
    {
        node.condition.visit(self)?;
        node.body.visit(self)?;

        Ok(())
    }

    /// Visit a binary operation node
    fn visit_binary_op(&mut self, node: &mut BinaryOpNode) -> Result<()>
    where
        Self: Sized,
    {
        node.l.visit(self)?;
        node.r.visit(self)?;

        Ok(())
    }

    /// Visit a method call node
    fn visit_call(&mut self, node: &mut CallNode) -> Result<()>
    where
        Self: Sized,
    {
        for argument in &mut node.arguments {
            argument.visit(self)?;
        }

        if let CallKind::Virtual {
            receiver: Some(rcvr),
        } = &mut node.kind
        {
            rcvr.visit(self)?;
        }

        Ok(())
    }

    /// Visit a parenthesized expression
    fn visit_expression_block(&mut self, node: &mut ExpressionBlockNode) -> Result<()>
    where
        Self: Sized,
    {
        node.expr.visit(self)
    }

    /// Visit an array element location
    fn visit_index(&mut self, node: &mut IndexNode) -> Result<()>
    where
        Self: Sized,
    {
        node.array.visit(self)?;
        node.index.visit(self)?;

        Ok(())
    }

    /// Visit an array length query
    fn visit_length(&mut self, node: &mut LengthNode) -> Result<()>
    where
        Self: Sized,
    {
        node.array.visit(self)
    }

    /// Visit a literal node
    fn visit_literal(&mut self, _node: &mut LiteralNode) -> Result<()> {
        Ok(())
    }

    /// Visit an array allocation
    fn visit_new_array(&mut self, node: &mut NewArrayNode) -> Result<()>
    where
        Self: Sized,
    {
        node.type_.visit(self)?;
        node.size.visit(self)
    }

    /// Visit an object allocation
    fn visit_new_class(&mut self, _node: &mut NewClassNode) -> Result<()> {
        Ok(())
    }

    /// Visit a `this` reference
    fn visit_this(&mut self, _node: &mut ThisNode) -> Result<()> {
        Ok(())
    }

    /// Visit a unary operation node
    fn visit_unary_op(&mut self, node: &mut UnaryOpNode) -> Result<()>
    where
        Self: Sized,
    {
        node.expr.visit(self)
    }

    /// Visit a variable location node
    fn visit_var(&mut self, node: &mut VarNode) -> Result<()>
    where
        Self: Sized,
    {
        if let Some(rcvr) = &mut node.receiver {
            rcvr.visit(self)?;
        }

        Ok(())
    }
}
