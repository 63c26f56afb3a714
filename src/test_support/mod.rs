use factori::create;
use ic_rs_core::RegisterSize;
use ustr::ustr;

use crate::{
    compiler::ast::{
        binary_op_node::{BinaryOpNode, BinaryOperation},
        call_node::CallNode,
        class_node::ClassNode,
        expression_node::ExpressionNode,
        local_var_node::LocalVarNode,
        method_node::MethodNode,
        statement_node::StatementNode,
        var_node::VarNode,
    },
    test_support::factories::*,
};

pub mod factories;

/// Build an expression that needs exactly `n` registers, as a complete tree of
/// additions `n` levels deep.
pub fn expression_requiring(n: RegisterSize) -> ExpressionNode {
    if n == 0 {
        return create!(VarNode).into();
    }

    BinaryOpNode::new(
        expression_requiring(n - 1),
        expression_requiring(n - 1),
        BinaryOperation::Add,
    )
    .into()
}

/// A local declaration whose initializer needs exactly `n` registers
pub fn local_var_requiring(n: RegisterSize) -> StatementNode {
    create!(LocalVarNode, value: Some(expression_requiring(n))).into()
}

/// A call whose arguments need the passed numbers of registers
pub fn call_with_arguments(requirements: &[RegisterSize]) -> CallNode {
    let arguments = requirements
        .iter()
        .map(|n| expression_requiring(*n))
        .collect();

    create!(CallNode, arguments: arguments)
}

/// A class with one method per entry of `requirements`, named `run0`, `run1`,
/// etc., each needing the given number of registers.
pub fn class_with_requirements(name: &str, requirements: &[RegisterSize]) -> ClassNode {
    let methods = requirements
        .iter()
        .enumerate()
        .map(|(i, n)| {
            create!(
                MethodNode,
                name: ustr(&format!("run{i}")),
                body: vec![local_var_requiring(*n)],
            )
        })
        .collect();

    create!(ClassNode, name: ustr(name), methods: methods)
}
