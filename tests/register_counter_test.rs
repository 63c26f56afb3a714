mod support;

use std::sync::Arc;

use claims::{assert_err, assert_ok};
use ic_rs::compiler::{
    ast::{
        ast_node::{AnnotatedNode, AstNodeTrait},
        expression_node::ExpressionNode,
        statement_node::StatementNode,
    },
    codegen::{tree_printer::TreePrinter, tree_walker::TreeWalker},
    Compiler, CompilerBuilder,
};
use ic_rs_core::evaluation_order::EvaluationOrder;
use ic_rs_utils::config::{Config, ConfigBuilder};
use indoc::indoc;

use crate::support::{all_annotations, list_program};

fn default_compiler() -> Compiler {
    let config: Arc<Config> = ConfigBuilder::default().build().unwrap().into();
    CompilerBuilder::default().config(config).build().unwrap()
}

#[test]
fn test_annotates_methods() {
    let mut program = list_program();

    let registers = assert_ok!(default_compiler().annotate_registers(&mut program));

    let list = &program.classes[0];
    let methods = list
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.required_registers()))
        .collect::<Vec<_>>();

    assert_eq!(methods, vec![("add", 2), ("sum", 3), ("println", 0)]);
    assert_eq!(list.required_registers(), 3);
    assert_eq!(registers, 3);
}

#[test]
fn test_program_annotation_is_the_tree_maximum() {
    let mut program = list_program();

    let registers = assert_ok!(default_compiler().annotate_registers(&mut program));
    let annotations = all_annotations(&program);

    assert!(annotations.len() > 50);
    assert_eq!(annotations.iter().copied().max(), Some(registers));
    assert_eq!(program.required_registers, registers);
}

#[test]
fn test_fields_and_formals_are_zero() {
    let mut program = list_program();

    assert_ok!(default_compiler().annotate_registers(&mut program));

    let list = &program.classes[0];
    assert!(list.fields.iter().all(|f| f.required_registers() == 0));
    assert!(list
        .methods
        .iter()
        .flat_map(|m| &m.formals)
        .all(|f| f.required_registers() == 0));
}

#[test]
fn test_annotation_is_idempotent() {
    let mut program = list_program();
    let compiler = default_compiler();

    let first = assert_ok!(compiler.annotate_registers(&mut program));
    let annotations = all_annotations(&program);

    let second = assert_ok!(compiler.annotate_registers(&mut program));

    assert_eq!(first, second);
    assert_eq!(annotations, all_annotations(&program));
}

#[test]
fn test_evaluation_order_follows_annotations() {
    let mut program = list_program();
    assert_ok!(default_compiler().annotate_registers(&mut program));

    // total = total + l.items[i] * Math.weight(...)
    let StatementNode::While(loop_node) = &program.classes[0].methods[1].body[2] else {
        panic!("expected the summing loop");
    };
    let StatementNode::Block(block) = &*loop_node.body else {
        panic!("expected a block");
    };
    let StatementNode::Assignment(assignment) = &block.body[0] else {
        panic!("expected an assignment");
    };
    let ExpressionNode::BinaryOp(addition) = &*assignment.rhs else {
        panic!("expected an addition");
    };

    assert_eq!(assignment.evaluation_order(), EvaluationOrder::LeftFirst);
    assert_eq!(addition.evaluation_order(), EvaluationOrder::RightFirst);

    let ExpressionNode::BinaryOp(product) = &*addition.r else {
        panic!("expected a product");
    };
    assert_eq!(product.evaluation_order(), EvaluationOrder::RightFirst);

    let ExpressionNode::Call(weight) = &*product.r else {
        panic!("expected a call");
    };
    assert_eq!(weight.operand_requirements(), vec![1, 1, 1]);
    assert_eq!(weight.evaluation_order(), vec![0, 1, 2]);
    assert_eq!(weight.required_registers(), 3);
}

#[test]
fn test_prints_the_annotated_tree() {
    let mut program = list_program();
    assert_ok!(default_compiler().annotate_registers(&mut program));

    let mut add = program.classes[0].methods[0].clone();
    let mut printer = TreePrinter::new();
    assert_ok!(printer.visit_method(&mut add));

    let expected = indoc! { r#"
        Method void add [regs: 2]
          Formal int x [regs: 0]
          If [regs: 2]
            Binary Op == [regs: 1]
              Var size [regs: 0]
              Length [regs: 0]
                Var items [regs: 0]
            Block [regs: 2]
              Local Var int[] grown [regs: 1]
                New Array int [regs: 1]
                  Binary Op + [regs: 1]
                    Binary Op * [regs: 1]
                      Var size [regs: 0]
                      Literal 2 [regs: 0]
                    Literal 1 [regs: 0]
              Local Var int i [regs: 0]
                Literal 0 [regs: 0]
              While [regs: 2]
                Binary Op < [regs: 1]
                  Var i [regs: 0]
                  Var size [regs: 0]
                Block [regs: 2]
                  Assignment [regs: 2]
                    Index [regs: 1]
                      Var grown [regs: 0]
                      Var i [regs: 0]
                    Index [regs: 1]
                      Var items [regs: 0]
                      Var i [regs: 0]
                  Assignment [regs: 1]
                    Var i [regs: 0]
                    Binary Op + [regs: 1]
                      Var i [regs: 0]
                      Literal 1 [regs: 0]
              Assignment [regs: 1]
                Var items [regs: 0]
                Var grown [regs: 0]
          Assignment [regs: 1]
            Index [regs: 1]
              Var items [regs: 0]
              Var size [regs: 0]
            Var x [regs: 0]
          Assignment [regs: 1]
            Var size [regs: 0]
            Binary Op + [regs: 1]
              Var size [regs: 0]
              Literal 1 [regs: 0]
    "# };

    assert_eq!(printer.output(), expected);
}

#[test]
fn test_spills_are_warnings_by_default() {
    let config = ConfigBuilder::default().max_registers(2).build().unwrap();
    let compiler = Compiler::new(Arc::new(config));
    let mut program = list_program();

    let registers = assert_ok!(compiler.annotate_registers(&mut program));
    assert_eq!(registers, 3);
}

#[test]
fn test_denied_spills_from_env() {
    let config = ConfigBuilder::default()
        .load_env(Some("./tests/fixtures/spills.env"))
        .build()
        .unwrap();
    assert_eq!(config.max_registers, Some(2));
    assert!(config.deny_spills);

    let compiler = Compiler::new(Arc::new(config));
    let mut program = list_program();

    let err = assert_err!(compiler.annotate_file_registers("List.ic", &mut program));
    assert!(err.is_error());
    assert_eq!(
        err.message(),
        "method `List.sum` requires 3 registers, but only 2 are available"
    );
    assert!(err.additional_errors().is_empty());
}

#[test]
fn test_walking_without_the_compiler() {
    struct MethodCounter(usize);

    impl TreeWalker for MethodCounter {
        fn visit_method(
            &mut self,
            _node: &mut ic_rs::compiler::ast::method_node::MethodNode,
        ) -> ic_rs_errors::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    let mut program = list_program();
    let mut counter = MethodCounter(0);
    assert_ok!(program.visit(&mut counter));

    assert_eq!(counter.0, 3);
}
