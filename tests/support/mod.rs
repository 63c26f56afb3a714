use ic_rs::compiler::ast::{
    assignment_node::AssignmentNode,
    ast_node::AnnotatedNode,
    binary_op_node::{BinaryOpNode, BinaryOperation},
    block_node::BlockNode,
    call_node::{CallKind, CallNode},
    class_node::ClassNode,
    expression_node::ExpressionNode,
    field_node::FieldNode,
    formal_node::FormalNode,
    if_node::IfNode,
    index_node::IndexNode,
    length_node::LengthNode,
    local_var_node::LocalVarNode,
    method_node::{MethodKind, MethodNode},
    new_array_node::NewArrayNode,
    program_node::ProgramNode,
    return_node::ReturnNode,
    statement_node::StatementNode,
    this_node::ThisNode,
    type_node::TypeNode,
    var_node::VarNode,
    while_node::WhileNode,
};
use ic_rs_core::{
    ic_type::{IcType, PrimitiveType},
    RegisterSize,
};
use ustr::ustr;

fn int(value: i32) -> ExpressionNode {
    ExpressionNode::from(value)
}

fn var(name: &str) -> ExpressionNode {
    VarNode::new(name).into()
}

fn binary(l: ExpressionNode, r: ExpressionNode, op: BinaryOperation) -> ExpressionNode {
    BinaryOpNode::new(l, r, op).into()
}

fn index(array: ExpressionNode, index: ExpressionNode) -> ExpressionNode {
    IndexNode::new(array, index).into()
}

fn assign(lhs: ExpressionNode, rhs: ExpressionNode) -> StatementNode {
    AssignmentNode::new(lhs, rhs).into()
}

/// A small growable list of ints, with a static helper that sums any list.
///
/// ```text
/// class List {
///     int[] items;
///     int size;
///
///     void add(int x) {
///         if (size == items.length) {
///             int[] grown = new int[size * 2 + 1];
///             int i = 0;
///             while (i < size) {
///                 grown[i] = items[i];
///                 i = i + 1;
///             }
///             items = grown;
///         }
///         items[size] = x;
///         size = size + 1;
///     }
///
///     static int sum(List l) {
///         int total = 0;
///         int i = 0;
///         while (i < l.size) {
///             total = total + l.items[i] * Math.weight(i * 2, l.size - i, this.scale(i));
///             i = i + 1;
///         }
///         return total;
///     }
///
///     static void println(string s);
/// }
/// ```
pub fn list_program() -> ProgramNode {
    let int_array = || TypeNode::new(PrimitiveType::Int, 1);

    let grow = BlockNode::new(vec![
        LocalVarNode::new(
            int_array(),
            "grown",
            Some(
                NewArrayNode::new(
                    TypeNode::int(),
                    binary(
                        binary(var("size"), int(2), BinaryOperation::Mul),
                        int(1),
                        BinaryOperation::Add,
                    ),
                )
                .into(),
            ),
        )
        .into(),
        LocalVarNode::new(TypeNode::int(), "i", Some(int(0))).into(),
        WhileNode::new(
            binary(var("i"), var("size"), BinaryOperation::Lt),
            BlockNode::new(vec![
                assign(
                    index(var("grown"), var("i")),
                    index(var("items"), var("i")),
                ),
                assign(var("i"), binary(var("i"), int(1), BinaryOperation::Add)),
            ])
            .into(),
            None,
        )
        .into(),
        assign(var("items"), var("grown")),
    ]);

    let add = MethodNode::new(
        MethodKind::Virtual,
        TypeNode::void(),
        "add",
        vec![FormalNode::new(TypeNode::int(), "x")],
        vec![
            IfNode::new(
                binary(
                    var("size"),
                    LengthNode::new(var("items")).into(),
                    BinaryOperation::Eq,
                ),
                grow.into(),
                None,
                None,
            )
            .into(),
            assign(index(var("items"), var("size")), var("x")),
            assign(
                var("size"),
                binary(var("size"), int(1), BinaryOperation::Add),
            ),
        ],
    );

    let weight = CallNode::new_static(
        "Math",
        "weight",
        vec![
            binary(var("i"), int(2), BinaryOperation::Mul),
            binary(
                VarNode::new_external(var("l"), "size").into(),
                var("i"),
                BinaryOperation::Sub,
            ),
            CallNode::new_virtual(Some(ThisNode::new(None).into()), "scale", vec![var("i")])
                .into(),
        ],
    );

    let element = index(VarNode::new_external(var("l"), "items").into(), var("i"));

    let sum = MethodNode::new(
        MethodKind::Static,
        TypeNode::int(),
        "sum",
        vec![FormalNode::new(TypeNode::new(IcType::Class(ustr("List")), 0), "l")],
        vec![
            LocalVarNode::new(TypeNode::int(), "total", Some(int(0))).into(),
            LocalVarNode::new(TypeNode::int(), "i", Some(int(0))).into(),
            WhileNode::new(
                binary(
                    var("i"),
                    VarNode::new_external(var("l"), "size").into(),
                    BinaryOperation::Lt,
                ),
                BlockNode::new(vec![
                    assign(
                        var("total"),
                        binary(
                            var("total"),
                            binary(element, weight.into(), BinaryOperation::Mul),
                            BinaryOperation::Add,
                        ),
                    ),
                    assign(var("i"), binary(var("i"), int(1), BinaryOperation::Add)),
                ])
                .into(),
                None,
            )
            .into(),
            ReturnNode::new(Some(var("total"))).into(),
        ],
    );

    let println = MethodNode::new(
        MethodKind::Library,
        TypeNode::void(),
        "println",
        vec![FormalNode::new(
            TypeNode::new(PrimitiveType::String, 0),
            "s",
        )],
        vec![],
    );

    let list = ClassNode::new(
        "List",
        vec![
            FieldNode::new(int_array(), "items"),
            FieldNode::new(TypeNode::int(), "size"),
        ],
        vec![add, sum, println],
    );

    ProgramNode::new(vec![list])
}

/// Every annotation in the tree, gathered without going through a walker.
pub fn all_annotations(program: &ProgramNode) -> Vec<RegisterSize> {
    let mut out = vec![program.required_registers()];

    for class in &program.classes {
        out.push(class.required_registers());

        for field in &class.fields {
            out.push(field.required_registers());
            out.push(field.type_.required_registers());
        }

        for method in &class.methods {
            out.push(method.required_registers());
            out.push(method.return_type.required_registers());

            for formal in &method.formals {
                out.push(formal.required_registers());
                out.push(formal.type_.required_registers());
            }

            for statement in &method.body {
                statement_annotations(statement, &mut out);
            }
        }
    }

    out
}

fn statement_annotations(statement: &StatementNode, out: &mut Vec<RegisterSize>) {
    out.push(statement.required_registers());

    match statement {
        StatementNode::Assignment(node) => {
            expression_annotations(&node.lhs, out);
            expression_annotations(&node.rhs, out);
        }
        StatementNode::Block(node) => {
            for statement in &node.body {
                statement_annotations(statement, out);
            }
        }
        StatementNode::CallStatement(node) => call_annotations(&node.call, out),
        StatementNode::If(node) => {
            expression_annotations(&node.condition, out);
            statement_annotations(&node.body, out);

            if let Some(else_clause) = &*node.else_clause {
                statement_annotations(else_clause, out);
            }
        }
        StatementNode::LocalVar(node) => {
            out.push(node.type_.required_registers());

            if let Some(value) = &node.value {
                expression_annotations(value, out);
            }
        }
        StatementNode::Return(node) => {
            if let Some(value) = &node.value {
                expression_annotations(value, out);
            }
        }
        StatementNode::While(node) => {
            expression_annotations(&node.condition, out);
            statement_annotations(&node.body, out);
        }
        StatementNode::Break(_) | StatementNode::Continue(_) => {}
    }
}

fn call_annotations(call: &CallNode, out: &mut Vec<RegisterSize>) {
    out.push(call.required_registers());

    for argument in &call.arguments {
        expression_annotations(argument, out);
    }

    if let CallKind::Virtual {
        receiver: Some(receiver),
    } = &call.kind
    {
        expression_annotations(receiver, out);
    }
}

fn expression_annotations(expression: &ExpressionNode, out: &mut Vec<RegisterSize>) {
    if let ExpressionNode::Call(node) = expression {
        return call_annotations(node, out);
    }

    out.push(expression.required_registers());

    match expression {
        ExpressionNode::BinaryOp(node) => {
            expression_annotations(&node.l, out);
            expression_annotations(&node.r, out);
        }
        ExpressionNode::ExpressionBlock(node) => expression_annotations(&node.expr, out),
        ExpressionNode::Index(node) => {
            expression_annotations(&node.array, out);
            expression_annotations(&node.index, out);
        }
        ExpressionNode::Length(node) => expression_annotations(&node.array, out),
        ExpressionNode::NewArray(node) => {
            out.push(node.type_.required_registers());
            expression_annotations(&node.size, out);
        }
        ExpressionNode::UnaryOp(node) => expression_annotations(&node.expr, out),
        ExpressionNode::Var(node) => {
            if let Some(receiver) = &node.receiver {
                expression_annotations(receiver, out);
            }
        }
        ExpressionNode::Call(_)
        | ExpressionNode::Literal(_)
        | ExpressionNode::NewClass(_)
        | ExpressionNode::This(_) => {}
    }
}
