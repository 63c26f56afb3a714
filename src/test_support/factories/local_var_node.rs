use factori::factori;
use fake::Fake;
use ustr::ustr;

use crate::compiler::ast::{local_var_node::LocalVarNode, type_node::TypeNode};

factori!(LocalVarNode, {
    default {
        type_ = TypeNode::int(),
        name = ustr(&format!("local-{}", (0..100000).fake::<usize>())),
        value = None,
        span = None,
        required_registers = 0,
    }
});
