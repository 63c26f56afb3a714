use factori::factori;
use fake::Fake;
use ustr::ustr;

use crate::compiler::ast::{
    method_node::{MethodKind, MethodNode},
    type_node::TypeNode,
};

factori!(MethodNode, {
    default {
        kind = MethodKind::Virtual,
        return_type = TypeNode::void(),
        name = ustr(&format!("method-{}", (0..100000).fake::<usize>())),
        formals = vec![],
        body = vec![],
        span = None,
        required_registers = 0,
    }

    mixin library {
        kind = MethodKind::Library,
    }
});
