use factori::factori;
use fake::Fake;
use ustr::ustr;

use crate::compiler::ast::var_node::VarNode;

factori!(VarNode, {
    default {
        receiver = None,
        name = ustr(&format!("var-{}", (0..100000).fake::<usize>())),
        span = None,
        required_registers = 0,
    }
});
