use factori::factori;
use fake::Fake;
use ustr::ustr;

use crate::compiler::ast::class_node::ClassNode;

factori!(ClassNode, {
    default {
        name = ustr(&format!("Class{}", (0..100000).fake::<usize>())),
        super_class = None,
        fields = vec![],
        methods = vec![],
        span = None,
        required_registers = 0,
    }
});
