use factori::factori;
use fake::Fake;
use ustr::ustr;

use crate::compiler::ast::call_node::{CallKind, CallNode};

factori!(CallNode, {
    default {
        kind = CallKind::Virtual { receiver: None },
        name = ustr(&format!("method-{}", (0..100000).fake::<usize>())),
        arguments = vec![],
        span = None,
        required_registers = 0,
    }

    mixin static_call {
        kind = CallKind::Static { class_name: ustr("Library") },
    }
});
