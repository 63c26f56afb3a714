use std::sync::Arc;

use ast::{ast_node::AstNodeTrait, program_node::ProgramNode};
use codegen::{
    register_counter_walker::RegisterCounterWalker, tree_printer::TreePrinter,
    tree_walker::ContextHolder,
};
use compilation_context::CompilationContext;
use derive_builder::Builder;
use ic_rs_core::RegisterSize;
use ic_rs_utils::config::Config;
use tracing::{debug, instrument, trace, Level};

pub mod ast;
pub mod codegen;
pub mod compilation_context;

/// Run a walker over a program, and get its context back.
///
/// If the walk itself fails, the error is returned from the calling function,
/// carrying any diagnostics collected along the way. When `$fatal` is set,
/// collecting any non-warning diagnostic also returns early, with the
/// errors first in line.
#[macro_export]
macro_rules! apply_walker {
    ($walker:ty, $program:expr, $context:expr, $fatal:expr) => {{
        let mut walker = <$walker>::new($context);
        let result = $program.visit(&mut walker);

        let mut context = walker.into_context();

        if let Err(e) = result {
            let e = e.with_additional_errors(context.errors);
            return Err(Box::new(e));
        } else if $fatal && context.errors.iter().any(|e| !e.is_warning()) {
            let mut errors = std::mem::take(&mut context.errors);
            // put all errors first, but otherwise keep them in the order they were found
            errors.sort_by_key(|e| e.is_warning());

            let mut deq = std::collections::VecDeque::from(errors);
            if let Some(e) = deq.pop_front() {
                return Err(Box::new(e.with_additional_errors(Vec::from(deq))));
            }
        }

        context
    }};
}

/// The entry point for running analysis passes over a parsed program.
#[derive(Debug, Default, Builder)]
#[builder(build_fn(error = "ic_rs_errors::IcError"))]
pub struct Compiler {
    /// The configuration to be used for this instance of the compiler
    #[builder(setter(into), default)]
    config: Arc<Config>,
}

impl Compiler {
    /// Create a new `Compiler` using the passed [`Config`]
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// The configuration in use
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Label every node in `program` with the number of registers needed to
    /// evaluate it, and return the requirement of the program as a whole.
    ///
    /// Spill warnings are emitted to stderr. If spills are denied in the
    /// [`Config`], a spilling method fails the pass.
    ///
    /// # Examples
    /// ```
    /// use ic_rs::compiler::{
    ///     ast::{
    ///         class_node::ClassNode,
    ///         expression_node::ExpressionNode,
    ///         local_var_node::LocalVarNode,
    ///         method_node::{MethodKind, MethodNode},
    ///         program_node::ProgramNode,
    ///         type_node::TypeNode,
    ///     },
    ///     Compiler,
    /// };
    ///
    /// let value = ExpressionNode::from(1);
    /// let body = vec![LocalVarNode::new(TypeNode::int(), "x", Some(value)).into()];
    /// let method = MethodNode::new(MethodKind::Static, TypeNode::void(), "main", vec![], body);
    /// let mut program = ProgramNode::new(vec![ClassNode::new("Main", vec![], vec![method])]);
    ///
    /// let registers = Compiler::default()
    ///     .annotate_registers(&mut program)
    ///     .expect("Unable to annotate.");
    ///
    /// assert_eq!(registers, 0);
    /// ```
    pub fn annotate_registers(
        &self,
        program: &mut ProgramNode,
    ) -> ic_rs_errors::Result<RegisterSize> {
        self.annotate_file_registers("<unknown>", program)
    }

    /// Like [`annotate_registers`](Self::annotate_registers), with the name of the
    /// file the program was read from, for messaging.
    #[instrument(skip(self, program))]
    pub fn annotate_file_registers(
        &self,
        filename: &str,
        program: &mut ProgramNode,
    ) -> ic_rs_errors::Result<RegisterSize> {
        let context = CompilationContext::new(filename, self.config.clone());
        let context = apply_walker!(
            RegisterCounterWalker,
            program,
            context,
            self.config.deny_spills
        );

        // emit warnings
        context
            .errors
            .iter()
            .filter(|e| e.is_warning())
            .for_each(|e| {
                e.emit_diagnostics();
            });

        if tracing::enabled!(Level::TRACE) {
            let mut printer = TreePrinter::new();
            program.visit(&mut printer)?;
            trace!("annotated {}:\n{}", context.filename, printer.output());
        }

        debug!(
            registers = program.required_registers,
            "annotated {}", context.filename
        );

        Ok(program.required_registers)
    }
}
