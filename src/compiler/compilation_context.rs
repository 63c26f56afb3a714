use std::sync::Arc;

use derive_builder::Builder;
use ic_rs_errors::IcError;
use ic_rs_utils::config::Config;

/// State shared by the walkers that run over a single compilation unit.
/// Walkers take ownership of it while they run, and hand it back through
/// [`ContextHolder`](crate::compiler::codegen::tree_walker::ContextHolder).
#[derive(Debug, Builder)]
#[builder(build_fn(error = "ic_rs_errors::IcError"))]
pub struct CompilationContext {
    /// The name of the file being compiled. Only used for messaging.
    #[builder(setter(into), default = "String::from(\"<unknown>\")")]
    pub filename: String,

    /// The configuration being used for this compilation.
    #[builder(setter(into), default)]
    pub config: Arc<Config>,

    /// Any warnings & errors that have been collected
    #[builder(default)]
    pub errors: Vec<IcError>,
}

impl CompilationContext {
    /// Create a new `CompilationContext`
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use ic_rs::compiler::compilation_context::CompilationContext;
    /// use ic_rs_utils::config::Config;
    ///
    /// let context = CompilationContext::new("Main.ic", Arc::new(Config::default()));
    /// assert_eq!(context.filename, "Main.ic");
    /// ```
    pub fn new<T>(filename: T, config: Arc<Config>) -> Self
    where
        T: Into<String>,
    {
        Self {
            filename: filename.into(),
            config,
            errors: vec![],
        }
    }

    /// Record a diagnostic
    #[inline]
    pub fn add_error(&mut self, error: IcError) {
        self.errors.push(error);
    }

    /// Have any errors (rather than warnings) been collected?
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.is_error() || e.is_bug())
    }
}

impl Default for CompilationContext {
    fn default() -> Self {
        Self::new("<unknown>", Arc::new(Config::default()))
    }
}

#[cfg(test)]
mod tests {
    use claims::assert_ok;

    use super::*;

    #[test]
    fn test_builder() {
        let context = assert_ok!(CompilationContextBuilder::default()
            .filename("Foo.ic")
            .build());

        assert_eq!(context.filename, "Foo.ic");
        assert!(context.errors.is_empty());
        assert_eq!(context.config.max_registers, None);
    }

    #[test]
    fn test_has_errors() {
        let mut context = CompilationContext::default();
        assert!(!context.has_errors());

        context.add_error(IcError::new_warning("careful"));
        assert!(!context.has_errors());

        context.add_error(IcError::new("broken"));
        assert!(context.has_errors());
    }
}
