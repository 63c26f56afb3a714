#![forbid(unsafe_code)]

use std::{
    error::Error,
    fmt::{Debug, Display, Formatter},
    result,
};

use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    term::termcolor::{Buffer, ColorChoice, StandardStream, WriteColor},
};
use derive_builder::UninitializedFieldError;

use crate::{lazy_files::FILE_CACHE, span::Span};

pub mod lazy_files;
pub mod span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IcErrorSeverity {
    Warning,
    Error,
    Bug,
}

/// A convenience helper for creating a new `IcError`. (`Error` severity)
#[macro_export]
macro_rules! ic_error {
    ($fmt:literal, $($arg:tt)*) => {
        $crate::IcError::new(format!($fmt, $($arg)*)).into()
    };
    ($span:expr, $msg:literal $(,)?) => {
        $crate::IcError::new($msg).with_span($span).into()
    };
    ($span:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::IcError::new(format!($fmt, $($arg)*)).with_span($span).into()
    };
    ($msg:literal $(,)?) => {
        $crate::IcError::new($msg).into()
    };
    ($err:expr $(,)?) => {
        $crate::IcError::new($err).into()
    };
}

/// A convenience helper for creating a new `IcError`. (`Warning` severity)
#[macro_export]
macro_rules! ic_warning {
    ($fmt:literal, $($arg:tt)*) => {
        $crate::IcError::new_warning(format!($fmt, $($arg)*)).into()
    };
    ($span:expr, $msg:literal $(,)?) => {
        $crate::IcError::new_warning($msg).with_span($span).into()
    };
    ($span:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::IcError::new_warning(format!($fmt, $($arg)*)).with_span($span).into()
    };
    ($msg:literal $(,)?) => {
        $crate::IcError::new_warning($msg).into()
    };
    ($err:expr $(,)?) => {
        $crate::IcError::new_warning($err).into()
    };
}

/// A convenience helper for creating a new `IcError`. (`Bug` severity)
#[macro_export]
macro_rules! ic_bug {
    ($fmt:literal, $($arg:tt)*) => {
        $crate::IcError::new_bug(format!($fmt, $($arg)*)).into()
    };
    ($span:expr, $msg:literal $(,)?) => {
        $crate::IcError::new_bug($msg).with_span($span).into()
    };
    ($span:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::IcError::new_bug(format!($fmt, $($arg)*)).with_span($span).into()
    };
    ($msg:literal $(,)?) => {
        $crate::IcError::new_bug($msg).into()
    };
    ($err:expr $(,)?) => {
        $crate::IcError::new_bug($err).into()
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcError {
    /// The main message to be printed out
    message: String,
    /// The primary span causing this error
    pub span: Option<Span>,
    /// Any secondary labels that are additionally printed with the error
    labels: Vec<Label<usize>>,
    /// Additional text notes, suggestions, etc. to be printed to the user.
    notes: Vec<String>,
    /// Additional errors that were collected before this one. Only used by
    /// passes that keep going after non-fatal errors.
    additional_errors: Option<Vec<IcError>>,
    /// The severity of this error. Warnings are printed, but do not stop
    /// compilation.
    pub severity: IcErrorSeverity,
}

impl IcError {
    fn with_severity<T>(message: T, severity: IcErrorSeverity) -> Self
    where
        T: Into<String>,
    {
        Self {
            message: message.into(),
            span: None,
            labels: vec![],
            notes: vec![],
            additional_errors: None,
            severity,
        }
    }

    /// Create a new `IcError` with severity [`IcErrorSeverity::Error`], and a
    /// message
    pub fn new<T>(message: T) -> Self
    where
        T: Into<String>,
    {
        Self::with_severity(message, IcErrorSeverity::Error)
    }

    /// Create a new `IcError` with severity [`IcErrorSeverity::Warning`], and
    /// a message
    pub fn new_warning<T>(message: T) -> Self
    where
        T: Into<String>,
    {
        Self::with_severity(message, IcErrorSeverity::Warning)
    }

    /// Create a new `IcError` with severity [`IcErrorSeverity::Bug`], and
    /// a message
    pub fn new_bug<T>(message: T) -> Self
    where
        T: Into<String>,
    {
        Self::with_severity(message, IcErrorSeverity::Bug)
    }

    pub fn is_warning(&self) -> bool {
        self.severity == IcErrorSeverity::Warning
    }

    pub fn is_error(&self) -> bool {
        self.severity == IcErrorSeverity::Error
    }

    pub fn is_bug(&self) -> bool {
        self.severity == IcErrorSeverity::Bug
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the primary span for this error
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;

        self
    }

    /// Add a secondary label for this error
    pub fn with_label<T>(mut self, message: T, span: Option<Span>) -> Self
    where
        T: AsRef<str>,
    {
        if let Some(s) = span {
            self.labels
                .push(Label::secondary(s.file_id, s.l..s.r).with_message(message.as_ref()));
        }

        self
    }

    /// Add some notes the diagnostic
    pub fn with_note<T>(mut self, note: T) -> Self
    where
        T: Into<String>,
    {
        self.notes.push(note.into());

        self
    }

    pub fn with_additional_errors(mut self, additional_errors: Vec<IcError>) -> Self {
        self.additional_errors = Some(additional_errors);

        self
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn additional_errors(&self) -> &[IcError] {
        self.additional_errors.as_deref().unwrap_or_default()
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic<usize>> {
        let mut v = vec![Diagnostic::from(self)];

        if let Some(ref additional_errors) = self.additional_errors {
            v.extend(additional_errors.iter().flat_map(|e| e.to_diagnostics()));
        }

        v
    }

    /// Emit this error's collected diagnostics to stderr
    pub fn emit_diagnostics(&self) {
        output_diagnostics(
            &self.to_diagnostics(),
            &mut StandardStream::stderr(ColorChoice::Auto).lock(),
        );
    }

    /// Emit the diagnostics as a String
    pub fn diagnostic_string(&self) -> String {
        let mut err = self.to_string();
        err.push('\n');

        let mut buffer = Buffer::no_color();
        let diagnostics = self.to_diagnostics();

        output_diagnostics(&diagnostics, &mut buffer);
        err.push_str(
            std::str::from_utf8(buffer.as_slice()).unwrap_or("<diagnostic with invalid utf8?>"),
        );

        err
    }
}

impl Display for IcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for IcError {}

impl From<UninitializedFieldError> for IcError {
    fn from(e: UninitializedFieldError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<UninitializedFieldError> for Box<IcError> {
    fn from(e: UninitializedFieldError) -> Self {
        Box::new(IcError::from(e))
    }
}

impl From<std::io::Error> for IcError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<&IcError> for Diagnostic<usize> {
    fn from(error: &IcError) -> Self {
        let mut diagnostic = match error.severity {
            IcErrorSeverity::Warning => Diagnostic::warning(),
            IcErrorSeverity::Error => Diagnostic::error(),
            IcErrorSeverity::Bug => Diagnostic::bug(),
        };

        diagnostic = diagnostic.with_message(format!("{error}"));

        let mut labels = vec![];

        if let Some(span) = error.span {
            labels.push(Label::primary(span.file_id, span.l..span.r));
        }

        for label in &error.labels {
            labels.push(label.clone());
        }

        if !labels.is_empty() {
            diagnostic = diagnostic.with_labels(labels);
        }

        if !error.notes.is_empty() {
            diagnostic = diagnostic.with_notes(error.notes.clone())
        }

        diagnostic
    }
}

/// Write a list of diagnostics to a writer.
pub fn output_diagnostics(diagnostics: &[Diagnostic<usize>], writer: &mut dyn WriteColor) {
    let files = FILE_CACHE.read();

    let config = codespan_reporting::term::Config::default();

    for diagnostic in diagnostics {
        if let Err(e) = codespan_reporting::term::emit(writer, &config, &*files, diagnostic) {
            eprintln!("error attempting to emit diagnostic: {e:?} ::: {diagnostic:?}");
        };
    }
}

/// Common `Result` type
pub type Result<T> = result::Result<T, Box<IcError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lazy_files::add_file;

    #[test]
    fn test_builder() {
        let error = IcError::new("test error")
            .with_span(Some(Span::new(0, 0..1)))
            .with_note("test note")
            .with_label("my label", Some(Span::new(0, 0..1)))
            .with_additional_errors(vec![IcError::new("test error 2")]);

        assert_eq!(error.message, "test error");
        assert_eq!(error.span.unwrap().l, 0);
        assert_eq!(error.span.unwrap().r, 1);
        assert_eq!(error.notes[0], "test note");
        assert_eq!(error.labels[0].message, "my label");
        assert_eq!(error.additional_errors()[0].message, "test error 2");
    }

    #[test]
    fn test_label_without_span_is_dropped() {
        let error = IcError::new("test error").with_label("nowhere", None);

        assert!(error.labels.is_empty());
    }

    #[test]
    fn test_severity() {
        let error = IcError::new("test error");
        assert_eq!(error.severity, IcErrorSeverity::Error);
        assert!(error.is_error());

        let error = IcError::new_warning("test warning");
        assert_eq!(error.severity, IcErrorSeverity::Warning);
        assert!(error.is_warning());

        let error = IcError::new_bug("test bug");
        assert_eq!(error.severity, IcErrorSeverity::Bug);
        assert!(error.is_bug());
    }

    #[test]
    fn test_macros() {
        let error: Box<IcError> = ic_error!("bad {}", 1);
        assert!(error.is_error());
        assert_eq!(error.to_string(), "bad 1");

        let warning: IcError = ic_warning!(Some(Span::new(0, 1..2)), "careful");
        assert!(warning.is_warning());
        assert_eq!(warning.span, Some(Span::new(0, 1..2)));

        let bug: IcError = ic_bug!("oops");
        assert!(bug.is_bug());
    }

    #[test]
    fn test_into_diagnostic() {
        let error = IcError::new_warning("test warning")
            .with_span(Some(Span::new(0, 0..1)))
            .with_note("test note")
            .with_label("my label", Some(Span::new(0, 0..7)));

        let diagnostic = Diagnostic::from(&error);

        assert_eq!(diagnostic.message, "test warning");
        assert_eq!(
            diagnostic.labels[0],
            Label::primary(0, 0..1).with_message("")
        );
        assert_eq!(
            diagnostic.labels[1],
            Label::secondary(0, 0..7).with_message("my label")
        );
        assert_eq!(diagnostic.notes[0], "test note");
    }

    #[test]
    fn test_to_diagnostics_includes_additional_errors() {
        let error = IcError::new("first")
            .with_additional_errors(vec![IcError::new_warning("second")]);

        let diagnostics = error.to_diagnostics();

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[1].message, "second");
    }

    #[test]
    fn test_diagnostic_string() {
        let file_id = add_file("Diag.ic", "class Diag { }\n");
        let error = IcError::new("no good").with_span(Some(Span::new(file_id, 6..10)));

        let s = error.diagnostic_string();

        assert!(s.starts_with("no good\n"));
        assert!(s.contains("Diag.ic:1:7"));
    }
}
