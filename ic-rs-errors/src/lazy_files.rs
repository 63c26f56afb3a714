use codespan_reporting::files::SimpleFiles;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// The ID type used to look up files in the [`FILE_CACHE`]
pub type FileId = usize;

/// Global storage of the source files that diagnostics are rendered against.
pub static FILE_CACHE: Lazy<RwLock<FileCache>> = Lazy::new(|| RwLock::new(FileCache::new()));

/// Source files, keyed by the [`FileId`] handed out when they were added.
pub type FileCache = SimpleFiles<String, String>;

/// Add a file's source to the [`FILE_CACHE`], so [`Span`](crate::span::Span)s
/// into it can be rendered.
///
/// # Examples
/// ```
/// use ic_rs_errors::{lazy_files::add_file, span::Span};
///
/// let file_id = add_file("Main.ic", "class Main { }");
/// let span = Span::new(file_id, 6..10);
/// assert_eq!(span.code().unwrap(), "Main");
/// ```
pub fn add_file<N, S>(name: N, source: S) -> FileId
where
    N: Into<String>,
    S: Into<String>,
{
    FILE_CACHE.write().add(name.into(), source.into())
}
