/*!
 * Core types and data structures for the ProjSum application
 */

use std::path::PathBuf;

/// Content of a summarized file, or the reason it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// File content read as UTF-8 text
    Text(String),
    /// Error message recorded in place of content
    Error(String),
}

/// One file section of the summary document
#[derive(Debug, Clone)]
pub struct FileSection {
    /// Path relative to the scan root
    pub rel_path: PathBuf,
    /// Absolute path on disk
    pub abs_path: PathBuf,
    /// File content or read error
    pub content: FileContent,
}

/// The complete summary of one scan run
///
/// Transient: built fresh per run and handed straight to the writer.
#[derive(Debug, Clone)]
pub struct SummaryDocument {
    /// Rendered folder tree
    pub tree: String,
    /// File sections in traversal order
    pub files: Vec<FileSection>,
}
