/*!
 * ProjSum - Generate a Markdown summary of directory contents for LLM context
 *
 * This library renders a project directory as a Markdown document containing
 * the folder tree and the contents of its source files, for use as context
 * for Large Language Models.
 */

pub mod config;
pub mod error;
pub mod ignore;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::Config;
pub use error::{ProjSumError, Result};
pub use ignore::{IgnoreList, DEFAULT_IGNORE};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{FileContent, FileSection, SummaryDocument};
pub use utils::count_files;
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
