/*!
 * Configuration handling for ProjSum
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{ProjSumError, Result};

/// Default file name of the generated summary
pub const DEFAULT_OUTPUT_NAME: &str = "project_summary.md";

/// Extensions whose content is included in the summary (case-sensitive)
pub const DEFAULT_EXTENSIONS: &[&str] = &[".py", ".ts", ".js", ".css", ".html"];

/// Command-line arguments for ProjSum
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a Markdown summary of directory contents for LLM context",
    long_about = "Creates a Markdown document with the folder tree and the full contents of a project's source files, designed for providing context to Large Language Models (LLMs)."
)]
pub struct Args {
    /// Target directory to summarize
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output Markdown file name (default: <directory>/project_summary.md)
    #[clap(short, long)]
    pub output_file: Option<String>,

    /// Comma-separated list of extra patterns to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Comma-separated list of file extensions to include content for
    #[clap(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Skip interactive prompts and proceed with the arguments as given
    #[clap(short = 'y', long)]
    pub yes: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to summarize
    pub target_dir: PathBuf,

    /// Output Markdown file path
    pub output_file: PathBuf,

    /// Extra ignore patterns supplied on the command line
    pub ignore_patterns: Vec<String>,

    /// Extensions whose content is included (case-sensitive, with leading dot)
    pub allowed_extensions: Vec<String>,

    /// Whether to skip interactive prompts
    pub non_interactive: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let target_dir = PathBuf::from(&args.directory_path);
        let output_file = match args.output_file {
            Some(path) => PathBuf::from(path),
            None => target_dir.join(DEFAULT_OUTPUT_NAME),
        };
        let allowed_extensions = if args.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            args.extensions
                .into_iter()
                .map(|e| {
                    if e.starts_with('.') {
                        e
                    } else {
                        format!(".{e}")
                    }
                })
                .collect()
        };

        Self {
            target_dir,
            output_file,
            ignore_patterns: args.ignore_patterns,
            allowed_extensions,
            non_interactive: args.yes,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(ProjSumError::Config(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        if !self.target_dir.is_dir() {
            return Err(ProjSumError::Config(format!(
                "Target path is not a directory: {}",
                self.target_dir.display()
            )));
        }

        // Check if the output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != PathBuf::from("") {
                return Err(ProjSumError::Config(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Check whether a path carries one of the allowed extensions
    pub fn has_allowed_extension(&self, path: &std::path::Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy();
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.strip_prefix('.') == Some(ext.as_ref()))
            }
            None => false,
        }
    }
}
