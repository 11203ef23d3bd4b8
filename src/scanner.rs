/*!
 * Directory and file scanning functionality
 */

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::Result;
use crate::ignore::IgnoreList;
use crate::report::FileReportInfo;
use crate::types::{FileContent, FileSection, SummaryDocument};

/// Connector prefix accumulated for each ancestor level of the tree
const TREE_INDENT: &str = "│   ";
/// Branch connector emitted before every entry name
const TREE_BRANCH: &str = "├── ";
/// Placeholder line for directories the process cannot list
const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Number of files processed
    pub files_processed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Scanner for directory contents
///
/// Purely synchronous, single-threaded recursion: source trees are small
/// enough that parallel I/O buys nothing here.
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Ignore patterns for this run
    ignore: IgnoreList,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: ScannerStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, ignore: IgnoreList, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            ignore,
            progress,
            statistics: ScannerStatistics::default(),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.clone()
    }

    /// Scan the target directory and build the summary document
    pub fn scan(&mut self) -> Result<SummaryDocument> {
        let root = self.config.target_dir.clone();

        let mut tree = String::new();
        self.render_tree(&root, "", &mut tree)?;

        let mut files = Vec::new();
        self.collect_files(&root, &mut files);

        Ok(SummaryDocument { tree, files })
    }

    /// Check if an entry should be excluded from traversal and output
    pub fn should_ignore(&self, path: &Path) -> bool {
        // Never let the summary swallow a previous run's output
        if path.ends_with(&self.config.output_file) {
            return true;
        }
        self.ignore.is_ignored(path)
    }

    /// Render one directory level of the folder tree
    ///
    /// Entries are listed in lexicographic order, files and directories
    /// intermixed. Ignored entries are skipped entirely; the walk never
    /// recurses into an ignored directory.
    fn render_tree(&self, dir: &Path, prefix: &str, out: &mut String) -> Result<()> {
        let entries = match self.sorted_entries(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                out.push_str(prefix);
                out.push_str(TREE_BRANCH);
                out.push_str(PERMISSION_DENIED);
                out.push('\n');
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for (name, path) in entries {
            if self.should_ignore(&path) {
                continue;
            }
            if path.is_dir() {
                out.push_str(&format!("{prefix}{TREE_BRANCH}{name}/\n"));
                self.render_tree(&path, &format!("{prefix}{TREE_INDENT}"), out)?;
            } else {
                out.push_str(&format!("{prefix}{TREE_BRANCH}{name}\n"));
            }
        }

        Ok(())
    }

    /// Collect content sections for all non-ignored files with an allowed
    /// extension, depth-first, files of a directory before its subdirectories
    fn collect_files(&mut self, dir: &Path, sections: &mut Vec<FileSection>) {
        let entries = match self.sorted_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                // Already surfaced as a placeholder in the tree; keep walking
                eprintln!("Warning: skipping {}: {}", dir.display(), e);
                return;
            }
        };

        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|(_, path)| path.is_dir());

        for (_, path) in files {
            if self.should_ignore(&path) || !self.config.has_allowed_extension(&path) {
                continue;
            }
            sections.push(self.read_section(&path));
        }

        for (_, path) in dirs {
            if !self.should_ignore(&path) {
                self.collect_files(&path, sections);
            }
        }
    }

    /// Read one file into a summary section, recording an error message in
    /// place of content if the file cannot be read as text
    fn read_section(&mut self, path: &Path) -> FileSection {
        self.progress.inc(1);

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        // Truncate long names to avoid breaking the progress line; count in
        // chars so multibyte names never split mid-character
        let chars: Vec<char> = file_name.chars().collect();
        let display_name = if chars.len() > 40 {
            let tail: String = chars[chars.len() - 37..].iter().collect();
            format!("...{tail}")
        } else {
            file_name
        };
        self.progress
            .set_message(format!("Current file: {display_name}"));

        let rel_path = path
            .strip_prefix(&self.config.target_dir)
            .unwrap_or(path)
            .to_path_buf();
        let abs_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        let content = match fs::read_to_string(path) {
            Ok(text) => {
                let lines = text.lines().count();
                let chars = text.chars().count();
                self.statistics.files_processed += 1;
                self.statistics.total_lines += lines;
                self.statistics.total_chars += chars;
                self.statistics
                    .file_details
                    .insert(rel_path.to_string_lossy().to_string(), FileReportInfo {
                        lines,
                        chars,
                    });
                FileContent::Text(text)
            }
            Err(e) => {
                self.statistics.files_processed += 1;
                self.statistics
                    .file_details
                    .insert(rel_path.to_string_lossy().to_string(), FileReportInfo {
                        lines: 0,
                        chars: 0,
                    });
                FileContent::Error(format!("Error reading file: {e}"))
            }
        };

        FileSection {
            rel_path,
            abs_path,
            content,
        }
    }

    /// List a directory's entries sorted lexicographically by name
    fn sorted_entries(&self, dir: &Path) -> io::Result<Vec<(String, std::path::PathBuf)>> {
        let mut entries: Vec<_> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| (e.file_name().to_string_lossy().to_string(), e.path()))
            .collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(entries)
    }
}
