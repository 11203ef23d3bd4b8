/*!
 * Ignore pattern handling for ProjSum
 *
 * Holds the default ignore set, parses `.gitignore`, and decides whether a
 * candidate path should be excluded from traversal and output.
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, MAIN_SEPARATOR};

use glob_match::glob_match;
use once_cell::sync::Lazy;

/// Default patterns to ignore, applied on every run regardless of whether a
/// `.gitignore` file is present.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control
        ".git/",
        // Environments
        ".env",
        "env/",
        "venv/",
        // Dependencies
        "node_modules/",
        // Python bytecode
        "__pycache__/",
        "*.pyc",
        "*.pyo",
        "*.pyd",
        // IDEs & editors
        ".vscode/",
        ".idea/",
        "*.suo",
        "*.ntvs*",
        "*.njsproj",
        "*.sln",
        "*.sw?",
        // Logs, databases, backups
        "*.log",
        "*.sqlite",
        "*.db",
        "*.bak",
    ]
});

/// Ordered list of ignore patterns for one run.
///
/// A pattern's kind is re-derived from its shape at match time: a trailing
/// separator marks a directory pattern, a `*` marks a glob pattern, anything
/// else is a plain substring pattern. Matching is any-match and
/// order-independent.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<String>,
}

impl IgnoreList {
    /// Build a list from the default set plus explicit extra patterns.
    pub fn new(extra_patterns: &[String]) -> Self {
        let mut patterns: Vec<String> =
            DEFAULT_IGNORE.iter().map(|p| p.to_string()).collect();
        patterns.extend(extra_patterns.iter().cloned());
        Self { patterns }
    }

    /// Build a list from the defaults, extra patterns, and the `.gitignore`
    /// file at `root` if one exists.
    ///
    /// Only non-blank lines that do not start with `#` are taken. Negation
    /// (`!`) and anchoring are not supported; this is a deliberate subset of
    /// real gitignore semantics, not a full implementation.
    pub fn load(root: &Path, extra_patterns: &[String]) -> Self {
        let mut list = Self::new(extra_patterns);
        let gitignore = root.join(".gitignore");

        if let Ok(file) = File::open(&gitignore) {
            for line in BufReader::new(file).lines() {
                let Ok(line) = line else { break };
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    list.patterns.push(trimmed.to_string());
                }
            }
        }

        list
    }

    /// Append a single pattern.
    pub fn add(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
    }

    /// Configured patterns, defaults first.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether `path` matches any configured pattern.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| pattern_matches(p, &path_str))
    }
}

/// Match a single pattern against a path string.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    if let Some(dir_name) = pattern.strip_suffix(MAIN_SEPARATOR) {
        // Directory pattern: matches path prefixes and any path passing
        // through a same-named directory at any depth.
        path.starts_with(pattern)
            || path.strip_prefix("./").is_some_and(|p| p.starts_with(pattern))
            || path.split(MAIN_SEPARATOR).any(|seg| seg == dir_name)
    } else if pattern.contains('*') {
        // Glob pattern. Engine choice: the `glob-match` crate, where `*`
        // does not cross separator boundaries. Patterns without a separator
        // are matched against the final path segment only, so `*.log`
        // matches `logs/app.log`; patterns containing a separator are
        // matched against the whole path string.
        if pattern.contains(MAIN_SEPARATOR) {
            glob_match(pattern, path)
        } else {
            glob_match(pattern, last_segment(path))
        }
    } else {
        // Plain substring pattern. Known over-matcher: `log` also matches
        // `catalog.txt`. Preserved for compatibility with the established
        // behavior; do not tighten.
        path.contains(pattern) || path.contains(&format!("/{pattern}"))
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit(MAIN_SEPARATOR).next().unwrap_or(path)
}
