/*!
 * Tests for ProjSum functionality
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::Config;
use crate::ignore::IgnoreList;
use crate::scanner::Scanner;
use crate::types::{FileContent, SummaryDocument};
use crate::utils::count_files;
use crate::writer::MarkdownWriter;

// Helper to build a config for a test directory
fn test_config(dir: &Path) -> Config {
    Config {
        target_dir: dir.to_path_buf(),
        output_file: dir.join("project_summary.md"),
        ignore_patterns: vec![],
        allowed_extensions: crate::config::DEFAULT_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect(),
        non_interactive: true,
    }
}

// Helper to run a full scan over a test directory
fn scan(dir: &Path) -> io::Result<SummaryDocument> {
    let config = test_config(dir);
    let ignore = IgnoreList::load(dir, &config.ignore_patterns);
    let mut scanner = Scanner::new(config, ignore, Arc::new(ProgressBar::hidden()));
    scanner
        .scan()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

// Helper function to create a test directory structure
fn setup_test_directory() -> io::Result<tempfile::TempDir> {
    let temp_dir = tempdir()?;

    fs::create_dir(temp_dir.path().join("dir1"))?;
    fs::create_dir(temp_dir.path().join("dir1").join("subdir"))?;

    let mut file1 = File::create(temp_dir.path().join("file1.py"))?;
    writeln!(file1, "print('hello')")?;

    let mut file2 = File::create(temp_dir.path().join("dir1").join("file2.js"))?;
    writeln!(file2, "console.log('hi');")?;

    let mut file3 = File::create(
        temp_dir
            .path()
            .join("dir1")
            .join("subdir")
            .join("file3.css"),
    )?;
    writeln!(file3, "body {{ margin: 0; }}")?;

    // Entries that the defaults must exclude
    fs::create_dir(temp_dir.path().join(".git"))?;
    File::create(temp_dir.path().join(".git").join("config"))?;
    fs::create_dir(temp_dir.path().join("node_modules"))?;
    File::create(temp_dir.path().join("node_modules").join("b.js"))?;

    // Not an allowed extension: listed in the tree, absent from content
    let mut readme = File::create(temp_dir.path().join("README.md"))?;
    writeln!(readme, "# readme")?;

    Ok(temp_dir)
}

// --- Ignore matcher ---

#[test]
fn test_directory_pattern_matches_all_forms() {
    let list = IgnoreList::new(&[]);

    assert!(list.is_ignored(Path::new("node_modules/x")));
    assert!(list.is_ignored(Path::new("./node_modules/x")));
    assert!(list.is_ignored(Path::new("a/node_modules/x")));
    assert!(list.is_ignored(Path::new("/tmp/proj/node_modules/b.js")));
}

#[test]
fn test_unmatched_path_is_not_ignored() {
    let list = IgnoreList::new(&[]);

    assert!(!list.is_ignored(Path::new("src/main.py")));
    assert!(!list.is_ignored(Path::new("a/b/style.css")));
}

#[test]
fn test_defaults_apply_without_gitignore() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let list = IgnoreList::load(temp_dir.path(), &[]);

    assert!(list.is_ignored(Path::new("__pycache__/mod.pyc")));
    assert!(list.is_ignored(Path::new("app/cache.pyc")));
    assert!(list.is_ignored(Path::new(".vscode/settings.json")));

    Ok(())
}

#[test]
fn test_gitignore_lines_are_added_to_defaults() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let mut gitignore = File::create(temp_dir.path().join(".gitignore"))?;
    writeln!(gitignore, "# build artifacts")?;
    writeln!(gitignore)?;
    writeln!(gitignore, "secrets/")?;

    let list = IgnoreList::load(temp_dir.path(), &[]);

    assert!(list.is_ignored(Path::new("secrets/key.pem")));
    // Defaults are still present
    assert!(list.is_ignored(Path::new("node_modules/b.js")));
    // Comments and blanks are not patterns
    assert!(!list.patterns().iter().any(|p| p.starts_with('#')));
    assert!(!list.patterns().iter().any(|p| p.is_empty()));

    Ok(())
}

#[test]
fn test_substring_pattern_is_loose() {
    // Plain patterns match anywhere in the path. `log` matching
    // `catalog.txt` is the documented over-matching behavior.
    let list = IgnoreList::new(&["log".to_string()]);

    assert!(list.is_ignored(Path::new("catalog.txt")));
    assert!(list.is_ignored(Path::new("src/log/out.txt")));
}

#[test]
fn test_glob_pattern_matches_file_name_at_any_depth() {
    let list = IgnoreList::new(&[]);

    assert!(list.is_ignored(Path::new("secret.log")));
    assert!(list.is_ignored(Path::new("logs/app.log")));
    assert!(list.is_ignored(Path::new("x.swp"))); // *.sw?
    assert!(!list.is_ignored(Path::new("x.swap")));
}

// --- Scanner ---

#[test]
fn test_scan_includes_only_allowed_files() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("a.py"), "x=1")?;
    fs::create_dir(temp_dir.path().join("node_modules"))?;
    fs::write(temp_dir.path().join("node_modules").join("b.js"), "var b;")?;
    File::create(temp_dir.path().join(".gitignore"))?;

    let document = scan(temp_dir.path())?;

    assert_eq!(document.files.len(), 1);
    assert_eq!(document.files[0].rel_path, PathBuf::from("a.py"));
    assert_eq!(
        document.files[0].content,
        FileContent::Text("x=1".to_string())
    );

    assert!(document.tree.contains("a.py"));
    assert!(!document.tree.contains("node_modules"));
    assert!(!document.tree.contains("b.js"));

    Ok(())
}

#[test]
fn test_log_files_are_excluded_everywhere() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    fs::write(temp_dir.path().join("secret.log"), "password=hunter2")?;

    let document = scan(temp_dir.path())?;

    assert!(!document.tree.contains("secret.log"));
    assert!(document
        .files
        .iter()
        .all(|f| f.rel_path != PathBuf::from("secret.log")));

    Ok(())
}

#[test]
fn test_tree_nesting_and_directory_markers() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;

    let document = scan(temp_dir.path())?;

    // Directories carry a trailing slash, nesting is shown by the indent
    assert!(document.tree.contains("├── dir1/\n"));
    assert!(document.tree.contains("│   ├── file2.js\n"));
    assert!(document.tree.contains("│   ├── subdir/\n"));
    assert!(document.tree.contains("│   │   ├── file3.css\n"));
    // The ignored .git directory and its children are absent entirely
    assert!(!document.tree.contains(".git"));
    assert!(!document.tree.contains("config"));

    Ok(())
}

#[test]
fn test_content_order_is_per_directory_depth_first() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("z.py"), "z")?;
    fs::write(temp_dir.path().join("a.py"), "a")?;
    fs::create_dir(temp_dir.path().join("m"))?;
    fs::write(temp_dir.path().join("m").join("c.py"), "c")?;
    fs::create_dir(temp_dir.path().join("b"))?;
    fs::write(temp_dir.path().join("b").join("d.py"), "d")?;

    let document = scan(temp_dir.path())?;
    let order: Vec<PathBuf> = document.files.iter().map(|f| f.rel_path.clone()).collect();

    assert_eq!(
        order,
        vec![
            PathBuf::from("a.py"),
            PathBuf::from("z.py"),
            PathBuf::from("b/d.py"),
            PathBuf::from("m/c.py"),
        ]
    );

    Ok(())
}

#[test]
fn test_long_multibyte_file_name_is_summarized() -> io::Result<()> {
    let temp_dir = tempdir()?;
    // More bytes than the 40-char progress display cut, with multibyte
    // characters around the truncation point
    let name = format!("{}a.py", "é".repeat(20));
    fs::write(temp_dir.path().join(&name), "x=1")?;
    // Long enough in chars to take the truncation branch as well
    let long_name = format!("{}.py", "é".repeat(45));
    fs::write(temp_dir.path().join(&long_name), "y=2")?;

    let document = scan(temp_dir.path())?;

    assert_eq!(document.files.len(), 2);
    let section = document
        .files
        .iter()
        .find(|f| f.rel_path == PathBuf::from(&name))
        .expect("multibyte file section missing");
    assert_eq!(section.content, FileContent::Text("x=1".to_string()));
    assert!(document
        .files
        .iter()
        .any(|f| f.rel_path == PathBuf::from(&long_name)));

    Ok(())
}

#[test]
fn test_unreadable_file_records_error_and_continues() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("good.py"), "ok")?;
    // Invalid UTF-8 under an allowed extension
    fs::write(temp_dir.path().join("bad.py"), [0xff, 0xfe, 0x00, 0x9f])?;

    let document = scan(temp_dir.path())?;

    assert_eq!(document.files.len(), 2);
    let bad = document
        .files
        .iter()
        .find(|f| f.rel_path == PathBuf::from("bad.py"))
        .expect("bad.py section missing");
    match &bad.content {
        FileContent::Error(msg) => assert!(msg.starts_with("Error reading file:")),
        FileContent::Text(_) => panic!("expected a read error for bad.py"),
    }
    let good = document
        .files
        .iter()
        .find(|f| f.rel_path == PathBuf::from("good.py"))
        .expect("good.py section missing");
    assert_eq!(good.content, FileContent::Text("ok".to_string()));

    Ok(())
}

#[test]
fn test_extension_filter_is_tree_only_for_other_files() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;

    let document = scan(temp_dir.path())?;

    assert!(document.tree.contains("README.md"));
    assert!(document
        .files
        .iter()
        .all(|f| f.rel_path != PathBuf::from("README.md")));

    Ok(())
}

#[test]
fn test_count_matches_content_pass() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;

    let config = test_config(temp_dir.path());
    let ignore = IgnoreList::load(temp_dir.path(), &config.ignore_patterns);
    let count = count_files(&config, &ignore)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let document = scan(temp_dir.path())?;
    assert_eq!(count as usize, document.files.len());

    Ok(())
}

#[test]
fn test_previous_output_file_is_excluded() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    fs::write(temp_dir.path().join("project_summary.md"), "# old summary")?;

    let document = scan(temp_dir.path())?;

    assert!(!document.tree.contains("project_summary.md"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_permission_denied_directory_is_placeholder() -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("visible.py"), "v")?;
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked)?;
    fs::write(locked.join("hidden.py"), "h")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Running as root bypasses permission bits; nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let result = scan(temp_dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    let document = result?;

    assert!(document.tree.contains("[Permission Denied]"));
    // Siblings are still listed and summarized
    assert!(document.tree.contains("visible.py"));
    assert!(document
        .files
        .iter()
        .any(|f| f.rel_path == PathBuf::from("visible.py")));
    // The unreadable directory's children never appear
    assert!(!document.tree.contains("hidden.py"));

    Ok(())
}

// --- Writer ---

#[test]
fn test_markdown_output_structure() -> io::Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = test_config(temp_dir.path());
    let ignore = IgnoreList::load(temp_dir.path(), &config.ignore_patterns);
    let mut scanner = Scanner::new(config.clone(), ignore, Arc::new(ProgressBar::hidden()));
    let writer = MarkdownWriter::new(config.clone());

    let document = scanner
        .scan()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    writer
        .write(&document)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let output = fs::read_to_string(&config.output_file)?;

    assert!(output.starts_with("# Project Summary\n"));
    assert!(output.contains("## Folder Structure\n```\n"));
    assert!(output.contains("## File: file1.py\n"));
    assert!(output.contains("**Absolute Path:** "));
    assert!(output.contains("**Content:**\n```\nprint('hello')\n"));
    assert!(output.contains("## File: dir1/file2.js\n"));

    // Every fenced block is closed
    let fences = output.matches("```").count();
    assert_eq!(fences % 2, 0, "unbalanced code fences in output");

    Ok(())
}

#[test]
fn test_writer_emits_read_errors_inline() -> io::Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("bad.py"), [0xff, 0xfe])?;

    let config = test_config(temp_dir.path());
    let ignore = IgnoreList::load(temp_dir.path(), &config.ignore_patterns);
    let mut scanner = Scanner::new(config.clone(), ignore, Arc::new(ProgressBar::hidden()));
    let writer = MarkdownWriter::new(config.clone());

    let document = scanner
        .scan()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    writer
        .write(&document)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let output = fs::read_to_string(&config.output_file)?;
    assert!(output.contains("## File: bad.py"));
    assert!(output.contains("Error reading file:"));

    Ok(())
}

// --- Config ---

#[test]
fn test_validate_rejects_missing_or_non_directory_target() -> io::Result<()> {
    let temp_dir = tempdir()?;

    let mut config = test_config(&temp_dir.path().join("does-not-exist"));
    config.output_file = temp_dir.path().join("out.md");
    assert!(config.validate().is_err());

    let file_path = temp_dir.path().join("a-file.py");
    fs::write(&file_path, "x")?;
    let mut config = test_config(&file_path);
    config.output_file = temp_dir.path().join("out.md");
    assert!(config.validate().is_err());

    let config = test_config(temp_dir.path());
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_extension_match_is_case_sensitive() {
    let temp_dir = tempdir().expect("tempdir");
    let config = test_config(temp_dir.path());

    assert!(config.has_allowed_extension(Path::new("a.py")));
    assert!(config.has_allowed_extension(Path::new("deep/dir/a.html")));
    assert!(!config.has_allowed_extension(Path::new("a.PY")));
    assert!(!config.has_allowed_extension(Path::new("a.rs")));
    assert!(!config.has_allowed_extension(Path::new("no_extension")));
}
