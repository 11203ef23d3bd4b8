/*!
 * Utility functions for ProjSum
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::Result;
use crate::ignore::IgnoreList;
use crate::scanner::Scanner;

/// Count the files the content pass would emit, for reporting before a run
pub fn count_files(config: &Config, ignore: &IgnoreList) -> Result<u64> {
    let scanner = Scanner::new(
        config.clone(),
        ignore.clone(),
        Arc::new(ProgressBar::hidden()),
    );
    let mut count = 0;
    count_in(&scanner, config, &config.target_dir, &mut count);
    Ok(count)
}

fn count_in(scanner: &Scanner, config: &Config, dir: &Path, count: &mut u64) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        // Unreadable directories are skipped, same as the content pass
        return;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if scanner.should_ignore(&path) {
            continue;
        }
        if path.is_dir() {
            count_in(scanner, config, &path, count);
        } else if config.has_allowed_extension(&path) {
            *count += 1;
        }
    }
}
