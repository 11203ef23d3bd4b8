/*!
 * Interactive prompt flow for ProjSum
 *
 * Wraps the scan in a friendly question-and-answer session: ask for the
 * project directory until a valid one is given, ask where to put the summary,
 * then confirm before writing. Purely presentational; the scan itself never
 * depends on anything collected here beyond the two paths.
 */

use std::fs;
use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::config::DEFAULT_OUTPUT_NAME;
use crate::error::Result;

/// Visual theme for all prompts
fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print the welcome banner
pub fn welcome() {
    println!("🦛 Welcome to ProjSum! Let's summarize your project.");
}

/// Ask for the project directory until an existing directory is given
pub fn ask_target_dir(initial: &str) -> Result<PathBuf> {
    let theme = theme();
    let mut suggestion = initial.to_string();

    loop {
        let answer: String = Input::with_theme(&theme)
            .with_prompt("Enter the path to your project directory (absolute path preferred)")
            .with_initial_text(suggestion.as_str())
            .interact_text()?;
        suggestion.clear();

        let path = PathBuf::from(answer.trim());
        if !path.exists() {
            println!("⚠️ Oops! That path doesn't exist. Let's try again!");
            continue;
        }
        if !path.is_dir() {
            println!("😕 That's not a directory. We need a folder, not a file!");
            continue;
        }

        // Resolve to an absolute path now that it is known to exist
        return Ok(fs::canonicalize(&path).unwrap_or(path));
    }
}

/// Ask for the output file path, defaulting to one inside the target directory
pub fn ask_output_file(target_dir: &Path) -> Result<PathBuf> {
    let default = target_dir.join(DEFAULT_OUTPUT_NAME).display().to_string();
    let answer: String = Input::with_theme(&theme())
        .with_prompt("Enter the path for the output summary file")
        .default(default)
        .interact_text()?;
    Ok(PathBuf::from(answer.trim()))
}

/// Confirm whether to proceed with the summary
pub fn confirm_summarize(file_count: u64) -> Result<bool> {
    let proceed = Confirm::with_theme(&theme())
        .with_prompt(format!(
            "Found {file_count} files to summarize. Ready to chomp through them? 😃"
        ))
        .default(true)
        .interact()?;
    Ok(proceed)
}

/// Print the success message
pub fn success(output_file: &Path) {
    println!(
        "🎉 Woohoo! Summary has been saved to {}",
        output_file.display()
    );
}

/// Print the failure message for an error during summarization
pub fn failure(error: &dyn std::fmt::Display) {
    println!("😞 Oh no! Something went wrong: {error}");
}

/// Print the goodbye message for a declined run
pub fn goodbye() {
    println!("No problem! Going back to sleep. 😴 Goodbye!");
}
