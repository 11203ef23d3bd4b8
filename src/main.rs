/*!
 * Command-line interface for ProjSum
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projsum::config::{Args, Config};
use projsum::error::Result;
use projsum::ignore::IgnoreList;
use projsum::prompt;
use projsum::report::{ReportFormat, Reporter, ScanReport};
use projsum::scanner::Scanner;
use projsum::utils::count_files;
use projsum::writer::MarkdownWriter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "projsum", &mut io::stdout());
        return;
    }

    if let Err(e) = run(args) {
        prompt::failure(&e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_args(args);

    if config.non_interactive {
        config.validate()?;
    } else {
        prompt::welcome();
        config.target_dir = prompt::ask_target_dir(&config.target_dir.display().to_string())?;
        config.output_file = prompt::ask_output_file(&config.target_dir)?;
    }

    // Build the ignore list: defaults, CLI patterns, root .gitignore
    let ignore = IgnoreList::load(&config.target_dir, &config.ignore_patterns);

    // Count files up front for the confirmation prompt and progress tracking
    let total_files = count_files(&config, &ignore)?;

    if config.non_interactive {
        println!("🔎 Found {total_files} files to summarize");
    } else if !prompt::confirm_summarize(total_files)? {
        prompt::goodbye();
        return Ok(());
    }

    // Create progress bar
    let progress = ProgressBar::new(total_files);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Processing");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Create scanner and writer
    let mut scanner = Scanner::new(config.clone(), ignore, Arc::new(progress.clone()));
    let writer = MarkdownWriter::new(config.clone());

    // Time both the scan and the write
    let start_time = Instant::now();
    let document = scanner.scan()?;
    writer.write(&document)?;
    let total_duration = start_time.elapsed();

    progress.finish_and_clear();

    // Prepare and print the scan report
    let scanner_stats = scanner.get_statistics();
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        files_processed: scanner_stats.files_processed,
        total_lines: scanner_stats.total_lines,
        total_chars: scanner_stats.total_chars,
        file_details: scanner_stats.file_details,
    };
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&scan_report);

    prompt::success(&config.output_file);

    Ok(())
}
