/*!
 * Command-line interface for lsindex
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::ThreadPoolBuilder;

use lsindex::config::{Args, Config};
use lsindex::report::{ReportFormat, Reporter, ScanReport};
use lsindex::scanner::Scanner;
use lsindex::writer::JsonWriter;

fn main() -> io::Result<()> {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "lsindex", &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        warn!("Failed to set thread pool size: {}", e);
    }

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(0);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos}/{len} lines ({percent}%) ⏱️  Elapsed: {elapsed_precise}  Speed: {per_sec}")
        {
            Ok(style) => bar.set_style(style),
            Err(e) => warn!("Invalid progress template: {}", e),
        }
        bar.set_prefix("📊 Parsing");
        bar
    };

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = JsonWriter::new(config.clone());

    let start_time = Instant::now();

    let records = scanner.scan()?;
    progress.set_prefix("💾 Writing");
    let documents_written = writer.write(&records)?;

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    if !config.quiet {
        let scan_report = ScanReport {
            listing: config.listing_name(),
            output_file: config.output_name(),
            duration,
            documents_written,
            statistics: scanner.get_statistics(),
        };

        Reporter::new(ReportFormat::ConsoleTable).print_report(&scan_report);
    }

    Ok(())
}
