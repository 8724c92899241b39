use clap::Parser;
use colored::Colorize;
use maskfind::{search, ScanResults, SearchAlgorithm, SearchConfig, SearchError};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Concurrent mask search over the lines of a text file",
    long_about = None
)]
struct Cli {
    /// File whose lines will be scanned
    file: PathBuf,

    /// Mask to search for, with up to two '?' wildcards
    mask: String,

    /// Search algorithm: 0 = naive, 1 = Boyer-Moore, 2 = Boyer-Moore-Horspool
    #[arg(short = 'a', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    algorithm: u8,

    /// Number of worker threads
    #[arg(short = 'j', long)]
    threads: Option<NonZeroUsize>,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show only the match count
    #[arg(short, long)]
    stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    if let Err(err) = run() {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SearchError> {
    let cli = Cli::parse();

    let algorithm = SearchAlgorithm::from_id(cli.algorithm)?;

    let file_config = SearchConfig::load_from(cli.config.as_deref())
        .map_err(|e| SearchError::config_error(e.to_string()))?;

    let cli_config = SearchConfig {
        mask: cli.mask,
        input_path: cli.file,
        algorithm,
        thread_count: cli
            .threads
            .or_else(|| NonZeroUsize::new(num_cpus::get()))
            .unwrap_or(NonZeroUsize::MIN),
        log_level: cli.log_level,
    };
    let config = file_config.merge_with_cli(cli_config);

    init_logging(&config.log_level);

    let results = search(&config)?;
    print_scan_results(&results, cli.stats);
    Ok(())
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level; logs go to stderr so stdout
    // stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the total count, then one `<line> <column> <needle>` row per
/// occurrence. Line ordinals are 0-based, columns 1-based.
fn print_scan_results(results: &ScanResults, stats_only: bool) {
    println!("{}", results.occurrences.len());
    if stats_only {
        return;
    }
    for occurrence in &results.occurrences {
        println!(
            "{} {} {}",
            occurrence.line, occurrence.column, occurrence.needle
        );
    }
}

fn report_error(err: &SearchError) {
    match err {
        // Preparation carries independent problems; show each on its own line
        SearchError::Preparation(errors) => {
            for error in errors {
                eprintln!("{} {}", "error:".red().bold(), error);
            }
        }
        _ => eprintln!("{} {}", "error:".red().bold(), err),
    }
}
