mod echo;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cluecards_core::{FetchConfig, SeasonSummary, download_season, parse_archive, parse_season};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback when no seasons are requested explicitly.
const LATEST_SEASON: u32 = 41;

/// Scrape trivia-show archive seasons into normalized CSV files
#[derive(Parser, Debug)]
#[command(name = "cluecards")]
#[command(author = "Cluecards Contributors")]
#[command(version)]
#[command(about = "Scrape trivia-show archives into study-card CSVs", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose progress output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download season pages into the local archive
    Download {
        /// Seasons to download, comma-separated (default: latest season)
        #[arg(short, long, value_delimiter = ',', value_name = "NUMS")]
        seasons: Vec<u32>,

        /// Directory for downloaded pages
        #[arg(long, default_value = "season-archive", value_name = "DIR")]
        archive_dir: PathBuf,

        /// HTTP timeout in seconds
        #[arg(long, default_value = "30", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },
    /// Parse downloaded season pages into one CSV per season
    Parse {
        /// Directory of downloaded pages
        #[arg(long, default_value = "season-archive", value_name = "DIR")]
        archive_dir: PathBuf,

        /// Output directory for season CSVs
        #[arg(long, default_value = "parsed-csv", value_name = "DIR")]
        out_dir: PathBuf,

        /// Parse a single season instead of every season found
        #[arg(long, value_name = "NUM")]
        season: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    match args.command {
        Command::Download { seasons, archive_dir, timeout, user_agent } => {
            let seasons = if seasons.is_empty() { vec![LATEST_SEASON] } else { seasons };
            let config = FetchConfig {
                timeout,
                user_agent: user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
                ..FetchConfig::default()
            };
            download(&seasons, &archive_dir, &config, args.verbose).await
        }
        Command::Parse { archive_dir, out_dir, season } => parse(&archive_dir, &out_dir, season, args.verbose),
    }
}

/// Download the requested seasons concurrently. A failed season is
/// reported and does not abort its siblings.
async fn download(seasons: &[u32], archive_dir: &Path, config: &FetchConfig, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(1, 2, &format!("Downloading {} season(s)", seasons.len()));
    }

    let mut tasks = tokio::task::JoinSet::new();
    for &season in seasons {
        let config = config.clone();
        let dir = archive_dir.to_path_buf();
        tasks.spawn(async move { (season, download_season(&dir, season, &config).await) });
    }

    let mut failed = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (season, result) = joined.context("download task panicked")?;
        match result {
            Ok(summary) => {
                echo::print_success(&format!(
                    "Season {}: {} saved, {} skipped, {} failed ({} links)",
                    season,
                    summary.saved,
                    summary.skipped,
                    summary.failures.len(),
                    summary.found
                ));
                for (episode, err) in &summary.failures {
                    echo::print_warning(&format!("Episode {}: {}", episode, err));
                }
            }
            Err(err) => {
                failed += 1;
                echo::print_error(&format!("Season {}: {}", season, err));
            }
        }
    }

    if verbose {
        echo::print_step(2, 2, "Download finished");
    }
    anyhow::ensure!(failed == 0, "{failed} season(s) failed to download");
    Ok(())
}

/// Parse the archive (or one season of it) into CSVs and report results.
fn parse(archive_dir: &Path, out_dir: &Path, season: Option<u32>, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        echo::print_step(1, 2, &format!("Parsing archive at {}", archive_dir.display().bright_white()));
    }

    let summaries = match season {
        Some(season) => {
            let summary = parse_season(archive_dir, out_dir, season)
                .with_context(|| format!("Failed to parse season {}", season))?;
            vec![summary]
        }
        None => parse_archive(archive_dir, out_dir)
            .with_context(|| format!("Failed to parse archive: {}", archive_dir.display()))?,
    };

    if summaries.is_empty() {
        echo::print_warning("No seasons found in archive");
        return Ok(());
    }

    for summary in &summaries {
        report_season(summary);
    }

    if verbose {
        let records: usize = summaries.iter().map(|s| s.records).sum();
        echo::print_step(2, 2, "Parsing finished");
        echo::print_info(&format!(
            "{} record(s) across {} season(s) written to {}",
            records,
            summaries.len(),
            out_dir.display()
        ));
    }
    Ok(())
}

fn report_season(summary: &SeasonSummary) {
    echo::print_success(&format!(
        "Season {}: {} episode(s), {} record(s), {} failure(s)",
        summary.season,
        summary.episodes,
        summary.records,
        summary.failures.len()
    ));
    for (path, err) in &summary.failures {
        echo::print_warning(&format!("{}: {}", path.display(), err));
    }
}
