use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galsync::config::Config;
use galsync::crawler::{HttpPageFetcher, IncrementalCrawler};
use galsync::matcher::ItemMatcher;
use galsync::models::{Area, CrawlPolicy, CrawlResult};
use galsync::registry::AuthorRegistry;
use galsync::service::ServiceProfile;
use galsync::utils::alphanum;

#[derive(Parser)]
#[command(
    name = "galsync",
    version,
    about = "Incremental gallery crawler that finds new submissions relative to a local archive",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Configuration file path (TOML); environment variables otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl listings and report submissions missing from the archive
    Sync {
        /// Author to crawl; all registered authors when omitted
        #[arg(short, long)]
        author: Option<String>,

        /// Listing area to crawl (gallery, scraps, journals); all when omitted
        #[arg(long)]
        area: Option<Area>,

        /// Page until no previously-unseen link at all appears, instead of
        /// stopping at the first page without undiscovered links
        #[arg(long)]
        full_resync: bool,
    },

    /// Manage the author registry
    Authors {
        #[command(subcommand)]
        action: AuthorsAction,
    },
}

#[derive(Subcommand)]
enum AuthorsAction {
    /// List registered authors with their display indices
    List,

    /// Add one or more authors
    Add {
        /// Author names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove authors by 1-based display index
    Remove {
        /// Display indices as printed by `authors list`
        #[arg(required = true)]
        indices: Vec<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };
    config.validate()?;

    match cli.command {
        Commands::Sync {
            author,
            area,
            full_resync,
        } => {
            sync(&config, author, area, full_resync).await?;
        }
        Commands::Authors { action } => {
            authors(&config, action);
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("galsync=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("galsync=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    Ok(())
}

async fn sync(
    config: &Config,
    author: Option<String>,
    area: Option<Area>,
    full_resync: bool,
) -> Result<()> {
    let profile = ServiceProfile::default();
    let registry = AuthorRegistry::load(&config.storage.registry_path, &profile.name);

    let authors: Vec<String> = match author {
        Some(author) => vec![author],
        None => registry.names().to_vec(),
    };
    if authors.is_empty() {
        anyhow::bail!("no author given and the registry is empty; add one with `galsync authors add`");
    }

    let areas = match area {
        Some(area) => vec![area],
        None => Area::all(),
    };
    let policy = if full_resync {
        CrawlPolicy::FullResync
    } else {
        CrawlPolicy::NewOnly
    };

    let entries = scan_archive(&config.storage.archive_dir, &profile.journal_suffix);
    let matcher = ItemMatcher::build_index(&profile, &entries);
    let fetcher = HttpPageFetcher::new(&config.crawler, &profile)?;
    let crawler = IncrementalCrawler::new(profile, fetcher, matcher);

    // Ctrl-C flips the cooperative cancellation flag; the crawl returns
    // whatever it has accumulated so far
    let cancel = crawler.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("cancellation requested");
            cancel.cancel();
        }
    });

    // The crawl runs on its own worker task; fetches within it stay
    // strictly sequential because the fetcher owns the session
    let worker = tokio::spawn(async move {
        let mut results: Vec<(String, Area, CrawlResult)> = Vec::new();
        'authors: for author in authors {
            for area in &areas {
                let result = crawler.crawl(&author, *area, policy).await;
                let cancelled = result.is_cancelled();
                results.push((author.clone(), *area, result));
                if cancelled {
                    break 'authors;
                }
            }
        }
        results
    });

    let results = worker.await?;
    for (author, area, result) in results {
        if result.is_cancelled() {
            println!(
                "{author}/{area}: cancelled after {} pages, {} new items found so far",
                result.pages_visited,
                result.new_count()
            );
        } else {
            println!("{author}/{area}: {} new items found", result.new_count());
        }
        for link in &result.new_links {
            println!("  {link}");
        }
    }

    Ok(())
}

fn authors(config: &Config, action: AuthorsAction) {
    let profile = ServiceProfile::default();
    let path = &config.storage.registry_path;
    let mut registry = AuthorRegistry::load(path, &profile.name);

    match action {
        AuthorsAction::List => {
            if registry.is_empty() {
                println!("no authors registered");
                return;
            }
            for (i, name) in registry.names().iter().enumerate() {
                println!("{:>4}  {name}", i + 1);
            }
        }
        AuthorsAction::Add { names } => {
            registry.add_all(names);
            registry.save(path);
            println!("{} authors registered", registry.len());
        }
        AuthorsAction::Remove { indices } => {
            registry.delete(&indices);
            registry.save(path);
            println!("{} authors registered", registry.len());
        }
    }
}

/// List the archive directory's entry names, ordered alpha-numerically.
/// A missing directory yields an empty archive.
fn scan_archive(dir: &Path, journal_suffix: &str) -> Vec<String> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "archive directory not readable, treating archive as empty");
            return Vec::new();
        }
    };

    let mut entries: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| archive_entry_name(&entry.file_name().to_string_lossy(), journal_suffix))
        .collect();
    entries.sort_by(|a, b| alphanum::compare(a, b));
    entries
}

/// Reduce a directory entry name to the token the archive index expects.
///
/// A media extension (purely alphabetic, `.png`, `.txt`) is stripped. A
/// name ending in the journal suffix is kept whole, as is a dotted
/// identifier with no real extension (`fa.1234567`): blindly taking the
/// file stem would turn a journal directory into a gallery identifier.
fn archive_entry_name(name: &str, journal_suffix: &str) -> String {
    if name.ends_with(journal_suffix) {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            stem.to_string()
        }
        _ => name.to_string(),
    }
}
