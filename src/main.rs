//! biblos CLI: browse a book catalog from the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use biblos::catalog::{read_catalog, Catalog};
use biblos::config::Config;
use biblos::page::{Window, BOOKS_PER_PAGE};
use biblos::preview::{BookDetail, Preview};
use biblos::query::{Criteria, ANY};
use biblos::session::BrowseSession;

#[derive(Parser)]
#[command(name = "biblos", version, about = "Book catalog browser")]
struct Cli {
    /// Path to the catalog JSON payload (overrides the config file).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to a biblos.toml; defaults to the one in the working directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and page through the matches.
    Search {
        /// Title phrase (case-insensitive substring match).
        title: Option<String>,

        /// Restrict to one author id; "any" lifts the restriction.
        #[arg(long, default_value = ANY)]
        author: String,

        /// Restrict to one genre id; "any" lifts the restriction.
        #[arg(long, default_value = ANY)]
        genre: String,

        /// How many result pages to print (overrides the config file).
        #[arg(long)]
        pages: Option<u32>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show one book by id.
    Show {
        /// Book id.
        id: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List author ids and display names for filter options.
    Authors,

    /// List genre ids and display names for filter options.
    Genres,

    /// Show catalog statistics.
    Info,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir().into_diagnostic()?;
            Config::discover_in(&cwd)?
        }
    };
    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog.clone());

    match cli.command {
        Commands::Search {
            title,
            author,
            genre,
            pages,
            json,
        } => {
            let catalog = Arc::new(read_catalog(&catalog_path)?);
            let mut session = BrowseSession::new(Arc::clone(&catalog));
            let criteria = Criteria::from_form(title.unwrap_or_default(), &author, &genre);
            let pages = pages.unwrap_or(config.pages).max(1);

            let (mut rows, mut remaining, no_results) = {
                let window = session.submit(&criteria);
                (
                    previews(&window, &catalog),
                    window.remaining(),
                    window.no_results(),
                )
            };
            let mut shown = 1;
            while remaining > 0 && shown < pages {
                let (chunk, rest) = {
                    let window = session.show_more();
                    (previews(&window, &catalog), window.remaining())
                };
                rows.extend(chunk);
                remaining = rest;
                shown += 1;
            }
            let total = session.match_count();

            if json {
                let report = SearchReport {
                    total,
                    remaining,
                    items: rows,
                };
                println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
            } else if no_results {
                println!("No results found. Your filters might be too narrow.");
            } else {
                println!("Matches ({total}):");
                for (i, preview) in rows.iter().enumerate() {
                    println!(
                        "  {}. \"{}\" by {} [{}]",
                        i + 1,
                        preview.title,
                        preview.author,
                        preview.id
                    );
                }
                if remaining > 0 {
                    println!("\nShow more ({remaining})");
                }
            }
        }

        Commands::Show { id, json } => {
            let catalog = read_catalog(&catalog_path)?;
            let Some(book) = catalog.find_by_id(&id) else {
                miette::bail!("no book with id \"{id}\" in the catalog");
            };
            let detail = BookDetail::for_book(book, &catalog);

            if json {
                println!("{}", serde_json::to_string_pretty(&detail).into_diagnostic()?);
            } else {
                let genres: Vec<&str> = book
                    .genres
                    .iter()
                    .map(|g| catalog.genres().resolve(g).unwrap_or("unknown"))
                    .collect();
                println!("Book: \"{}\"", detail.title);
                println!("  {}", detail.subtitle);
                println!("  id:     {}", book.id);
                println!("  genres: {}", genres.join(", "));
                println!("  image:  {}", detail.image);
                if !detail.description.is_empty() {
                    println!("\n{}", detail.description);
                }
            }
        }

        Commands::Authors => {
            let catalog = read_catalog(&catalog_path)?;
            println!("Authors ({}):", catalog.authors().len());
            println!("  {ANY} - All Authors");
            for (id, name) in catalog.authors().iter() {
                println!("  {id} - {name}");
            }
        }

        Commands::Genres => {
            let catalog = read_catalog(&catalog_path)?;
            println!("Genres ({}):", catalog.genres().len());
            println!("  {ANY} - All Genres");
            for (id, name) in catalog.genres().iter() {
                println!("  {id} - {name}");
            }
        }

        Commands::Info => {
            let catalog = read_catalog(&catalog_path)?;
            println!("Catalog: {}", catalog_path.display());
            println!("  books:   {}", catalog.len());
            println!("  authors: {}", catalog.authors().len());
            println!("  genres:  {}", catalog.genres().len());
            println!("  pages:   {}", catalog.len().div_ceil(BOOKS_PER_PAGE));
        }
    }

    Ok(())
}

fn previews(window: &Window<'_>, catalog: &Catalog) -> Vec<Preview> {
    window
        .items()
        .iter()
        .map(|b| Preview::for_book(b, catalog))
        .collect()
}

#[derive(Serialize)]
struct SearchReport {
    total: usize,
    remaining: usize,
    items: Vec<Preview>,
}
