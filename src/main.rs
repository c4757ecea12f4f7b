// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use woke_or_not::{load_config, Catalog, CatalogQuery, Category, Config, Entity};

/// Woke or Not - browse a fixed catalog of rated entities
#[derive(Parser)]
#[command(name = "woke-or-not")]
#[command(about = "Browse a fixed catalog of entities rated woke or not woke", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (overrides $WOKE_OR_NOT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Subcommand (if not provided, starts the interactive TUI)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive browser
    Tui,

    /// Top entities for one category and polarity
    Query {
        /// companies, countries, non-profits, media, educational, government
        #[arg(long, short)]
        category: Category,

        /// Show the NOT WOKE section instead of the WOKE one
        #[arg(long)]
        not_woke: bool,

        /// Case-insensitive name filter
        #[arg(long, short, default_value = "")]
        search: String,

        /// Maximum rows (defaults to query.limit from config)
        #[arg(long, short)]
        limit: Option<usize>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Find one entity by its exact name (any case)
    Lookup {
        name: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with section sizes
    Categories,

    /// Show catalog metadata
    Info,

    /// Write the active catalog to a CSV file
    Export {
        #[arg(long, short)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config);

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path());
    let catalog = Catalog::load(catalog_path.as_deref()).with_context(|| match &catalog_path {
        Some(p) => format!("Failed to load catalog from {}", p.display()),
        None => "Failed to build built-in catalog".to_string(),
    })?;
    info!(entities = catalog.len(), fingerprint = catalog.fingerprint(), "catalog ready");

    match cli.command {
        None | Some(Commands::Tui) => run_ui_mode(&catalog, &config)?,
        Some(Commands::Query {
            category,
            not_woke,
            search,
            limit,
            json,
        }) => {
            let query = build_query(category, not_woke, search, limit, &config);
            run_query(&catalog, &query, json)?;
        }
        Some(Commands::Lookup { name, json }) => {
            if !run_lookup(&catalog, &name, json)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Categories) => run_categories(&catalog),
        Some(Commands::Info) => run_info(&catalog),
        Some(Commands::Export { output }) => run_export(&catalog, &output)?,
    }

    Ok(())
}

/// RUST_LOG wins; otherwise the configured level. Logs go to stderr.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_entity_row(entity: &Entity) {
    println!(
        "  {:<36} {:>4}%  {}",
        entity.name,
        entity.displayed_percentage(),
        entity.status_label()
    );
}

/// `--limit` wins over `query.limit` from the config
fn build_query(
    category: Category,
    not_woke: bool,
    search: String,
    limit: Option<usize>,
    config: &Config,
) -> CatalogQuery {
    CatalogQuery::new(category, !not_woke)
        .search(search)
        .limit(limit.unwrap_or(config.query.limit))
}

fn run_query(catalog: &Catalog, query: &CatalogQuery, json: bool) -> Result<()> {
    let results = catalog.query(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let heading = if query.is_woke { "WOKE" } else { "NOT WOKE" };
    println!("{} {}", heading, query.category.label().to_uppercase());
    if results.is_empty() {
        println!("  (no matches)");
    }
    for entity in results {
        print_entity_row(entity);
    }
    Ok(())
}

fn run_lookup(catalog: &Catalog, name: &str, json: bool) -> Result<bool> {
    let Some(entity) = catalog.lookup(name) else {
        if json {
            println!("null");
        } else {
            eprintln!("'{}' not found", name);
        }
        return Ok(false);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(entity)?);
    } else {
        println!("{}", entity.name);
        println!("  Category:        {}", entity.category.label());
        println!("  Status:          {}", entity.status_label());
        println!("  Woke Percentage: {}%", entity.displayed_percentage());
        if let Some(logo) = &entity.logo_ref {
            println!("  Logo:            {}", logo);
        }
        if let Some(evidence) = &entity.evidence_ref {
            println!("  Best Evidence:   {}", evidence);
        }
    }
    Ok(true)
}

fn run_categories(catalog: &Catalog) {
    println!("{:<14} {:<14} {:>5} {:>9}", "SLUG", "LABEL", "WOKE", "NOT WOKE");
    for category in Category::ALL {
        println!(
            "{:<14} {:<14} {:>5} {:>9}",
            category.slug(),
            category.label(),
            catalog.count_by(category, true),
            catalog.count_by(category, false)
        );
    }
}

fn run_info(catalog: &Catalog) {
    println!("Woke or Not v{}", woke_or_not::VERSION);
    println!("  Entities:    {}", catalog.len());
    println!("  Built at:    {}", catalog.built_at().to_rfc3339());
    println!("  Fingerprint: {}", catalog.fingerprint());
}

fn run_export(catalog: &Catalog, output: &Path) -> Result<()> {
    catalog
        .write_csv(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("✓ Wrote {} entities to {}", catalog.len(), output.display());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: &Catalog, config: &Config) -> Result<()> {
    let mut app = ui::App::new(catalog, config.query.limit);
    ui::run_ui(&mut app)?;
    info!("UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: &Catalog, _config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or query directly: woke-or-not query --category companies");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_name_reports_not_found() {
        let catalog = Catalog::builtin();
        assert!(!run_lookup(&catalog, "goy", false).unwrap());
        assert!(!run_lookup(&catalog, "goy", true).unwrap());
    }

    #[test]
    fn test_lookup_any_case_is_found() {
        let catalog = Catalog::builtin();
        assert!(run_lookup(&catalog, "GOYA", false).unwrap());
        assert!(run_lookup(&catalog, "goya", true).unwrap());
    }

    #[test]
    fn test_query_limit_defaults_to_config() {
        let catalog = Catalog::builtin();
        let config = Config::from_toml("[query]\nlimit = 3\n").unwrap();

        let query = build_query(Category::Companies, false, String::new(), None, &config);
        assert_eq!(query.limit, 3);
        assert!(!query.is_woke);

        let results = catalog.query(&query);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|e| !e.is_woke));
    }

    #[test]
    fn test_query_limit_flag_overrides_config() {
        let catalog = Catalog::builtin();
        let config = Config::from_toml("[query]\nlimit = 3\n").unwrap();

        let query = build_query(Category::Media, false, String::new(), Some(1), &config);
        assert_eq!(catalog.query(&query).len(), 1);
    }

    #[test]
    fn test_cli_parses_query_flags() {
        let cli = Cli::try_parse_from([
            "woke-or-not",
            "query",
            "--category",
            "media",
            "--not-woke",
            "--limit",
            "2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Query {
                category,
                not_woke,
                limit,
                ..
            }) => {
                assert_eq!(category, Category::Media);
                assert!(not_woke);
                assert_eq!(limit, Some(2));
            }
            _ => panic!("expected query command"),
        }
    }
}
