//! CLI argument parsing and command handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::{Catalog, CatalogSource, PokeApiClient};
use crate::config::{self, CatalogConfig};
use crate::formatter::OutputFormatter;
use crate::output;
use crate::query::QueryState;
use crate::registry;
use crate::server::{self, AppState};
use crate::views::{DetailView, GalleryView, ListView};

/// Dexview: browse the PokeAPI creature catalog from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "dex",
    version,
    about = "Search, filter and page through the PokeAPI creature catalog",
    long_about = "Dexview loads the PokeAPI entry list and its 18 type groups once, \
                  then answers list, gallery and detail queries against them.\n\n\
                  Configuration is read from ~/.dexview/config.toml ([catalog] section)."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (only with --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colors and formatting
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Master-detail list of every matching entry
    ///
    /// Examples:
    ///   dex list                  # whole catalog, dex order
    ///   dex list pika             # name prefix
    ///   dex list 25 --sort name-asc
    List {
        /// Name or identifier prefix
        #[arg(default_value = "")]
        search: String,

        /// Sort mode: dex-asc, dex-desc, name-asc, name-desc
        #[arg(short, long, default_value = "dex-asc")]
        sort: String,

        /// Show this identifier as the selected entry
        #[arg(long)]
        select: Option<u32>,
    },

    /// One page of the filterable grid
    ///
    /// Examples:
    ///   dex gallery --types fire,flying
    ///   dex gallery char --page 2
    Gallery {
        /// Name or identifier prefix
        #[arg(default_value = "")]
        search: String,

        /// Sort mode: dex-asc, dex-desc, name-asc, name-desc
        #[arg(short, long, default_value = "dex-asc")]
        sort: String,

        /// Entries must belong to all of these types
        #[arg(short, long, value_delimiter = ',')]
        types: Vec<String>,

        /// Page number (1-based, clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Entries per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Detail page for one identifier, with prev/next in catalog order
    Show {
        /// Numeric identifier (e.g. 25)
        id: u32,
    },

    /// List the 18 entry types
    Types,

    /// Serve the views over HTTP
    ///
    /// Endpoints:
    ///   GET /                 list view (?q=&sort=)
    ///   GET /gallery          gallery page (?q=&sort=&types=&page=)
    ///   GET /details/{id}     detail with prev/next
    ///   GET /types, /health
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7878")]
        port: u16,

        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let config = config::load_user_config()?;
        let out = OutputOptions {
            json: self.json,
            pretty: self.pretty,
            plain: self.plain,
        };

        match self.command {
            Command::List { search, sort, select } => handle_list(&config, &out, search, &sort, select),
            Command::Gallery { search, sort, types, page, page_size } => {
                handle_gallery(&config, &out, search, &sort, &types, page, page_size)
            }
            Command::Show { id } => handle_show(&config, &out, id),
            Command::Types => handle_types(&config, &out),
            Command::Serve { port, host } => handle_serve(config, port, host),
        }
    }
}

/// Output flags shared by every command
#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    json: bool,
    pretty: bool,
    plain: bool,
}

impl OutputOptions {
    fn emit_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json_output = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", json_output);
        Ok(())
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to start async runtime")
}

/// Load the session catalog, with a spinner on stderr unless output is JSON
async fn load_catalog(source: &dyn CatalogSource, quiet: bool) -> Result<Catalog> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} [{elapsed}]")
                .context("Invalid spinner template")?,
        );
        pb.set_message("Loading catalog...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let start = Instant::now();
    let result = Catalog::load(source).await;
    pb.finish_and_clear();

    let catalog = result?;
    log::info!(
        "Catalog ready: {} entries in {:.2?}",
        catalog.entries().len(),
        start.elapsed()
    );
    Ok(catalog)
}

fn handle_list(
    config: &CatalogConfig,
    out: &OutputOptions,
    search: String,
    sort: &str,
    select: Option<u32>,
) -> Result<()> {
    log::info!("Starting list command");
    let sort_mode = server::parse_sort(Some(sort))?;

    let client = PokeApiClient::new(config)?;
    let catalog = runtime()?.block_on(load_catalog(&client, out.json))?;

    let mut view = ListView::new(&catalog);
    view.set_sort_mode(sort_mode);
    view.set_search_text(search);
    if let Some(id) = select {
        view.select(id);
    }

    let page = view.page(config);
    if out.json {
        out.emit_json(&page)
    } else {
        OutputFormatter::new(out.plain).print_list(&page);
        Ok(())
    }
}

fn handle_gallery(
    config: &CatalogConfig,
    out: &OutputOptions,
    search: String,
    sort: &str,
    types: &[String],
    page: usize,
    page_size: Option<usize>,
) -> Result<()> {
    log::info!("Starting gallery command");
    let state = QueryState::new(search, server::parse_sort(Some(sort))?)
        .with_types(registry::parse_types(types)?);

    let client = PokeApiClient::new(config)?;
    let catalog = runtime()?.block_on(load_catalog(&client, out.json))?;

    if !state.selected_types.is_empty() && !catalog.type_index().is_ready() {
        output::warn("Type data could not be loaded; --types has no effect.");
    }

    let mut view = GalleryView::new(&catalog, page_size.unwrap_or(config.page_size));
    view.set_state(state);
    view.go_to(page.saturating_sub(1));

    let snapshot = view.page(config);
    if out.json {
        out.emit_json(&snapshot)
    } else {
        OutputFormatter::new(out.plain).print_gallery(&snapshot);
        Ok(())
    }
}

fn handle_show(config: &CatalogConfig, out: &OutputOptions, id: u32) -> Result<()> {
    log::info!("Starting show command for #{}", id);

    let client = PokeApiClient::new(config)?;
    let view = runtime()?.block_on(async {
        let catalog = load_catalog(&client, out.json).await?;
        DetailView::load(&client, &catalog, id).await
    })?;

    let page = view.page(config);
    if out.json {
        out.emit_json(&page)
    } else {
        OutputFormatter::new(out.plain).print_detail(&page);
        Ok(())
    }
}

fn handle_types(config: &CatalogConfig, out: &OutputOptions) -> Result<()> {
    if out.json {
        out.emit_json(&server::types_response(config))
    } else {
        OutputFormatter::new(out.plain).print_types();
        Ok(())
    }
}

fn handle_serve(config: CatalogConfig, port: u16, host: String) -> Result<()> {
    log::info!("Starting HTTP server on {}:{}", host, port);

    let client = Arc::new(PokeApiClient::new(&config)?);

    runtime()?.block_on(async move {
        let catalog = load_catalog(&*client, false).await?;

        output::status(&format!("Serving {} entries at http://{}:{}", catalog.entries().len(), host, port));
        output::status("Endpoints: GET /  /gallery  /details/{id}  /types  /health");
        output::status("Press Ctrl+C to stop.");

        let state = AppState {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            source: client,
        };
        server::run_server(state, &host, port).await
    })
}
