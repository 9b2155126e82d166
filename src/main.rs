use clap::Parser;
use quotebook::application::{init, ConfigService, QuoteBook, SyncScheduler};
use quotebook::cli::output::NO_MATCHING_QUOTES;
use quotebook::cli::{
    format_category_list, format_quote, format_quote_list, format_sync_outcome, Cli, Commands,
};
use quotebook::domain::CategoryFilter;
use quotebook::error::{QuotebookError, Result};
use quotebook::infrastructure::{
    Config, HttpRemote, MemoryStore, QuoteStore, RemoteSource, Workspace,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    quotebook::logging::setup_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Durable storage from the workspace, session storage in memory
fn open_store(workspace: &Workspace) -> QuoteStore {
    QuoteStore::new(
        Box::new(workspace.durable_store()),
        Box::new(MemoryStore::new()),
    )
}

fn parse_filter(raw: &str) -> Result<CategoryFilter> {
    raw.parse().map_err(QuotebookError::Config)
}

/// Load config and build the HTTP remote for a discovered workspace
fn connect(workspace: &Workspace) -> Result<(Config, Arc<dyn RemoteSource>)> {
    let config = workspace.load_config()?;
    let remote: Arc<dyn RemoteSource> = Arc::new(HttpRemote::from_config(&config)?);
    Ok((config, remote))
}

/// Print a formatted block, ending it with exactly one newline
fn print_block(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Open the discovered workspace from its local snapshot
fn open_local_book() -> Result<(QuoteBook, Config)> {
    let workspace = Workspace::discover()?;
    let (config, remote) = connect(&workspace)?;
    Ok((QuoteBook::open_local(open_store(&workspace), remote), config))
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, remote_url } => {
            let workspace = init::init(&path, remote_url)?;
            println!("Initialized quotebook at {}", workspace.root().display());
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            run_config(ConfigService::new(workspace), key, value, list)?;
        }
        Commands::Watch { interval } => {
            let workspace = Workspace::discover()?;
            let (config, remote) = connect(&workspace)?;
            let book = QuoteBook::open(open_store(&workspace), remote).await;
            run_watch(book, &config, interval).await?;
        }
        Commands::Show { category } => {
            let (book, _) = open_local_book()?;
            let filter = match category {
                Some(raw) => parse_filter(&raw)?,
                None => book.last_filter(),
            };
            match book.show_random(&filter) {
                Some((_, quote)) => println!("{}", format_quote(&quote)),
                None => println!("{}", NO_MATCHING_QUOTES),
            }
        }
        Commands::Add { text, category } => {
            let (mut book, _) = open_local_book()?;
            let push = book.add(&text, &category)?;
            push.wait().await;
            println!("Quote added successfully!");
        }
        Commands::List { category } => {
            let filter = parse_filter(&category)?;
            let (book, _) = open_local_book()?;
            print_block(&format_quote_list(&book.filter_by(&filter)));
        }
        Commands::Categories => {
            let (book, _) = open_local_book()?;
            print_block(&format_category_list(&book.categories()));
        }
        Commands::Sync => {
            let (mut book, config) = open_local_book()?;
            let outcome = book.sync().await;
            if !outcome.succeeded() {
                return Err(QuotebookError::Network(format!(
                    "could not fetch from {}; local quotes unchanged",
                    config.remote_url
                )));
            }
            println!("{}", format_sync_outcome(outcome));
        }
        Commands::Export { path } => {
            let (book, _) = open_local_book()?;
            let path = Workspace::resolve(&path)?;
            let count = book.export_all(&path)?;
            println!("Exported {} quotes to {}", count, path.display());
        }
        Commands::Import { path } => {
            let (mut book, _) = open_local_book()?;
            let path = Workspace::resolve(&path)?;
            let count = book.import_all(&path)?;
            println!("Imported {} quotes", count);
        }
    }

    Ok(())
}

fn run_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("remote_url = {}", config.remote_url);
        println!("sync_interval_secs = {}", config.sync_interval_secs);
        println!("fetch_limit = {}", config.fetch_limit);
        println!("request_timeout_secs = {}", config.request_timeout_secs);
        println!(
            "preserve_remote_category = {}",
            config.preserve_remote_category
        );
        println!("created = {}", config.created.to_rfc3339());
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: quotebook config [--list | <key> [<value>]]");
        println!(
            "Valid keys: remote_url, sync_interval_secs, fetch_limit, \
            request_timeout_secs, preserve_remote_category, created"
        );
    }
    Ok(())
}

async fn run_watch(book: QuoteBook, config: &Config, interval: Option<u64>) -> Result<()> {
    let period = match interval {
        Some(0) => {
            return Err(QuotebookError::Config(
                "Watch interval must be at least 1 second".to_string(),
            ))
        }
        Some(secs) => Duration::from_secs(secs),
        None => config.sync_interval(),
    };

    println!(
        "Loaded {} quotes; syncing every {}s (Ctrl-C to stop)",
        book.len(),
        period.as_secs()
    );

    let book = Arc::new(Mutex::new(book));
    let mut handle = SyncScheduler::spawn(book.clone(), period)?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            outcome = handle.next_outcome() => match outcome {
                Some(outcome) => println!("{}", format_sync_outcome(outcome)),
                None => break,
            },
        }
    }

    handle.shutdown().await;
    book.lock().await.end_session();
    Ok(())
}
