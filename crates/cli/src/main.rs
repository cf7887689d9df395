mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arrmap_core::{
    load_config, validate_config, ConfirmPrompt, HttpTransport, MappingClient, MetadataController,
    Notifier, StatsSummary, TableRow, Transport, ViewState,
};

use ui::{StderrNotifier, TerminalPrompt};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("ARRMAP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    validate_config(&config).context("Configuration validation failed")?;

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.remote.clone()));
    let client = MappingClient::new(transport);
    let notifier: Arc<dyn Notifier> = Arc::new(StderrNotifier);
    let confirm: Arc<dyn ConfirmPrompt> = Arc::new(TerminalPrompt);
    let mut controller = MetadataController::new(client, notifier, confirm);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("stats") => cmd_stats(&mut controller).await,
        Some("list") => {
            let query = args.get(1).map(String::as_str).unwrap_or("");
            cmd_list(&mut controller, query).await
        }
        Some("set") => match (args.get(1), args.get(2)) {
            (Some(infohash), Some(arr_name)) => cmd_set(&mut controller, infohash, arr_name).await,
            _ => {
                print_usage();
                bail!("set requires <infohash> <arr_name>");
            }
        },
        Some("delete") => match args.get(1) {
            Some(infohash) => cmd_delete(&mut controller, infohash).await,
            None => {
                print_usage();
                bail!("delete requires <infohash>");
            }
        },
        _ => {
            print_usage();
            Ok(())
        }
    }
}

/// Refresh both snapshots, bailing when the controller reports an error.
async fn refresh(controller: &mut MetadataController) -> Result<()> {
    controller.on_refresh_requested().await;
    if let ViewState::Error(message) = controller.state() {
        bail!("{}", message);
    }
    Ok(())
}

async fn cmd_stats(controller: &mut MetadataController) -> Result<()> {
    refresh(controller).await?;

    let stats = controller.stats().context("No stats snapshot")?;
    let summary = StatsSummary::new(stats);
    println!("Total mappings: {}", summary.total);
    println!(
        "Arr instances:  {} ({})",
        summary.arr_count,
        summary.arr_list()
    );
    Ok(())
}

async fn cmd_list(controller: &mut MetadataController, query: &str) -> Result<()> {
    refresh(controller).await?;
    controller.on_search_changed(query);
    print_table(controller.table());
    Ok(())
}

async fn cmd_set(
    controller: &mut MetadataController,
    infohash: &str,
    arr_name: &str,
) -> Result<()> {
    refresh(controller).await?;

    controller.on_edit_requested(infohash);
    if controller.active_edit().is_none() {
        bail!("No mapping with infohash {}", infohash);
    }

    controller.on_save_requested(arr_name).await;
    Ok(())
}

async fn cmd_delete(controller: &mut MetadataController, infohash: &str) -> Result<()> {
    refresh(controller).await?;
    controller.on_delete_requested(infohash).await;
    Ok(())
}

fn print_table(rows: &[TableRow]) {
    println!(
        "{:<42} {:<40} {:<12} {}",
        "INFOHASH", "NAME", "ARR", "UPDATED"
    );
    for row in rows {
        match row {
            TableRow::Entry(entry) => println!(
                "{:<42} {:<40} {:<12} {}",
                entry.infohash, entry.torrent_name, entry.arr_name, entry.updated_at
            ),
            TableRow::NoResults => println!("No mappings found."),
        }
    }
}

fn print_usage() {
    eprintln!("Usage: arrmap <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  stats                  Show mapping counts by arr instance");
    eprintln!("  list [query]           List mappings, optionally filtered");
    eprintln!("  set <infohash> <arr>   Assign a mapping to an arr instance");
    eprintln!("  delete <infohash>      Delete a mapping (asks for confirmation)");
}
