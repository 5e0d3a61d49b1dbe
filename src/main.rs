// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Stockroom CLI - stock room ledger for a small retail store

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use stockroom::commands::{self, Output};
use stockroom::inventory::InventorySystem;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "STOCKROOM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Data file override
    #[arg(long, env = "STOCKROOM_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true, value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new item; its SKU is generated from the category
    Add {
        /// Item name
        #[arg(value_parser = non_empty)]
        name: String,

        /// Category (first three letters become the SKU prefix)
        #[arg(value_parser = non_empty)]
        category: String,

        /// Unit price
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        price: i64,

        /// Opening stock
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        stock: i64,
    },

    /// Find the first item whose name or SKU contains the query
    Search {
        /// Name or SKU fragment
        #[arg(value_parser = non_empty)]
        query: String,
    },

    /// List items in a table
    #[command(alias = "ls")]
    List {
        /// Only show items whose name or SKU contains this
        query: Option<String>,
    },

    /// Receive stock for an item
    StockIn {
        /// Name or SKU
        #[arg(value_parser = non_empty)]
        item: String,

        /// Quantity received
        qty: u32,
    },

    /// Remove stock from an item
    StockOut {
        /// Name or SKU
        #[arg(value_parser = non_empty)]
        item: String,

        /// Quantity removed
        qty: u32,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Name or SKU
        #[arg(value_parser = non_empty)]
        item: String,
    },

    /// Edit an item by exact SKU
    Update {
        /// Exact SKU, e.g. ELE-001
        sku: String,

        /// New name
        #[arg(long, value_parser = non_empty)]
        name: Option<String>,

        /// New category (the SKU is kept)
        #[arg(long, value_parser = non_empty)]
        category: Option<String>,

        /// New price
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        price: Option<i64>,

        /// New stock level
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        stock: Option<i64>,
    },

    /// Show today's totals and recent activity
    Dashboard,

    /// Show the recent activity log
    Activity,

    /// Keep the dashboard open and reset daily totals at midnight
    Watch {
        /// Milliseconds between day-change checks
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,

        /// Stop after this many checks
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Delete the data file, wiping all inventory state
    Reset,

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = stockroom::config::load(cli.config.as_deref())?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => config.log_level.parse().unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out = Output {
        json: cli.json,
        color: !cli.no_color,
        currency: config.currency.clone(),
    };

    // Commands that never touch the inventory
    match cli.command {
        Commands::Reset => return commands::reset::run(&config.data_file),
        Commands::Config => return commands::config::run(&config),
        Commands::Completions { shell } => {
            return commands::completions::run(shell, &mut Cli::command());
        }
        _ => {}
    }

    tracing::debug!(path = %config.data_file.display(), "using data file");
    let mut system = InventorySystem::open(&config.data_file);
    let low = config.low_stock_threshold;

    // Execute command
    match cli.command {
        Commands::Add { name, category, price, stock } => {
            commands::item::add(&mut system, &out, &name, &category, price, stock)
        }
        Commands::Search { query } => commands::item::search(&system, &out, &query),
        Commands::List { query } => commands::item::list(&system, &out, query.as_deref()),
        Commands::StockIn { item, qty } => commands::stock::stock_in(&mut system, &out, &item, qty),
        Commands::StockOut { item, qty } => commands::stock::stock_out(&mut system, &out, &item, qty),
        Commands::Delete { item } => commands::item::delete(&mut system, &out, &item),
        Commands::Update { sku, name, category, price, stock } => {
            commands::item::update(&mut system, &out, &sku, name, category, price, stock)
        }
        Commands::Dashboard => commands::dashboard::run(&system, &out, low),
        Commands::Activity => commands::dashboard::activity(&system, &out),
        Commands::Watch { interval_ms, ticks } => commands::watch::run(
            &mut system,
            &out,
            low,
            Duration::from_millis(interval_ms),
            ticks,
        ),
        Commands::Reset | Commands::Config | Commands::Completions { .. } => Ok(()),
    }
}
