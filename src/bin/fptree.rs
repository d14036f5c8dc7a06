//! fptree — mine frequent itemsets from a transaction file.
//!
//! Reads one transaction per line from a file or stdin and prints the mining
//! report as JSON on stdout. Logs go to stderr and follow `RUST_LOG`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use fptree::{FrequentItemMiner, MinerConfig, MiningReport, Transaction, TreeEvent};

#[derive(Parser, Debug)]
#[command(name = "fptree", version, about)]
struct Cli {
    /// Transaction file, one transaction per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Minimum support as a fraction of all transactions.
    #[arg(long, short = 's', env = "FPTREE_MIN_SUPPORT", default_value_t = 0.2)]
    min_support: f64,

    /// Split each line on this separator instead of into characters.
    #[arg(long, short = 'd')]
    separator: Option<String>,

    /// Mine items in parallel.
    #[arg(long, env = "FPTREE_PARALLEL")]
    parallel: bool,

    /// Include the tree construction event stream in the output.
    #[arg(long)]
    events: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output {
    report: MiningReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<TreeEvent>>,
}

fn parse_transactions(text: &str, separator: Option<&str>) -> Vec<Transaction> {
    text.lines()
        .map(|line| {
            let line = line.trim_end_matches('\r');
            match separator {
                Some(sep) => Transaction::from(
                    line.split(sep)
                        .map(str::trim)
                        .filter(|label| !label.is_empty())
                        .collect::<Vec<_>>(),
                ),
                None => Transaction::from_chars(line),
            }
        })
        .collect()
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MinerConfig::new(cli.min_support).with_parallel(cli.parallel);

    let text = read_input(cli.input.as_ref())?;
    let transactions = parse_transactions(&text, cli.separator.as_deref());
    info!(transactions = transactions.len(), "loaded input");

    let mut events: Vec<TreeEvent> = Vec::new();
    let miner = FrequentItemMiner::with_observer(transactions, config, &mut events)
        .context("invalid mining configuration")?;
    info!(stats = ?miner.stats(), "tree built");

    let output = Output {
        report: miner.mine(),
        events: cli.events.then_some(events),
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("failed to serialize report")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write report")?;
    Ok(())
}
