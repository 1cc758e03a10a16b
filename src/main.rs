use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_importer::{load_clients_from_path, write_transactions, ImportResult, TransactionImporter};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: transaction-importer [transactions].csv [clients].csv [log_level:optional] > [importable].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let transactions_path = &args[1];
    let clients_path = &args[2];
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let clients = load_clients_from_path(clients_path)
        .with_context(|| format!("Failed to load clients from '{clients_path}'"))?;

    let importer = TransactionImporter::new();

    let timer = Instant::now();
    let result = importer.run(transactions_path, &clients).await
        .with_context(|| format!("Failed to import transactions from '{transactions_path}'"))?;
    let duration = timer.elapsed();

    info!("Imported transactions in: {duration:?}");

    write_report(&result)?;
    write_transactions(&result.data, BufWriter::new(stdout().lock()))?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the importable CSV, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report(result: &ImportResult) -> Result<()> {
    let mut output = BufWriter::new(stderr().lock());

    writeln!(output, "{}", result.summary())?;

    for error in &result.errors {
        writeln!(output, "{error}")?;
    }

    output.flush()?;

    Ok(())
}
