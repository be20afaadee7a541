use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use pumapay_wallet::chain::ARBITRUM;

/// The fixed startup banner: product name, purpose, integration targets.
const BANNER: [&str; 3] = [
    "PumaPay Campus Wallet",
    "Sistema de wallet digital universitaria",
    "Integración con MXNB y Blockchain",
];

fn main() -> Result<()> {
    //NOTE: The banner contract does not depend on arguments; the only one we
    //      look at is an optional log level for stderr diagnostics.
    let args: Vec<String> = std::env::args().collect();

    let log_level = args.get(1)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    debug!("MXNB ledger target: {} (chain id {})", ARBITRUM.name, ARBITRUM.chain_id);

    write_banner_to_stdout()?;

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
    //NOTE: stdout carries the banner, so all logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_banner_to_stdout() -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for line in BANNER {
        writeln!(output, "{line}")?;
    }

    output.flush()?;

    Ok(())
}
