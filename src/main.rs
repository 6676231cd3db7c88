use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::Builder;
use log::{error, info, LevelFilter};
use solana_account_analyzer::{
    analyze_accounts, report, utils::lamports_to_sol, AnalyzerConfig, DEFAULT_RPC_URL, VERSION,
};
use std::io::Write;
use std::path::PathBuf;

/// Classify Solana accounts and decode token accounts and mints
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Account addresses to analyze
    #[arg(required = true)]
    addresses: Vec<String>,

    /// RPC endpoint
    #[arg(short, long, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    cluster: String,

    /// Save the report to the specified file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Fetch the mint of token accounts to show a scaled balance
    #[arg(long)]
    resolve_mint: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .filter(None, if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_env("RUST_LOG")
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = AnalyzerConfig {
        rpc_url: args.cluster.clone(),
        resolve_mint: args.resolve_mint,
    };

    info!(
        "Solana Account Analyzer v{}: analyzing {} account(s) via {}",
        VERSION,
        args.addresses.len(),
        config.rpc_url
    );

    let results = analyze_accounts(&args.addresses, &config).await;

    let mut reports = Vec::new();
    let mut failures = 0;
    for (address, result) in args.addresses.iter().zip(results) {
        match result {
            Ok(analysis) => {
                info!(
                    "{}: {} holding {} SOL",
                    address,
                    analysis.category(),
                    lamports_to_sol(analysis.lamports)
                );
                reports.push(analysis);
            }
            Err(e) => {
                error!("{}: {}", address, e);
                failures += 1;
            }
        }
    }

    if !reports.is_empty() {
        let json = report::render(&reports, !args.compact)?;
        match &args.output {
            Some(path) => {
                report::save_report(&json, path)?;
                println!("Saved report to: {}", path.display());
            }
            None => println!("{}", json),
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} account(s) could not be analyzed", failures, args.addresses.len()));
    }

    Ok(())
}
