//! porkbun-ddns - dynamic DNS updater for Porkbun domains.

use clap::error::ErrorKind;
use clap::Parser;
use porkbun_ddns::config::Credentials;
use porkbun_ddns::detector::IpDetector;
use porkbun_ddns::host;
use porkbun_ddns::providers::{DnsProvider, PorkbunProvider};
use porkbun_ddns::updater;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "porkbun-ddns")]
#[command(about = "Keep a Porkbun A record pointed at this machine's public IP")]
#[command(version)]
struct Cli {
    /// Domain whose records to manage; the machine's hostname becomes the
    /// subdomain
    domain: String,

    /// Path to the credentials file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Wrong arity exits 1 before any network traffic happens.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            e.print()?;
            std::process::exit(1);
        }
    };

    run(cli).await?;
    Ok(())
}

/// The whole run, in order. Any error propagates to `main`, which prints
/// the one-line diagnostic and exits non-zero.
async fn run(cli: Cli) -> porkbun_ddns::Result<()> {
    println!("===== porkbun-ddns domain update tool");

    let config_path = cli.config.unwrap_or_else(Credentials::default_path);
    let credentials = Credentials::load_from(&config_path)?;

    let provider = PorkbunProvider::new(credentials.registrar);

    let pong = provider.ping().await?;
    println!("> Status: {}", pong.status);
    println!("> IP: {}", pong.your_ip);

    let hostname = host::hostname()?;
    println!("> Hostname: {}", hostname);

    let detector = IpDetector::new();
    let ip = detector.detect_ipv4().await?;

    updater::run_once(&provider, &cli.domain, &hostname, ip).await?;

    println!("Done.");
    Ok(())
}
