//! `netprofile`: resolve named deployment networks for smart-contract tooling.
//!
//! # Overview
//!
//! ```text
//!   .secret ─────┐
//!                ├──▶ Credential ──┐
//!   .infuraKey ──┘   (Arc, once)   │
//!                                  ▼
//!   netprofile.toml ──▶ networks ──▶ NetworkProfileResolver
//!   (or built-ins)                   │            │
//!                           resolve(name)    provider(name)
//!                                  │            │
//!                                  ▼            ▼
//!                           NetworkProfile  ProviderFactory ──build()──▶ SigningTransport
//! ```
//!
//! Commands:
//! - `list`: configured networks
//! - `show <name>`: the resolved profile, endpoint redacted
//! - `accounts <name>`: addresses the mnemonic unlocks on that network
//! - `check <name>`: confirm the node serves the expected chain

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use netprofile::config::{load_config, ResolverConfig};
use netprofile::lifecycle::bootstrap;
use netprofile::observability::logging::init_logging;
use netprofile::NetworkProfile;

#[derive(Parser)]
#[command(name = "netprofile")]
#[command(about = "Resolve deployment network profiles backed by local credentials", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in networks apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File holding the mnemonic phrase.
    #[arg(long)]
    mnemonic_file: Option<PathBuf>,

    /// File holding the RPC provider API key.
    #[arg(long)]
    api_key_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured networks
    List,
    /// Show a resolved network profile
    Show {
        name: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List accounts unlocked on a network
    Accounts { name: String },
    /// Verify the network's node reports the expected chain id
    Check {
        name: String,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResolverConfig::default(),
    };
    if let Some(path) = cli.mnemonic_file {
        config.credentials.mnemonic_path = path;
    }
    if let Some(path) = cli.api_key_file {
        config.credentials.api_key_path = path;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability)?;

    let resolver = bootstrap(&config)?;

    match cli.command {
        Commands::List => {
            for profile in resolver.profiles() {
                println!(
                    "{:<16} {:<7} chain_id={}",
                    profile.name(),
                    profile.kind(),
                    profile.chain_id()
                );
            }
        }
        Commands::Show { name, json } => {
            let profile = resolver.resolve(&name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
        }
        Commands::Accounts { name } => {
            let transport = resolver.provider(&name)?.build()?;
            for (index, account) in transport
                .profile()
                .accounts()
                .indices()
                .zip(transport.accounts())
            {
                println!("{:>4}  {}", index, account);
            }
        }
        Commands::Check { name, timeout_secs } => {
            let transport = resolver.provider(&name)?.build()?;
            let chain_id = transport
                .verify_chain_id(Duration::from_secs(timeout_secs))
                .await?;
            println!("{}: ok (chain_id={})", name, chain_id);
        }
    }

    Ok(())
}

fn print_profile(profile: &NetworkProfile) {
    println!("name            {}", profile.name());
    println!("kind            {}", profile.kind());
    println!("endpoint        {}", profile.endpoint());
    println!("chain_id        {}", profile.chain_id());
    println!("gas             {}", profile.gas_limit());
    println!("confirmations   {}", profile.confirmations());
    println!("timeout_blocks  {}", profile.timeout_blocks());
    println!("skip_dry_run    {}", profile.skip_dry_run());
    println!("accounts        {:?}", profile.accounts().indices());
}
