//! p2pool-nets
//!
//! Inspect the built-in network registries from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use p2pool_nets::consensus::{format_coin_amount, target_to_difficulty};
use p2pool_nets::Registries;
use primitive_types::U256;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// p2pool network registry inspector.
#[derive(Parser, Debug)]
#[command(name = "p2pool-nets")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print records as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every base and overlay network
    List,
    /// Show one base network
    Show { network: String },
    /// Show one overlay network
    Overlay { network: String },
    /// Check a claimed target (hex) against a network's sane range
    CheckTarget { network: String, target: String },
    /// Subsidy paid on top of the block at a height
    Subsidy { network: String, height: u64 },
    /// Default node config file location on this machine
    ConfigPath { network: String },
    /// Networks that share a magic prefix
    Collisions,
}

fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn parse_target(text: &str) -> Result<U256> {
    let digits = text.trim_start_matches("0x");
    U256::from_str_radix(digits, 16)
        .map_err(|e| anyhow::anyhow!("invalid hex target {}: {:?}", text, e))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let registries = Registries::builtin().context("built-in network definitions are malformed")?;
    info!("p2pool-nets v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::List => {
            println!("Base networks:");
            for net in registries.networks.iter() {
                println!(
                    "  {:<18} {:<7} p2p {:<6} rpc {:<6} pow {:<8} prefix {}",
                    net.name,
                    net.symbol,
                    net.p2p_port,
                    net.rpc_port,
                    net.pow_hash.family_name(),
                    hex::encode(net.magic_prefix)
                );
            }
            println!("Overlay networks:");
            for overlay in registries.overlays.iter() {
                println!(
                    "  {:<18} parent {:<18} p2p {:<6} worker {:<6} share {}s",
                    overlay.name,
                    overlay.parent.name,
                    overlay.p2p_port,
                    overlay.worker_port,
                    overlay.share_period_seconds
                );
            }
        }
        Command::Show { network } => {
            let net = registries.networks.lookup(&network)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(net.as_ref())?);
            } else {
                println!("{} ({})", net.name, net.symbol);
                println!("  Magic prefix:   {}", hex::encode(net.magic_prefix));
                println!("  Ports:          p2p {} / rpc {}", net.p2p_port, net.rpc_port);
                println!("  Address ver:    {}", net.address_version);
                println!("  Testnet:        {}", net.is_testnet());
                println!("  PoW hash:       {}", net.pow_hash.family_name());
                println!("  Block period:   {}s", net.block_period_seconds);
                println!("  Initial reward: {}", format_coin_amount(net.subsidy(0)));
                println!("  Dust threshold: {}", format_coin_amount(net.dust_threshold));
                println!("  Sane targets:   {:#x} ..= {:#x}", net.sane_target_range.min, net.sane_target_range.max);
                if let Some(genesis) = net.identity_check.genesis_hash {
                    println!("  Genesis:        {}", genesis);
                }
                if let Some(marker) = net.identity_check.help_marker {
                    println!("  Help marker:    {}", marker);
                }
            }
        }
        Command::Overlay { network } => {
            let overlay = registries.overlays.lookup(&network)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(overlay.as_ref())?);
            } else {
                println!("{} (parent {})", overlay.name, overlay.parent.name);
                println!("  Share period:   {}s", overlay.share_period_seconds);
                println!("  Chain length:   {} (real {})", overlay.chain_length, overlay.real_chain_length);
                println!("  Spread:         {} blocks", overlay.spread);
                println!("  Identifier:     {}", hex::encode(overlay.identifier));
                println!("  Prefix:         {}", hex::encode(overlay.prefix));
                println!("  Ports:          p2p {} / worker {}", overlay.p2p_port, overlay.worker_port);
                println!("  Persist:        {}", overlay.persist);
                println!("  Bootstrap:      {}", overlay.bootstrap_addrs.join(" "));
                println!("  Announce:       {}", overlay.announce_channel);
            }
        }
        Command::CheckTarget { network, target } => {
            let net = registries.networks.lookup(&network)?;
            let target = parse_target(&target)?;
            net.check_target(target)?;
            println!(
                "target accepted (difficulty {:.4})",
                target_to_difficulty(target)
            );
        }
        Command::Subsidy { network, height } => {
            let net = registries.networks.lookup(&network)?;
            println!("{} {}", format_coin_amount(net.subsidy(height)), net.symbol);
        }
        Command::ConfigPath { network } => {
            let net = registries.networks.lookup(&network)?;
            println!("{}", net.config_path()?.display());
        }
        Command::Collisions => {
            for collision in registries.networks.prefix_collisions() {
                println!(
                    "{}: {}",
                    hex::encode(collision.prefix),
                    collision.networks.join(", ")
                );
            }
        }
    }

    Ok(())
}
