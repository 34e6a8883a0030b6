//! Binary entrypoint for the meshvendor CLI.
//!
//! Commands:
//! - `init` - write a starter `meshvendor.toml`
//! - `list` - list vendors in the snapshot store with their snapshot version
//! - `inspect <vendor-id>` - print one stored snapshot as JSON
//! - `demo [--days <n>] [--save]` - run a scripted vendor through a simulated world
//!
//! See the library crate docs for module‑level details: `meshvendor::`.
use anyhow::{anyhow, Result};
use chrono::Duration;
use clap::{Parser, Subcommand};
use log::{info, warn};

use meshvendor::config::Config;
use meshvendor::vendor::{
    Footprint, HouseId, HouseInfo, ItemKind, Marketplace, MobileId, Placement, Point, Position,
    PromptKind, PromptRequest, PromptResponse, SimWorld, TimerOutcome, VendorError, VendorStore,
};

#[derive(Parser)]
#[command(name = "meshvendor")]
#[command(about = "Player-owned vendors for TinyMUSH worlds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "meshvendor.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// List stored vendor snapshots
    List,
    /// Print a stored vendor snapshot as JSON
    Inspect {
        /// Vendor mobile serial
        vendor: u64,
    },
    /// Run a scripted vendor through a simulated world
    Demo {
        /// Real days to simulate after the first sale
        #[arg(short, long, default_value_t = 3)]
        days: i64,
        /// Write the resulting snapshots to the configured store
        #[arg(short, long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init has no config file yet; everything else may run on defaults
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Init => {
            info!("Initializing new vendor configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::List => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            let store = VendorStore::open(config.storage.snapshot_path())?;
            let ids = store.list_ids()?;
            if ids.is_empty() {
                println!("No vendors stored in {}", config.storage.snapshot_path().display());
            }
            for id in ids {
                match store.get(id) {
                    Ok(snapshot) => println!(
                        "{}  v{}  owner {}",
                        id,
                        snapshot.version(),
                        snapshot.owner()
                    ),
                    Err(e) => println!("{}  unreadable: {}", id, e),
                }
            }
        }
        Commands::Inspect { vendor } => {
            let config = pre_config.unwrap_or(Config::load(&cli.config).await?);
            let store = VendorStore::open(config.storage.snapshot_path())?;
            let snapshot = store.get(MobileId(vendor))?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Demo { days, save } => {
            let config = match pre_config {
                Some(cfg) => cfg,
                None => {
                    warn!("No usable config at {}; running demo on defaults", cli.config);
                    Config::default()
                }
            };
            run_demo(&config, days, save)?;
        }
    }

    Ok(())
}

/// One owner, one house, one vendor and a customer: stock two items, make a
/// sale, then let upkeep run for `days`.
fn run_demo(config: &Config, days: i64, save: bool) -> Result<()> {
    let mut world = SimWorld::new();
    let owner = world.spawn_mobile(Position::World(Point::new(12, 12, 0)));
    let buyer = world.spawn_mobile(Position::World(Point::new(13, 12, 0)));
    world.set_purse(buyer, 10_000);
    let house = HouseId(900);
    world.add_house(HouseInfo {
        id: house,
        owner,
        modern_storage: true,
        footprint: Footprint::new(Point::new(10, 10, 0), Point::new(20, 20, 0)),
    });
    let vendor = world.spawn_mobile(Position::World(Point::new(14, 14, 0)));
    let storage = world.spawn_item(ItemKind::Container { locked: false }, Placement::Backpack(vendor));
    let sword = world.spawn_item(ItemKind::Plain, Placement::Backpack(owner));
    let diary = world.spawn_item(ItemKind::Book, Placement::Backpack(owner));

    let mut market = Marketplace::new(world, config.vendor.clone());
    market.open_vendor(vendor, owner, storage);
    market.deposit(vendor, 2_000)?;

    for (item, answer) in [(sword, "250 A well-balanced longsword"), (diary, "My travel diary")] {
        let Some(ticket) = market.hand_over(vendor, owner, item)? else {
            warn!("{} refused {}", vendor, item);
            continue;
        };
        let prompt = PromptRequest {
            vendor,
            kind: PromptKind::Price(ticket),
        };
        let outcome = market.answer_prompt(owner, prompt, PromptResponse::Text(answer.to_string()));
        info!("Priced {}: {:?}", item, outcome);
    }

    market.advance(config.vendor.purchase_cooldown());
    info!("Purchase of {}: {:?}", sword, market.purchase(vendor, buyer, sword)?);

    let mut paid = 0;
    for outcome in market.advance(Duration::days(days)) {
        match outcome {
            TimerOutcome::Billed(bill) => {
                paid += 1;
                info!("Upkeep: {:?}", bill);
            }
            other => info!("Timer: {:?}", other),
        }
    }
    info!("{} billing ticks over {} days", paid, days);

    match market.status(vendor) {
        Ok(status) => println!("{}", serde_json::to_string_pretty(&status)?),
        Err(VendorError::UnknownVendor(id)) => println!("{} was retired during the demo", id),
        Err(e) => return Err(anyhow!(e)),
    }
    for message in market.host().messages_for(owner) {
        println!("owner <- {}", message);
    }

    if save {
        let store = VendorStore::open(config.storage.snapshot_path())?;
        let saved = market.save_all(&store)?;
        info!("Saved {} vendors to {}", saved, config.storage.snapshot_path().display());
    }
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();

    // Base level from CLI verbosity overrides config
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    let opened = log_file.as_ref().and_then(|file| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .ok()
    });
    if let Some(f) = opened {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Only echo to the console when someone is watching it
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }

    let _ = builder.try_init();
}
