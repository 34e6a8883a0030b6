//! # Meshvendor - Player-Owned Vendors for TinyMUSH Worlds
//!
//! Meshvendor is the vendor subsystem of a TinyMUSH-style world: a player
//! hires a vendor, stocks it with goods, and the vendor sells them while its
//! owner is away, paying a daily upkeep out of the gold it holds.
//!
//! ## Features
//!
//! - **Sale Ledger**: Price and description for every item in a vendor's storage, kept in step with container membership.
//! - **Pricing Prompts**: Free-text "<price> <description>" answers with clamping and not-for-sale rules.
//! - **Upkeep Billing**: Legacy (bank + hold) and direct-hold economies with tiered daily charges.
//! - **Relocation**: Owners may call a housed vendor outside for two minutes, leaving a stand-in behind.
//! - **Teardown**: Dismissed, bankrupt or displaced vendors hand their goods to the house or the owner.
//! - **Persistence**: Versioned snapshots in a sled store, upgraded from any older version on load.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meshvendor::config::VendorConfig;
//! use meshvendor::vendor::{ItemKind, Marketplace, Placement, Point, Position, SimWorld};
//!
//! let mut world = SimWorld::new();
//! let owner = world.spawn_mobile(Position::World(Point::new(0, 0, 0)));
//! let vendor = world.spawn_mobile(Position::World(Point::new(1, 0, 0)));
//! let storage = world.spawn_item(ItemKind::Container { locked: false }, Placement::Backpack(vendor));
//!
//! let mut market = Marketplace::new(world, VendorConfig::default());
//! market.open_vendor(vendor, owner, storage);
//! market.advance(chrono::Duration::days(1));
//! ```
//!
//! ## Module Organization
//!
//! - [`vendor`] - Ledger, pricing, billing, relocation, teardown and snapshots
//! - [`config`] - Configuration management and validation
//! - [`validation`] - Sanitization of player-supplied text
//! - [`logutil`] - Single-line escaping for log output
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Marketplace   │ ← Routes actions, prompts and timers by vendor id
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  PlayerVendor   │ ← Ledger, balances, relocation state
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   VendorHost    │ ← World, items, funds, prompts, clock
//! └─────────────────┘
//! ```

pub mod config;
pub mod logutil;
pub mod validation;
pub mod vendor;
