//! dowfetch core: fixed-basket historical quote download.
//!
//! This crate contains everything except argument parsing:
//! - The fixed Dow Jones basket and its ticker-token mapping
//! - The `QuoteProvider` seam and the Stooq implementation
//! - The sequential fetch-and-persist loop with per-symbol outcomes
//! - Progress reporting through `tracing`
//! - TOML configuration

pub mod config;
pub mod data;

pub use config::FetchConfig;
