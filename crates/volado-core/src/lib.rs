//! # volado-core - Core Domain Types
//!
//! Foundation crate for Volado. Provides the domain types shared by the
//! engine and the terminal frontend.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Outcome`] - The two coin faces (Águila, Sol)
//! - [`FlipPhase`] - Flip lifecycle phase (Idle, Launching, Spinning, Settled)
//! - [`FlipRecord`] - One completed flip with timestamp and coin label
//! - [`FlipStats`] - Aggregate counts and percentages over a history
//! - [`SoundSettings`] - Per-cue audio enable flags
//! - [`Cue`] - The two audio cue points (Launch, Settle)
//!
//! ### Coin Catalog (`coins`)
//! - [`CoinDefinition`] - Static catalog entry with face artwork
//! - [`COIN_CATALOG`] - The five available denominations
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with recoverability classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod coins;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Volado crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use coins::{default_coin, CoinDefinition, COIN_CATALOG, DEFAULT_COIN_INDEX};
pub use error::{Error, Result};
pub use types::{Cue, FlipPhase, FlipRecord, FlipStats, Outcome, SoundSettings};
