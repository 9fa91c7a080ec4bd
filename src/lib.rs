//! # Matchlog
//!
//! A local record book for Pokemon TCG matches and tournaments, usable both as a
//! standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! matchlog = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use matchlog::stats::MatchupMatrix;
//! use matchlog::store::{JsonStore, Store};
//!
//! let store = JsonStore::new("./data").unwrap();
//! let matchups = store.list_matchups().unwrap();
//! let matrix = MatchupMatrix::from_matchups(&matchups);
//! for (mine, theirs, cell) in matrix.cells() {
//!     println!("{mine} vs {theirs}: {}/{}", cell.wins, cell.total);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod sprites;
pub mod stats;
pub mod store;
pub mod transfer;
pub mod types;
pub mod validation;
