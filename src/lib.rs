//! Food Waste Management console.
//!
//! Browse the providers, receivers, food listings and claims tables of a food
//! donation database and run a catalogue of analytical SQL queries against it,
//! from a terminal UI or one-shot commands.

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod sql;
pub mod tui;
