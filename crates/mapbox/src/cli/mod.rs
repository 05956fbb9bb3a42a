//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mapbox binary.

mod commands;
mod geocode;
mod route;

pub use commands::{Cli, Commands};
pub use geocode::{forward, reverse, searchbox};
pub use route::{directions, matrix};

use mapbox::{JsonError, MapboxResult};
use serde::Serialize;

/// Print a decoded response as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> MapboxResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new("response", e.to_string()))?;
    println!("{}", json);
    Ok(())
}
