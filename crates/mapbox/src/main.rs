//! Mapbox CLI binary.
//!
//! This binary provides command-line access to the client:
//! - Forward and reverse geocoding
//! - Directions and travel time matrices
//! - Search box reverse lookups

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, directions, forward, matrix, reverse, searchbox};
    use mapbox::{Client, Coordinate, MapboxConfig, ObservabilityConfig};

    // A .env file may carry MAPBOX_API_KEY
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "warn" };
    mapbox::init_observability_with_config(
        ObservabilityConfig::new(env!("CARGO_PKG_NAME"))
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = match &cli.config {
        Some(path) => MapboxConfig::from_file(path)?,
        None => MapboxConfig::load()?,
    };
    let client = Client::new(config)?;

    // Execute the requested command
    match cli.command {
        Commands::Forward {
            query,
            country,
            language,
            limit,
            autocomplete,
        } => {
            forward(
                &client,
                &query,
                country.as_deref(),
                language.as_deref(),
                limit,
                autocomplete,
            )
            .await?;
        }

        Commands::Reverse { lat, lng, language } => {
            reverse(&client, Coordinate::new(lat, lng), language.as_deref()).await?;
        }

        Commands::Directions {
            profile,
            coords,
            steps,
            alternatives,
        } => {
            directions(&client, profile.into(), coords, steps, alternatives).await?;
        }

        Commands::Matrix { profile, coords } => {
            matrix(&client, profile.into(), coords).await?;
        }

        Commands::Searchbox { lat, lng, limit } => {
            searchbox(&client, Coordinate::new(lat, lng), limit).await?;
        }
    }

    Ok(())
}
