//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use mapbox::{Coordinate, Profile};
use std::path::PathBuf;

/// Mapbox - geocoding, directions and matrix lookups from the command line
#[derive(Parser, Debug)]
#[command(name = "mapbox")]
#[command(about = "Query the Mapbox geocoding, directions and matrix APIs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Geocode a free-form address or place name
    Forward {
        /// Text to search for
        query: String,

        /// ISO 3166 alpha-2 country filter, comma-separated
        #[arg(long)]
        country: Option<String>,

        /// IETF language tag for results
        #[arg(long)]
        language: Option<String>,

        /// Maximum number of results
        #[arg(long, default_value = "5")]
        limit: u32,

        /// Return partial matches for incomplete queries
        #[arg(long)]
        autocomplete: bool,
    },

    /// Find the addresses and places at a coordinate
    Reverse {
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// IETF language tag for results
        #[arg(long)]
        language: Option<String>,
    },

    /// Route through two or more coordinates
    Directions {
        /// Routing profile
        #[arg(long, value_enum, default_value_t = ProfileArg::Driving)]
        profile: ProfileArg,

        /// Waypoint as `lat,lng`; repeat for each waypoint in travel order
        #[arg(long = "coord", required = true, allow_hyphen_values = true)]
        coords: Vec<Coordinate>,

        /// Include turn-by-turn steps
        #[arg(long)]
        steps: bool,

        /// Ask for alternative routes
        #[arg(long)]
        alternatives: bool,
    },

    /// Travel times between every pair of coordinates
    Matrix {
        /// Routing profile
        #[arg(long, value_enum, default_value_t = ProfileArg::Driving)]
        profile: ProfileArg,

        /// Point as `lat,lng`; repeat for each point
        #[arg(long = "coord", required = true, allow_hyphen_values = true)]
        coords: Vec<Coordinate>,
    },

    /// Find points of interest at a coordinate
    Searchbox {
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Routing profile names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileArg {
    /// Car routing
    Driving,
    /// Car routing with live traffic
    DrivingTraffic,
    /// Pedestrian routing
    Walking,
    /// Bicycle routing
    Cycling,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Driving => Profile::Driving,
            ProfileArg::DrivingTraffic => Profile::DrivingTraffic,
            ProfileArg::Walking => Profile::Walking,
            ProfileArg::Cycling => Profile::Cycling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_directions_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "mapbox",
            "directions",
            "--profile",
            "walking",
            "--coord",
            "-33.86,151.21",
            "--coord",
            "-33.87,151.20",
            "--steps",
        ])
        .expect("valid arguments");

        match cli.command {
            Commands::Directions {
                profile,
                coords,
                steps,
                alternatives,
            } => {
                assert_eq!(Profile::from(profile), Profile::Walking);
                assert_eq!(
                    coords,
                    vec![Coordinate::new(-33.86, 151.21), Coordinate::new(-33.87, 151.20)]
                );
                assert!(steps);
                assert!(!alternatives);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mapbox",
            "reverse",
            "--lat",
            "40.7",
            "--lng",
            "-73.9",
            "--json-logs",
            "--config",
            "custom.toml",
        ])
        .expect("valid arguments");

        assert!(cli.json_logs);
        assert!(!cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Reverse { lat, lng, .. } if lat == 40.7 && lng == -73.9
        ));
    }

    #[test]
    fn forward_defaults() {
        let cli = Cli::try_parse_from(["mapbox", "forward", "Eiffel Tower"]).expect("valid arguments");
        match cli.command {
            Commands::Forward {
                query,
                limit,
                autocomplete,
                country,
                ..
            } => {
                assert_eq!(query, "Eiffel Tower");
                assert_eq!(limit, 5);
                assert!(!autocomplete);
                assert!(country.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_coordinate() {
        let result = Cli::try_parse_from(["mapbox", "matrix", "--coord", "not-a-point"]);
        assert!(result.is_err());
    }

    #[test]
    fn directions_requires_coordinates() {
        let result = Cli::try_parse_from(["mapbox", "directions"]);
        assert!(result.is_err());
    }
}
