//! `stratus location ...`

use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueEnum};
use stratus_core::ClientConfig;
use stratus_location::LocationClient;
use stratus_location::model::input::{
    CalculateRouteInput, GetDevicePositionInput, ListMapsInput, SearchPlaceIndexForPositionInput,
    SearchPlaceIndexForTextInput,
};
use stratus_location::model::types::{DistanceUnit, TravelMode};

use crate::print_json;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Mode {
    Car,
    Truck,
    Walking,
}

impl From<Mode> for TravelMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Car => Self::Car,
            Mode::Truck => Self::Truck,
            Mode::Walking => Self::Walking,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum LocationCommand {
    /// Geocode free-form text.
    SearchText {
        /// Place index to search.
        #[arg(long)]
        index: String,
        /// Prefer results near this `longitude,latitude`.
        #[arg(long)]
        near: Option<String>,
        /// ISO 3166 alpha-3 country codes to restrict results to.
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,
        #[arg(long)]
        max_results: Option<i32>,
        /// Text to geocode.
        text: String,
    },
    /// Reverse geocode a `longitude,latitude` position.
    SearchPosition {
        #[arg(long)]
        index: String,
        #[arg(long)]
        max_results: Option<i32>,
        #[arg(allow_hyphen_values = true)]
        position: String,
    },
    /// Calculate a route.
    CalculateRoute {
        /// Route calculator to use.
        #[arg(long)]
        calculator: String,
        /// Departure `longitude,latitude`.
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// Destination `longitude,latitude`.
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        /// Intermediate `longitude,latitude` stops, in order.
        #[arg(long = "via", allow_hyphen_values = true)]
        waypoints: Vec<String>,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        /// Report distances in miles.
        #[arg(long)]
        miles: bool,
        /// Include the leg line strings.
        #[arg(long)]
        geometry: bool,
    },
    /// List map resources.
    ListMaps {
        #[arg(long)]
        max_results: Option<i32>,
        #[arg(long)]
        next_token: Option<String>,
    },
    /// Fetch the latest position of a device.
    GetDevicePosition {
        #[arg(long)]
        tracker: String,
        device_id: String,
    },
}

/// Parse a `longitude,latitude` pair.
fn parse_position(value: &str) -> Result<Vec<f64>> {
    let Some((lon, lat)) = value.split_once(',') else {
        bail!("expected longitude,latitude but got {value:?}");
    };
    let lon: f64 = lon.trim().parse().with_context(|| format!("invalid longitude in {value:?}"))?;
    let lat: f64 = lat.trim().parse().with_context(|| format!("invalid latitude in {value:?}"))?;
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        bail!("position {value:?} is out of range");
    }
    Ok(vec![lon, lat])
}

pub(crate) async fn run(config: ClientConfig, command: &LocationCommand) -> Result<()> {
    let client = LocationClient::new(config).context("failed to create Location client")?;

    match command {
        LocationCommand::SearchText {
            index,
            near,
            countries,
            max_results,
            text,
        } => {
            let input = SearchPlaceIndexForTextInput {
                bias_position: near.as_deref().map(parse_position).transpose()?.unwrap_or_default(),
                filter_countries: countries.clone(),
                max_results: *max_results,
                ..SearchPlaceIndexForTextInput::new(index.as_str(), text.as_str())
            };
            let out = client
                .search_place_index_for_text(input)
                .await
                .context("SearchPlaceIndexForText failed")?;
            print_json(&out)
        }
        LocationCommand::SearchPosition {
            index,
            max_results,
            position,
        } => {
            let input = SearchPlaceIndexForPositionInput {
                index_name: index.clone(),
                position: parse_position(position)?,
                max_results: *max_results,
                language: None,
            };
            let out = client
                .search_place_index_for_position(input)
                .await
                .context("SearchPlaceIndexForPosition failed")?;
            print_json(&out)
        }
        LocationCommand::CalculateRoute {
            calculator,
            from,
            to,
            waypoints,
            mode,
            miles,
            geometry,
        } => {
            let input = CalculateRouteInput {
                waypoint_positions: waypoints
                    .iter()
                    .map(|w| parse_position(w))
                    .collect::<Result<_>>()?,
                travel_mode: mode.map(TravelMode::from),
                distance_unit: miles.then_some(DistanceUnit::Miles),
                include_leg_geometry: geometry.then_some(true),
                ..CalculateRouteInput::new(
                    calculator.as_str(),
                    parse_position(from)?,
                    parse_position(to)?,
                )
            };
            let out = client
                .calculate_route(input)
                .await
                .context("CalculateRoute failed")?;
            print_json(&out)
        }
        LocationCommand::ListMaps {
            max_results,
            next_token,
        } => {
            let out = client
                .list_maps(ListMapsInput {
                    max_results: *max_results,
                    next_token: next_token.clone(),
                })
                .await
                .context("ListMaps failed")?;
            print_json(&out)
        }
        LocationCommand::GetDevicePosition { tracker, device_id } => {
            let out = client
                .get_device_position(GetDevicePositionInput {
                    tracker_name: tracker.clone(),
                    device_id: device_id.clone(),
                })
                .await
                .context("GetDevicePosition failed")?;
            print_json(&out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_position() {
        assert_eq!(parse_position("-123.1, 49.2").unwrap(), vec![-123.1, 49.2]);
    }

    #[test]
    fn test_should_reject_malformed_positions() {
        assert!(parse_position("-123.1").is_err());
        assert!(parse_position("east,49.2").is_err());
        assert!(parse_position("200,0").is_err());
        assert!(parse_position("0,-91").is_err());
    }
}
