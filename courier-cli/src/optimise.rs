//! Optimise command implementation for the courier CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::{
    Coordinate, CoordinatePolicy, DeliveryStop, OptimisedRoute, OptimiserConfig, RouteOptimiser,
};
use courier_optimiser_nn::NearestNeighbourOptimiser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_AVERAGE_SPEED, ARG_COORDINATE_POLICY, ARG_EARTH_RADIUS, ARG_OUTPUT, ARG_REQUEST, CliError,
    ENV_REQUEST,
};

/// Stop payloads are passed through as arbitrary JSON.
pub(crate) type Payload = serde_json::Value;

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimise",
    long_about = "Order a batch of delivery stops with the nearest-neighbour \
                 heuristic, starting from the rider's position. The request \
                 is a JSON file holding the start coordinate and the stops; \
                 tuning values can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Order delivery stops and estimate arrival times"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing the start position and stops.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Average travel speed used for ETAs (default 30).
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "km/h")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Sphere radius used for distances (default 6371).
    #[arg(long = ARG_EARTH_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) earth_radius_km: Option<f64>,
    /// `strict` rejects out-of-range coordinates; `permissive` lets them through.
    #[arg(long = ARG_COORDINATE_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) coordinate_policy: Option<CoordinatePolicy>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Settings handed to the optimiser.
    pub(crate) optimiser: OptimiserConfig,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match courier_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let defaults = OptimiserConfig::default();
        let optimiser = OptimiserConfig {
            average_speed_kmh: args.average_speed_kmh.unwrap_or(defaults.average_speed_kmh),
            earth_radius_km: args.earth_radius_km.unwrap_or(defaults.earth_radius_km),
            coordinate_policy: args
                .coordinate_policy
                .unwrap_or(defaults.coordinate_policy),
        };
        optimiser.validate().map_err(CliError::InvalidSettings)?;

        Ok(Self {
            request_path,
            output: args.output,
            optimiser,
        })
    }
}

/// JSON body of an optimise request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct OptimiseRequest {
    /// Rider position, `{"x": longitude, "y": latitude}`.
    pub(crate) start: Coordinate,
    /// Pending drop-offs.
    #[serde(default)]
    pub(crate) stops: Vec<DeliveryStop<Payload>>,
}

pub(super) fn run_optimise(args: OptimiseArgs) -> Result<(), CliError> {
    let config = resolve_optimise_config(args)?;
    let route = execute_optimise(&config)?;
    let mut stdout = std::io::stdout().lock();
    emit_route(&config, &route, &mut stdout)
}

fn resolve_optimise_config(args: OptimiseArgs) -> Result<OptimiseConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_optimise(
    config: &OptimiseConfig,
) -> Result<OptimisedRoute<Payload>, CliError> {
    let request = load_optimise_request(&config.request_path)?;
    let optimiser = NearestNeighbourOptimiser::with_config(config.optimiser);
    let stops = optimiser
        .optimise(request.start, &request.stops)
        .map_err(|source| CliError::Optimise {
            path: config.request_path.clone(),
            source,
        })?;
    let route = OptimisedRoute::new(stops);
    let summary = route.summary();
    log::info!(
        "ordered {} stops: {} km, {} min",
        route.stops.len(),
        summary.total_distance_km,
        summary.total_time_minutes
    );
    Ok(route)
}

/// Loads a JSON-encoded [`OptimiseRequest`] from disk.
pub(super) fn load_optimise_request(path: &Utf8Path) -> Result<OptimiseRequest, CliError> {
    let file = courier_fs::open_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `route` to the configured output file, or to `fallback`.
pub(super) fn emit_route(
    config: &OptimiseConfig,
    route: &OptimisedRoute<Payload>,
    fallback: &mut dyn Write,
) -> Result<(), CliError> {
    let Some(path) = config.output.as_ref() else {
        return write_route(fallback, route);
    };
    let mut file = courier_fs::create_file(path).map_err(|source| CliError::CreateOutput {
        path: path.clone(),
        source,
    })?;
    write_route(&mut file, route)
}

fn write_route(writer: &mut dyn Write, route: &OptimisedRoute<Payload>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimiseConfig, CliError> {
    let merged = OptimiseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimiseConfig::try_from(merged)
}
