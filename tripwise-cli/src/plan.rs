//! Plan command implementation for the Tripwise CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripwise_core::{Destination, MemoryCatalogue, TransportMode, TripRequest};
use tripwise_planner::{ItineraryConfig, RandomVisitHints, TripPlan, plan_trip};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_CATALOGUE, ARG_PLAN_MODE, ARG_PLAN_REQUEST, ARG_PLAN_SAME_DAY_TRAVEL_HOURS,
    ARG_PLAN_SEED, CliError, ENV_PLAN_REQUEST,
};

/// Catalogue file used when none is configured.
pub(crate) const DEFAULT_CATALOGUE: &str = "destinations.json";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a trip from a JSON-encoded TripRequest. Destinations \
                 are resolved against a JSON catalogue; the plan, with \
                 feasibility, transport recommendation and a day-by-day \
                 itinerary, is printed as JSON.",
    about = "Plan a multi-destination trip"
)]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a TripRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the destination catalogue (`destinations.json`).
    #[arg(long = ARG_PLAN_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Transport mode overriding the one in the request.
    #[arg(long = ARG_PLAN_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<TransportMode>,
    /// Seed for reproducible visit hints, overriding the request.
    #[arg(long = ARG_PLAN_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Legs up to this many hours do not get a transit day.
    #[arg(long = ARG_PLAN_SAME_DAY_TRAVEL_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) same_day_travel_hours: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON destination catalogue.
    pub(crate) catalogue: Utf8PathBuf,
    /// Mode override.
    pub(crate) mode: Option<TransportMode>,
    /// Seed override.
    pub(crate) seed: Option<u64>,
    /// Schedule tunables.
    pub(crate) itinerary: ItineraryConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.catalogue, ARG_PLAN_CATALOGUE)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply the command-line overrides to `request`.
    fn apply_overrides(&self, request: &mut TripRequest) {
        if let Some(mode) = self.mode {
            request.mode = Some(mode);
        }
        if let Some(seed) = self.seed {
            request.seed = Some(seed);
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let catalogue = args
            .catalogue
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOGUE));

        let mut itinerary = ItineraryConfig::default();
        if let Some(value) = args.same_day_travel_hours {
            if !value.is_finite() || value < 0.0 {
                return Err(CliError::InvalidTravelThreshold { value });
            }
            itinerary.same_day_travel_hours = value;
        }

        Ok(Self {
            request_path,
            catalogue,
            mode: args.mode,
            seed: args.seed,
            itinerary,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let plan = execute_plan(args)?;
    write_plan(writer, &plan)
}

fn execute_plan(args: PlanArgs) -> Result<TripPlan, CliError> {
    let config = resolve_plan_config(args)?;
    let mut request = load_trip_request(&config.request_path)?;
    config.apply_overrides(&mut request);
    let catalogue = load_catalogue(&config.catalogue)?;
    log::debug!(
        "planning {} destinations over {} days from {} catalogue entries",
        request.destinations.len(),
        request.days,
        catalogue.len()
    );

    let mut hints = request
        .seed
        .map_or_else(RandomVisitHints::from_entropy, RandomVisitHints::seeded);
    plan_trip(&catalogue, &request, &config.itinerary, &mut hints).map_err(|source| {
        CliError::InvalidTripRequest {
            path: config.request_path.clone(),
            source,
        }
    })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`TripRequest`] from disk.
pub(super) fn load_trip_request(path: &Utf8Path) -> Result<TripRequest, CliError> {
    read_json(path, ARG_PLAN_REQUEST)
}

/// Loads a JSON array of destinations into a [`MemoryCatalogue`].
pub(super) fn load_catalogue(path: &Utf8Path) -> Result<MemoryCatalogue, CliError> {
    let destinations: Vec<Destination> = read_json(path, ARG_PLAN_CATALOGUE)?;
    MemoryCatalogue::new(destinations).map_err(|source| CliError::InvalidCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan(writer: &mut dyn Write, plan: &TripPlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlan)?;
    writer.write_all(b"\n").map_err(CliError::WritePlan)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
