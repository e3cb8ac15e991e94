use crate::aircraft::{Registration, UnknownModel};
use crate::flight::FlightId;
use crate::time::TimeParseError;
use thiserror::Error;

/// Errors from building a schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Every branch of the search was exhausted.
    #[error("no feasible schedule covers all {flights} flights with {aircraft} aircraft")]
    Infeasible { flights: usize, aircraft: usize },

    #[error("flight id {0} appears more than once")]
    DuplicateFlight(FlightId),

    #[error("aircraft {0} appears more than once in the fleet")]
    DuplicateAircraft(Registration),
}

/// Errors from reading flight and home-base files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected {expected} fields, found {found}")]
    MissingFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: {source}")]
    Time {
        row: usize,
        #[source]
        source: TimeParseError,
    },

    #[error("row {row}: {source}")]
    Model {
        row: usize,
        #[source]
        source: UnknownModel,
    },

    #[error("row {row}: aircraft {registration} is already based elsewhere")]
    DuplicateRegistration {
        row: usize,
        registration: Registration,
    },
}
