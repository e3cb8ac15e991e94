//! Reads the flight list and the fleet's home bases from headerless CSV files.
//!
//! ```text
//! flights:    10:00,TXL,MUC,01:00      departure, origin, destination, duration
//! home bases: 737,TXL,FL-0001          model, airport, registration
//! ```

use crate::aircraft::{Aircraft, AircraftLocation};
use crate::airport::Airport;
use crate::error::LoadError;
use crate::flight::Flight;
use crate::time::Time;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn load_flights(path: &Path) -> Result<Vec<Flight>, LoadError> {
    let flights = read_flights(open(path)?)?;
    info!(path = %path.display(), count = flights.len(), "loaded flights");
    Ok(flights)
}

pub fn load_home_bases(path: &Path) -> Result<Vec<AircraftLocation>, LoadError> {
    let home_bases = read_home_bases(open(path)?)?;
    info!(path = %path.display(), count = home_bases.len(), "loaded home bases");
    Ok(home_bases)
}

pub fn read_flights<R: Read>(reader: R) -> Result<Vec<Flight>, LoadError> {
    records(reader)?
        .into_iter()
        .enumerate()
        .map(|(i, (row, record))| {
            require_fields(&record, row, 4)?;
            let departure =
                Time::parse_time_of_day(&record[0]).map_err(|source| LoadError::Time { row, source })?;
            let duration =
                Time::parse_duration(&record[3]).map_err(|source| LoadError::Time { row, source })?;
            Ok(Flight::new(
                &format!("LEG-{:04}", i + 1),
                Airport::new(&record[1]),
                Airport::new(&record[2]),
                departure,
                duration,
            ))
        })
        .collect()
}

pub fn read_home_bases<R: Read>(reader: R) -> Result<Vec<AircraftLocation>, LoadError> {
    let mut registrations = HashSet::new();
    records(reader)?
        .into_iter()
        .map(|(row, record)| {
            require_fields(&record, row, 3)?;
            let aircraft = Aircraft::new(&record[2], &record[0])
                .map_err(|source| LoadError::Model { row, source })?;
            if !registrations.insert(aircraft.registration.clone()) {
                return Err(LoadError::DuplicateRegistration {
                    row,
                    registration: aircraft.registration,
                });
            }
            Ok(AircraftLocation::home_base(aircraft, Airport::new(&record[1])))
        })
        .collect()
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Non-empty records paired with their 1-based row number.
fn records<R: Read>(reader: R) -> Result<Vec<(usize, StringRecord)>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut rows = vec![];
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let row = record.position().map_or(i + 1, |p| p.line() as usize);
        rows.push((row, record));
    }
    Ok(rows)
}

fn require_fields(record: &StringRecord, row: usize, expected: usize) -> Result<(), LoadError> {
    if record.len() < expected {
        return Err(LoadError::MissingFields {
            row,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}
