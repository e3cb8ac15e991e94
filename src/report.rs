use crate::airport::AirportCode;
use crate::flight::{Duty, FlightAssignment};
use crate::schedule::SearchStats;
use crate::time::Time;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use tabled::Tabled;

/// The schedule computed at startup. Read-only; clones share the same assignments.
#[derive(Clone, Debug)]
pub struct Roster {
    assignments: Arc<[FlightAssignment]>,
    stats: SearchStats,
}

#[derive(Debug, Serialize, Tabled)]
pub struct FlightPlanEntry {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: Time,
    pub arrival: Time,
    pub equipment: String,
    pub duty: Duty,
}

#[derive(Debug, Serialize, Tabled)]
pub struct OperatingInstruction {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: Time,
    pub duty: Duty,
}

impl From<&FlightAssignment> for FlightPlanEntry {
    fn from(a: &FlightAssignment) -> Self {
        FlightPlanEntry {
            origin: a.flight.origin.code.clone(),
            destination: a.flight.destination.code.clone(),
            departure: a.flight.departure_time,
            arrival: a.flight.arrival_time(),
            equipment: a.aircraft.model.clone(),
            duty: a.duty,
        }
    }
}

impl From<&FlightAssignment> for OperatingInstruction {
    fn from(a: &FlightAssignment) -> Self {
        OperatingInstruction {
            origin: a.flight.origin.code.clone(),
            destination: a.flight.destination.code.clone(),
            departure: a.flight.departure_time,
            duty: a.duty,
        }
    }
}

impl Roster {
    pub fn new(assignments: Vec<FlightAssignment>, stats: SearchStats) -> Roster {
        Roster {
            assignments: assignments.into(),
            stats,
        }
    }

    pub fn assignments(&self) -> &[FlightAssignment] {
        &self.assignments
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Every assignment, or only those departing from `airport` when given.
    pub fn flight_plan(&self, airport: Option<&str>) -> Vec<FlightPlanEntry> {
        self.assignments
            .iter()
            .filter(|a| airport.is_none_or(|code| a.flight.origin.code.matches(code)))
            .map(FlightPlanEntry::from)
            .collect()
    }

    /// What one aircraft flies, in schedule order.
    pub fn operating_instructions(&self, registration: &str) -> Vec<OperatingInstruction> {
        self.assignments
            .iter()
            .filter(|a| a.aircraft.registration.matches(registration))
            .map(OperatingInstruction::from)
            .collect()
    }

    pub fn export_flight_plan(&self, path: &Path, airport: Option<&str>) -> io::Result<usize> {
        let plan = self.flight_plan(airport);
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &plan)?;
        Ok(plan.len())
    }
}
