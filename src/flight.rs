use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::time::Time;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type FlightId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flight {
    pub id: FlightId,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: Time,
    pub duration: u64,
}

impl Flight {
    pub fn new(
        id: &str,
        origin: Airport,
        destination: Airport,
        departure_time: Time,
        duration: u64,
    ) -> Flight {
        Flight {
            id: Arc::from(id),
            origin,
            destination,
            departure_time,
            duration,
        }
    }

    pub fn arrival_time(&self) -> Time {
        self.departure_time + self.duration
    }

    pub fn is_route(&self, origin: &Airport, destination: &Airport) -> bool {
        self.origin == *origin && self.destination == *destination
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} at {} ({}m)",
            self.id, self.origin, self.destination, self.departure_time, self.duration
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Duty {
    Revenue,
    /// Non-revenue repositioning leg inserted by the planner.
    Ferry,
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Duty::Revenue => write!(f, "revenue"),
            Duty::Ferry => write!(f, "ferry"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightAssignment {
    pub flight: Arc<Flight>,
    pub aircraft: Arc<Aircraft>,
    pub duty: Duty,
}

impl FlightAssignment {
    pub fn revenue(flight: Arc<Flight>, aircraft: Arc<Aircraft>) -> FlightAssignment {
        FlightAssignment {
            flight,
            aircraft,
            duty: Duty::Revenue,
        }
    }

    pub fn ferry(flight: Flight, aircraft: Arc<Aircraft>) -> FlightAssignment {
        FlightAssignment {
            flight: Arc::new(flight),
            aircraft,
            duty: Duty::Ferry,
        }
    }

    pub fn is_ferry(&self) -> bool {
        self.duty == Duty::Ferry
    }
}

impl fmt::Display for FlightAssignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} operated by {}", self.flight, self.aircraft)?;
        if self.is_ferry() {
            write!(f, " [ferry]")?;
        }
        Ok(())
    }
}
