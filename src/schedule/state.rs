use crate::aircraft::{Aircraft, AircraftLocation};
use crate::airport::{Airport, AirportCode};
use crate::flight::{Flight, FlightAssignment, FlightId};
use crate::time::Time;
use std::sync::Arc;

/// A snapshot of the search: assignments made so far, where every aircraft currently is, and the
/// flights still waiting for an aircraft.
///
/// States are never modified. Every transition returns a new state and leaves its parent intact,
/// so sibling branches of the search can keep reading it.
#[derive(Clone, Debug)]
pub struct ScheduleState {
    assignments: Vec<FlightAssignment>,
    locations: Vec<AircraftLocation>,
    pending: Vec<Arc<Flight>>,
}

/// Identifies a state by what determines the outcome of searching below it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    pending: Vec<FlightId>,
    locations: Vec<(AirportCode, Option<Time>)>,
}

impl ScheduleState {
    pub fn new(locations: Vec<AircraftLocation>, flights: Vec<Arc<Flight>>) -> ScheduleState {
        ScheduleState {
            assignments: vec![],
            locations,
            pending: flights,
        }
    }

    pub fn assignments(&self) -> &[FlightAssignment] {
        &self.assignments
    }

    pub fn locations(&self) -> &[AircraftLocation] {
        &self.locations
    }

    pub fn pending(&self) -> &[Arc<Flight>] {
        &self.pending
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn into_assignments(self) -> Vec<FlightAssignment> {
        self.assignments
    }

    /// The earliest pending departure time and every flight leaving then, in input order.
    pub fn earliest_departures(&self) -> Option<(Time, Vec<Arc<Flight>>)> {
        let earliest = self.pending.iter().map(|f| f.departure_time).min()?;
        let group = self
            .pending
            .iter()
            .filter(|f| f.departure_time == earliest)
            .cloned()
            .collect();
        Some((earliest, group))
    }

    /// Pins every aircraft that has not flown yet to `time`.
    pub fn with_ready_times_pinned(&self, time: Time) -> ScheduleState {
        let locations = self
            .locations
            .iter()
            .map(|l| AircraftLocation {
                ready_at: l.ready_at.or(Some(time)),
                ..l.clone()
            })
            .collect();
        ScheduleState {
            assignments: self.assignments.clone(),
            locations,
            pending: self.pending.clone(),
        }
    }

    /// Commits `flight` to `aircraft`: the aircraft ends up at the destination, ready on arrival.
    pub fn assign(&self, flight: &Arc<Flight>, aircraft: &Arc<Aircraft>) -> ScheduleState {
        let mut assignments = self.assignments.clone();
        assignments.push(FlightAssignment::revenue(flight.clone(), aircraft.clone()));

        let pending = self
            .pending
            .iter()
            .filter(|f| f.id != flight.id)
            .cloned()
            .collect();

        ScheduleState {
            assignments,
            locations: self.relocated(aircraft, &flight.destination, flight.arrival_time()),
            pending,
        }
    }

    /// Ferries the aircraft at `from` to `to`. The ferry leg is logged with zero duration at the
    /// aircraft's current ready time; the aircraft becomes ready at `to` after `ferry_duration`.
    pub fn reposition(
        &self,
        from: &AircraftLocation,
        departure: Time,
        to: &Airport,
        ferry_duration: u64,
    ) -> ScheduleState {
        let mut assignments = self.assignments.clone();
        let ferry = Flight::new(
            &format!("FERRY-{:04}", assignments.len() + 1),
            from.airport.clone(),
            to.clone(),
            departure,
            0,
        );
        assignments.push(FlightAssignment::ferry(ferry, from.aircraft.clone()));

        ScheduleState {
            assignments,
            locations: self.relocated(&from.aircraft, to, departure + ferry_duration),
            pending: self.pending.clone(),
        }
    }

    /// Longest known duration of the `origin`-`destination` route among the pending flights.
    /// Revenue legs already scheduled are only consulted when no pending flight flies the route.
    pub fn route_duration(&self, origin: &Airport, destination: &Airport) -> Option<u64> {
        longest_leg(self.pending.iter(), origin, destination).or_else(|| {
            let scheduled = self
                .assignments
                .iter()
                .filter(|a| !a.is_ferry())
                .map(|a| &a.flight);
            longest_leg(scheduled, origin, destination)
        })
    }

    pub(crate) fn key(&self) -> StateKey {
        StateKey {
            pending: self.pending.iter().map(|f| f.id.clone()).collect(),
            locations: self
                .locations
                .iter()
                .map(|l| (l.airport.code.clone(), l.ready_at))
                .collect(),
        }
    }

    fn relocated(&self, aircraft: &Aircraft, airport: &Airport, ready_at: Time) -> Vec<AircraftLocation> {
        self.locations
            .iter()
            .map(|l| {
                if *l.aircraft == *aircraft {
                    debug_assert!(
                        l.ready_at.is_none_or(|t| t <= ready_at),
                        "Ready time of {} regressed",
                        aircraft.registration
                    );
                    AircraftLocation {
                        aircraft: l.aircraft.clone(),
                        airport: airport.clone(),
                        ready_at: Some(ready_at),
                    }
                } else {
                    l.clone()
                }
            })
            .collect()
    }
}

fn longest_leg<'a>(
    flights: impl Iterator<Item = &'a Arc<Flight>>,
    origin: &Airport,
    destination: &Airport,
) -> Option<u64> {
    flights
        .filter(|f| f.is_route(origin, destination))
        .map(|f| f.duration)
        .max()
}
