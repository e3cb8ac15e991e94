use crate::aircraft::{Aircraft, AircraftLocation};
use crate::airport::Airport;
use crate::flight::{Flight, FlightAssignment};
use crate::time::Time;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::HashMap;
use std::sync::Arc;

pub fn time(hhmm: &str) -> Time {
    Time::parse_time_of_day(hhmm).unwrap()
}

pub fn add_aircraft(fleet: &mut Vec<AircraftLocation>, registration: &str, model: &str, home_base: &str) {
    fleet.push(AircraftLocation::home_base(
        Aircraft::new(registration, model).unwrap(),
        Airport::new(home_base),
    ));
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    origin: &str,
    destination: &str,
    departure: &str,
    duration: u64,
) {
    flights.push(Flight::new(
        &format!("LEG-{:04}", flights.len() + 1),
        Airport::new(origin),
        Airport::new(destination),
        time(departure),
        duration,
    ));
}

pub fn located(registration: &str, airport: &str, ready_at: Option<&str>) -> AircraftLocation {
    AircraftLocation {
        aircraft: Arc::new(Aircraft::new(registration, "A320").unwrap()),
        airport: Airport::new(airport),
        ready_at: ready_at.map(time),
    }
}

pub fn arc_flights(flights: Vec<Flight>) -> Vec<Arc<Flight>> {
    flights.into_iter().map(Arc::new).collect()
}

/// Checks that every aircraft flies a connected, non-overlapping chain starting at its home base.
pub fn continuity_violation(
    home_bases: &[AircraftLocation],
    assignments: &[FlightAssignment],
) -> Option<String> {
    let mut by_aircraft: HashMap<String, Vec<&FlightAssignment>> = HashMap::new();
    for a in assignments {
        by_aircraft
            .entry(a.aircraft.registration.to_string())
            .or_default()
            .push(a);
    }

    for (registration, mut legs) in by_aircraft {
        legs.sort_by_key(|a| a.flight.departure_time);
        for pair in legs.windows(2) {
            let (first, second) = (&pair[0].flight, &pair[1].flight);
            if first.destination != second.origin {
                return Some(format!(
                    "{}: {} lands at {} but {} takes off at {}",
                    registration, first.id, first.destination, second.id, second.origin
                ));
            }
            if second.departure_time < first.arrival_time() {
                return Some(format!(
                    "{}: {} arrives {} after {} departs {}",
                    registration, first.id, first.arrival_time(), second.id, second.departure_time
                ));
            }
        }
        let home = home_bases
            .iter()
            .find(|l| l.aircraft.registration.matches(&registration))
            .map(|l| &l.airport);
        if let Some(first) = legs.first() {
            if Some(&first.flight.origin) != home {
                return Some(format!(
                    "{}: first leg {} leaves {} instead of its home base",
                    registration, first.flight.id, first.flight.origin
                ));
            }
        }
    }
    None
}

pub fn arb_airport() -> impl Strategy<Value = Airport> {
    prop_oneof![
        Just(Airport::new("AP_1")),
        Just(Airport::new("AP_2")),
        Just(Airport::new("AP_3")),
    ]
}

/// Origin, destination, departure and duration of a leg; ids are assigned by position.
pub fn arb_leg() -> impl Strategy<Value = (Airport, Airport, Time, u64)> {
    (
        arb_airport(),
        arb_airport(),
        (12..40u64).prop_map(|slot| Time(slot * 30)),
        (0..5u64).prop_map(|hours| hours * 60),
    )
}

pub fn to_flights(legs: Vec<(Airport, Airport, Time, u64)>) -> Vec<Flight> {
    legs.into_iter()
        .enumerate()
        .map(|(i, (origin, destination, departure, duration))| {
            Flight::new(&format!("FL_{}", i + 1), origin, destination, departure, duration)
        })
        .collect()
}

pub fn to_fleet(home_bases: Vec<Airport>) -> Vec<AircraftLocation> {
    home_bases
        .into_iter()
        .enumerate()
        .map(|(i, airport)| {
            AircraftLocation::home_base(Aircraft::new(&format!("AC_{}", i + 1), "737").unwrap(), airport)
        })
        .collect()
}
