use crate::aircraft::AircraftLocation;
use crate::flight::Flight;

/// Aircraft standing at the flight's origin and ready by its departure, in fleet order.
pub fn matching_aircraft<'a>(
    flight: &Flight,
    locations: &'a [AircraftLocation],
) -> Vec<&'a AircraftLocation> {
    locations
        .iter()
        .filter(|l| l.airport == flight.origin && l.is_ready_by(flight.departure_time))
        .collect()
}
