use crate::airport::Airport;
use crate::flight::Flight;
use crate::schedule::state::ScheduleState;
use tracing::{debug, trace};

/// Flying time for a ferry from `from` to `to`.
///
/// Uses the known duration of that exact route. When only the opposite direction is flown in the
/// schedule and `reverse_estimate` is set, its duration stands in for the ferry time.
pub fn ferry_duration(
    state: &ScheduleState,
    from: &Airport,
    to: &Airport,
    reverse_estimate: bool,
) -> Option<u64> {
    state.route_duration(from, to).or_else(|| {
        reverse_estimate
            .then(|| state.route_duration(to, from))
            .flatten()
    })
}

/// One speculative state per aircraft that could be ferried to the flight's origin before it
/// departs, in fleet order. Expects ready times to be pinned already.
pub fn repositioning_states(
    state: &ScheduleState,
    flight: &Flight,
    reverse_estimate: bool,
) -> Vec<ScheduleState> {
    state
        .locations()
        .iter()
        // aircraft already at the origin are direct candidates
        .filter(|l| l.airport != flight.origin)
        .filter_map(|l| {
            let ready_at = l.ready_at.filter(|t| *t < flight.departure_time)?;
            let duration = match ferry_duration(state, &l.airport, &flight.origin, reverse_estimate) {
                Some(duration) => duration,
                None => {
                    trace!(from = %l.airport, to = %flight.origin, "no known route for ferry");
                    return None;
                }
            };
            if ready_at + duration > flight.departure_time {
                trace!(aircraft = %l.aircraft.registration, "ferry would arrive too late");
                return None;
            }
            debug!(
                aircraft = %l.aircraft.registration,
                from = %l.airport,
                to = %flight.origin,
                departure = %ready_at,
                duration,
                "ferry candidate for {}",
                flight.id
            );
            Some(state.reposition(l, ready_at, &flight.origin, duration))
        })
        .collect()
}
