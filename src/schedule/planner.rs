use crate::aircraft::AircraftLocation;
use crate::error::PlanError;
use crate::flight::{Flight, FlightAssignment};
use crate::schedule::matcher::matching_aircraft;
use crate::schedule::reposition::repositioning_states;
use crate::schedule::state::{ScheduleState, StateKey};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, trace};

#[derive(Clone, Copy, Debug)]
pub struct PlannerConfig {
    /// Estimate ferry time from the opposite direction when only that one is flown.
    pub reverse_route_estimate: bool,
    /// Remember states already proven infeasible.
    pub memoize: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            reverse_route_estimate: true,
            memoize: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub states_visited: u64,
    pub memo_hits: u64,
    pub ferry_moves: u64,
    /// Deepest recursion reached, counted in committed flights.
    pub max_depth: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} states visited, {} memo hits, {} ferry moves tried, depth {}",
            self.states_visited, self.memo_hits, self.ferry_moves, self.max_depth
        )
    }
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub assignments: Vec<FlightAssignment>,
    pub stats: SearchStats,
}

#[derive(Clone, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Planner {
        Planner { config }
    }

    /// Assigns every flight to an aircraft starting from its home base, inserting ferry legs where
    /// needed. Returns the first complete schedule found.
    pub fn build(
        &self,
        home_bases: Vec<AircraftLocation>,
        flights: Vec<Flight>,
    ) -> Result<Solution, PlanError> {
        validate(&home_bases, &flights)?;
        let (flight_count, aircraft_count) = (flights.len(), home_bases.len());
        info!(flights = flight_count, aircraft = aircraft_count, "building flight schedule");

        let initial = ScheduleState::new(home_bases, flights.into_iter().map(Arc::new).collect());
        let mut search = Search {
            config: &self.config,
            failed: HashSet::new(),
            stats: SearchStats::default(),
        };

        match search.explore(initial, 0) {
            Some(state) => {
                info!(
                    assignments = state.assignments().len(),
                    ferries = state.assignments().iter().filter(|a| a.is_ferry()).count(),
                    "schedule complete: {}",
                    search.stats
                );
                Ok(Solution {
                    assignments: state.into_assignments(),
                    stats: search.stats,
                })
            }
            None => {
                error!("cannot build the flight schedule: {}", search.stats);
                Err(PlanError::Infeasible {
                    flights: flight_count,
                    aircraft: aircraft_count,
                })
            }
        }
    }
}

fn validate(home_bases: &[AircraftLocation], flights: &[Flight]) -> Result<(), PlanError> {
    let mut seen = HashSet::new();
    if let Some(dup) = flights.iter().find(|f| !seen.insert(f.id.clone())) {
        return Err(PlanError::DuplicateFlight(dup.id.clone()));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = home_bases
        .iter()
        .find(|l| !seen.insert(l.aircraft.registration.clone()))
    {
        return Err(PlanError::DuplicateAircraft(dup.aircraft.registration.clone()));
    }
    Ok(())
}

struct Search<'a> {
    config: &'a PlannerConfig,
    failed: HashSet<StateKey>,
    stats: SearchStats,
}

impl Search<'_> {
    /// Returns a complete descendant of `state`, or `None` when none exists.
    fn explore(&mut self, state: ScheduleState, depth: usize) -> Option<ScheduleState> {
        self.stats.states_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        debug!(
            scheduled = state.assignments().len(),
            pending = state.pending().len(),
            depth,
            "exploring state"
        );

        if state.is_complete() {
            return Some(state);
        }

        let key = self.config.memoize.then(|| state.key());
        if let Some(key) = &key {
            if self.failed.contains(key) {
                self.stats.memo_hits += 1;
                return None;
            }
        }

        let result = self.expand(&state, depth);
        if result.is_none() {
            if let Some(key) = key {
                self.failed.insert(key);
            }
        }
        result
    }

    fn expand(&mut self, state: &ScheduleState, depth: usize) -> Option<ScheduleState> {
        let (departure, group) = state.earliest_departures()?;
        let state = state.with_ready_times_pinned(departure);

        for flight in &group {
            if let Some(solution) = self.assign_and_descend(&state, flight, depth) {
                return Some(solution);
            }
            for moved in repositioning_states(&state, flight, self.config.reverse_route_estimate) {
                self.stats.ferry_moves += 1;
                if let Some(solution) = self.assign_and_descend(&moved, flight, depth) {
                    return Some(solution);
                }
            }
            trace!("no branch covers {}", flight);
        }
        None
    }

    fn assign_and_descend(
        &mut self,
        state: &ScheduleState,
        flight: &Arc<Flight>,
        depth: usize,
    ) -> Option<ScheduleState> {
        let candidates = matching_aircraft(flight, state.locations());
        trace!("{} candidates for {}", candidates.len(), flight);
        for location in candidates {
            let next = state.assign(flight, &location.aircraft);
            if let Some(solution) = self.explore(next, depth + 1) {
                return Some(solution);
            }
        }
        None
    }
}
