use crate::airport::Airport;
use crate::schedule::state::ScheduleState;
use crate::schedule::tests::utils::{add_flight, arc_flights, located, time};

#[test]
fn test_earliest_departures_keep_input_order() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "12:00", 60);
    add_flight(&mut flights, "HAM", "TXL", "10:00", 60);
    add_flight(&mut flights, "LHR", "TXL", "14:00", 60);
    add_flight(&mut flights, "MUC", "HAM", "10:00", 60);
    let state = ScheduleState::new(vec![], arc_flights(flights));

    let (departure, group) = state.earliest_departures().unwrap();

    assert_eq!(time("10:00"), departure);
    let ids: Vec<_> = group.iter().map(|f| f.id.to_string()).collect();
    assert_eq!(vec!["LEG-0002", "LEG-0004"], ids);
    assert!(ScheduleState::new(vec![], vec![]).earliest_departures().is_none());
}

#[test]
fn test_pinning_only_touches_unset_ready_times() {
    let state = ScheduleState::new(
        vec![
            located("PLANE_1", "MUC", None),
            located("PLANE_2", "TXL", Some("09:00")),
        ],
        vec![],
    );

    let pinned = state.with_ready_times_pinned(time("10:00"));

    assert_eq!(Some(time("10:00")), pinned.locations()[0].ready_at);
    assert_eq!(Some(time("09:00")), pinned.locations()[1].ready_at);
    assert_eq!(None, state.locations()[0].ready_at);
}

#[test]
fn test_assign_moves_aircraft_and_leaves_parent_intact() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "10:00", 60);
    add_flight(&mut flights, "TXL", "MUC", "12:00", 60);
    let state = ScheduleState::new(
        vec![
            located("PLANE_1", "MUC", Some("10:00")),
            located("PLANE_2", "MUC", Some("10:00")),
        ],
        arc_flights(flights),
    );

    let flight = state.pending()[0].clone();
    let aircraft = state.locations()[1].aircraft.clone();
    let next = state.assign(&flight, &aircraft);

    assert_eq!(1, next.assignments().len());
    assert_eq!(1, next.pending().len());
    assert_eq!("LEG-0002", &*next.pending()[0].id);
    assert_eq!(Airport::new("MUC"), next.locations()[0].airport);
    assert_eq!(Airport::new("TXL"), next.locations()[1].airport);
    assert_eq!(Some(time("11:00")), next.locations()[1].ready_at);

    assert!(state.assignments().is_empty());
    assert_eq!(2, state.pending().len());
    assert_eq!(Airport::new("MUC"), state.locations()[1].airport);
}

#[test]
fn test_route_duration_takes_longest_pending_leg() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "10:00", 60);
    add_flight(&mut flights, "MUC", "TXL", "14:00", 75);
    add_flight(&mut flights, "TXL", "MUC", "16:00", 50);
    let state = ScheduleState::new(
        vec![
            located("PLANE_1", "MUC", Some("10:00")),
            located("PLANE_2", "MUC", Some("10:00")),
        ],
        arc_flights(flights),
    );

    let muc = Airport::new("MUC");
    let txl = Airport::new("TXL");
    assert_eq!(Some(75), state.route_duration(&muc, &txl));
    assert_eq!(Some(50), state.route_duration(&txl, &muc));
    assert_eq!(None, state.route_duration(&muc, &Airport::new("HAM")));

    // a longer scheduled leg does not hide the pending one
    let flight = state.pending()[1].clone();
    let aircraft = state.locations()[0].aircraft.clone();
    let next = state.assign(&flight, &aircraft);
    assert_eq!(Some(60), next.route_duration(&muc, &txl));

    // scheduled legs count once no pending flight flies the route
    let flight = next.pending()[0].clone();
    let aircraft = next.locations()[1].aircraft.clone();
    let last = next.assign(&flight, &aircraft);
    assert_eq!(Some(75), last.route_duration(&muc, &txl));
}

#[test]
fn test_key_ignores_assignment_history() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "10:00", 60);
    let a = ScheduleState::new(vec![located("PLANE_1", "TXL", Some("11:00"))], vec![]);
    let b = ScheduleState::new(vec![located("PLANE_1", "MUC", Some("10:00"))], arc_flights(flights));
    let flight = b.pending()[0].clone();
    let aircraft = b.locations()[0].aircraft.clone();
    let b = b.assign(&flight, &aircraft);

    assert_eq!(a.key(), b.key());
    let later = ScheduleState::new(vec![located("PLANE_1", "TXL", Some("11:30"))], vec![]);
    assert_ne!(a.key(), later.key());
}
