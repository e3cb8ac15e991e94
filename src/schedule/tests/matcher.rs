use crate::schedule::matcher::matching_aircraft;
use crate::schedule::tests::utils::{add_flight, located};

#[test]
fn test_matches_ready_aircraft_at_origin_in_order() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "10:00", 60);
    let locations = vec![
        located("PLANE_3", "MUC", Some("09:00")),
        located("PLANE_1", "TXL", Some("08:00")),
        located("PLANE_2", "muc", Some("10:00")),
        located("PLANE_4", "MUC", Some("10:01")),
    ];

    let matches: Vec<_> = matching_aircraft(&flights[0], &locations)
        .iter()
        .map(|l| l.aircraft.registration.to_string())
        .collect();

    assert_eq!(vec!["PLANE_3", "PLANE_2"], matches);
}

#[test]
fn test_no_match_without_aircraft() {
    let mut flights = Vec::new();
    add_flight(&mut flights, "MUC", "TXL", "10:00", 60);

    assert!(matching_aircraft(&flights[0], &[]).is_empty());
}
