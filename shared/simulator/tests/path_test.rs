use nalgebra::point;
use skyraid_simulator::path::Path;
use test_log::test;

#[test]
fn test_non_cyclic_exhausts_after_n() {
    let waypoints = vec![point![0.0, 0.0], point![10.0, 5.0], point![20.0, 0.0]];
    let mut path = Path::new(waypoints.clone(), false);
    for waypoint in &waypoints {
        assert_eq!(path.next(), Some(*waypoint));
    }
    assert_eq!(path.next(), None);
    assert_eq!(path.next(), None);
}

#[test]
fn test_cyclic_never_exhausts() {
    let waypoints = vec![point![0.0, 0.0], point![10.0, 5.0], point![20.0, 0.0]];
    let mut path = Path::new(waypoints.clone(), true);
    for lap in 0..3 {
        for (i, waypoint) in waypoints.iter().enumerate() {
            assert_eq!(path.next(), Some(*waypoint), "lap {lap} waypoint {i}");
        }
    }
}

#[test]
fn test_reset_rewinds_to_first() {
    let mut path = Path::new(vec![point![1.0, 1.0], point![2.0, 2.0]], false);
    assert_eq!(path.next(), Some(point![1.0, 1.0]));
    assert_eq!(path.next(), Some(point![2.0, 2.0]));
    path.reset();
    assert_eq!(path.next(), Some(point![1.0, 1.0]));
}

#[test]
fn test_editor_mutations() {
    let mut path = Path::new(vec![point![0.0, 0.0]], false);
    path.add_point(point![5.0, 5.0]);
    assert_eq!(path.len(), 2);
    assert_eq!(path.remove_last(), Some(point![5.0, 5.0]));
    path.remove_all();
    assert!(path.is_empty());
    assert_eq!(path.next(), None);
}
