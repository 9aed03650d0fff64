use super::*;
use approx::assert_relative_eq;

fn square_plan() -> FloorPlan {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::new(0.0, 0.0));
    plan.add_point(DVec2::new(100.0, 0.0));
    plan.add_point(DVec2::new(100.0, 100.0));
    plan.add_point(DVec2::new(0.0, 100.0));
    for i in 0..4 {
        plan.add_segment(i, (i + 1) % 4, None);
    }
    plan
}

#[test]
fn add_point_returns_sequential_indices() {
    let mut plan = FloorPlan::new();
    assert_eq!(plan.add_point(DVec2::new(1.0, 2.0)), 0);
    assert_eq!(plan.add_point(DVec2::new(3.0, 4.0)), 1);
    assert_eq!(plan.point_count(), 2);
}

#[test]
fn add_segment_rejects_invalid_indices() {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::ZERO);
    plan.add_point(DVec2::ONE);

    assert_eq!(plan.add_segment(0, 0, None), None);
    assert_eq!(plan.add_segment(0, 5, None), None);
    assert_eq!(plan.add_segment(0, 1, Some(1.5)), Some(0));
    assert_eq!(plan.segment_count(), 1);
}

#[test]
fn remove_point_drops_incident_segments_and_reindexes() {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::new(0.0, 0.0));
    plan.add_point(DVec2::new(10.0, 0.0));
    plan.add_point(DVec2::new(20.0, 0.0));
    plan.add_point(DVec2::new(30.0, 0.0));
    plan.add_segment(0, 1, None);
    plan.add_segment(1, 2, None);
    plan.add_segment(2, 3, None);

    let removed = plan.remove_point(1).expect("Punkt 1 sollte existieren");
    assert_eq!(removed, PlanPoint::new(10.0, 0.0));

    assert_eq!(plan.point_count(), 3);
    assert_eq!(plan.segments, vec![Segment::new(1, 2)]);
}

#[test]
fn out_of_range_mutators_are_noops() {
    let mut plan = square_plan();
    let before = plan.clone();

    assert!(!plan.move_point(99, DVec2::ONE));
    assert!(plan.remove_point(99).is_none());
    assert!(plan.remove_segment(99).is_none());
    assert_eq!(plan, before);
}

#[test]
fn measured_length_overrides_pixel_length() {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::new(0.0, 0.0));
    plan.add_point(DVec2::new(400.0, 0.0));
    plan.add_segment(0, 1, None);
    plan.add_segment(0, 1, Some(1.234));

    assert_relative_eq!(plan.segment_length_m(0, 200.0).unwrap(), 2.0);
    assert_relative_eq!(plan.segment_length_m(1, 200.0).unwrap(), 1.234);
    assert!(plan.segment_length_m(2, 200.0).is_none());
}

#[test]
fn find_point_prefers_nearest_within_tolerance() {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::new(100.0, 100.0));
    plan.add_point(DVec2::new(106.0, 100.0));

    assert_eq!(plan.find_point_at(DVec2::new(104.0, 100.0), 10.0), Some(1));
    assert_eq!(plan.find_point_at(DVec2::new(150.0, 150.0), 10.0), None);
    assert_eq!(
        plan.nearest_point_within(DVec2::new(104.0, 100.0), 10.0, Some(1)),
        Some(0)
    );
}

#[test]
fn find_segment_uses_clamped_projection() {
    let plan = square_plan();

    assert_eq!(plan.find_segment_at(DVec2::new(50.0, 5.0), 8.0), Some(0));
    assert_eq!(plan.find_segment_at(DVec2::new(50.0, 50.0), 8.0), None);
    // Jenseits des Endpunkts zählt der Abstand zum Endpunkt.
    assert_eq!(plan.find_segment_at(DVec2::new(-20.0, -20.0), 8.0), None);
}

#[test]
fn point_to_segment_distance_handles_degenerate_segment() {
    let a = DVec2::new(1.0, 1.0);
    assert_relative_eq!(
        point_to_segment_distance(DVec2::new(4.0, 5.0), a, a),
        5.0
    );
    assert_relative_eq!(
        point_to_segment_distance(DVec2::new(5.0, 3.0), DVec2::ZERO, DVec2::new(10.0, 0.0)),
        3.0
    );
}

#[test]
fn centroid_averages_points() {
    let plan = square_plan();
    assert_eq!(plan.centroid(), Some(DVec2::new(50.0, 50.0)));
    assert_eq!(FloorPlan::new().centroid(), None);
}

#[test]
fn drop_invalid_segments_counts_removed() {
    let mut plan = FloorPlan::new();
    plan.add_point(DVec2::ZERO);
    plan.add_point(DVec2::ONE);
    plan.segments.push(Segment::new(0, 1));
    plan.segments.push(Segment::new(1, 1));
    plan.segments.push(Segment::new(0, 7));

    assert_eq!(plan.drop_invalid_segments(), 2);
    assert_eq!(plan.segments, vec![Segment::new(0, 1)]);
}
