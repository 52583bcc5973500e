use std::collections::BTreeSet;

use super::catalog::{builtin_catalog, category_info};
use super::categories::{CENTROIDS, SwingCategory, SwingPoint, category_order, centroid_for};
use super::metrics::{ScoreTier, clamp_score};
use super::profile::{BAT_SPEED_RANGE, ScoringProfile, TIME_TO_CONTACT_RANGE};

#[test]
fn test_centroid_and_catalog_names_match() {
    let centroid_names: BTreeSet<&str> = CENTROIDS.iter().map(|c| c.category.name()).collect();
    let catalog_names: BTreeSet<&str> = builtin_catalog()
        .iter()
        .map(|info| info.category.name())
        .collect();
    assert_eq!(centroid_names.len(), 8);
    assert_eq!(centroid_names, catalog_names);
}

#[test]
fn test_catalog_entries_non_empty() {
    for &category in category_order() {
        let info = category_info(category);
        assert_eq!(info.category, category);
        assert!(!info.description.is_empty());
        assert!(!info.metrics_summary.is_empty());
        assert!(info.metrics_summary.starts_with("wOBA: "));
    }
}

#[test]
fn test_centroid_for_follows_declaration_order() {
    for &category in category_order() {
        assert_eq!(centroid_for(category).category, category);
    }
    let orange = centroid_for(SwingCategory::Orange);
    assert_eq!(orange.point, SwingPoint::new(73.3, 24.03, 8.84));
    let blue = centroid_for(SwingCategory::Blue);
    assert_eq!(blue.point, SwingPoint::new(64.4, 20.4, 8.99));
}

#[test]
fn test_from_name_case_insensitive() {
    assert_eq!(SwingCategory::from_name("grey"), Some(SwingCategory::Grey));
    assert_eq!(SwingCategory::from_name(" PINK "), Some(SwingCategory::Pink));
    assert_eq!(SwingCategory::from_name("Gray"), None);
    assert_eq!(SwingCategory::from_name(""), None);
}

#[test]
fn test_point_distance() {
    let a = SwingPoint::new(0.0, 0.0, 0.0);
    let b = SwingPoint::new(1.0, 2.0, 2.0);
    assert!((a.distance(&b) - 3.0).abs() < 1e-12);
    assert_eq!(b.distance(&b), 0.0);
}

#[test]
fn test_score_tier_boundaries() {
    assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Good);
    assert_eq!(ScoreTier::from_score(59.99), ScoreTier::Warning);
    assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Warning);
    assert_eq!(ScoreTier::from_score(39.99), ScoreTier::Alert);
    assert_eq!(ScoreTier::from_score(20.0), ScoreTier::Alert);
}

#[test]
fn test_clamp_score() {
    assert_eq!(clamp_score(10.0, 20.0, 80.0), 20.0);
    assert_eq!(clamp_score(90.0, 20.0, 80.0), 80.0);
    assert_eq!(clamp_score(55.5, 20.0, 80.0), 55.5);
    assert_eq!(clamp_score(f64::NAN, 20.0, 80.0), 20.0);
    assert_eq!(clamp_score(f64::INFINITY, 20.0, 80.0), 80.0);
}

#[test]
fn test_default_profile_constants() {
    let p = ScoringProfile::default();
    assert_eq!(p, ScoringProfile::default_v1());
    assert_eq!(p.length_calibration, 1.3636);
    assert_eq!(p.acceleration_scale, 0.03343);
    assert_eq!(p.approach_angle, -6.0);
    assert_eq!(p.score_span(), 60.0);
}

#[test]
fn test_input_ranges() {
    assert!(BAT_SPEED_RANGE.contains(50.0));
    assert!(BAT_SPEED_RANGE.contains(90.0));
    assert!(!BAT_SPEED_RANGE.contains(95.0));
    assert!(TIME_TO_CONTACT_RANGE.contains(0.15));
    assert!(!TIME_TO_CONTACT_RANGE.contains(f64::NAN));
}
