use super::*;

fn profile() -> ScoringProfile {
    ScoringProfile::default_v1()
}

#[test]
fn test_reference_swing() {
    let p = profile();
    let length = swing_length(&p, 0.15, 65.0);
    assert!((length - 7.1502).abs() < 1e-3);

    let acc = swing_acceleration(&p, 65.0, length);
    assert!((acc - 19.75).abs() < 0.01);

    let score = swing_score(&p, acc);
    assert!((score - 39.0).abs() < 0.05);

    assert_eq!(launch_angle(&p, 0.0), 6.0);
}

#[test]
fn test_run_stage1_matches_formulas() {
    let p = profile();
    let input = RawSwingInput {
        bat_speed: 72.0,
        attack_angle: 12.5,
        time_to_contact: 0.14,
    };
    let out = run_stage1(&input, &p);
    let length = (0.14 / 1.3636) * 72.0;
    let acc = 0.03343 * 72.0 * 72.0 / length;
    assert!((out.swing_length - length).abs() < 1e-12);
    assert!((out.swing_acceleration - acc).abs() < 1e-9);
    assert!((out.swing_score - swing_score(&p, acc)).abs() < 1e-12);
    assert_eq!(out.launch_angle, 18.5);
}

#[test]
fn test_acceleration_positive() {
    let p = profile();
    for &bat_speed in &[0.5, 50.0, 65.0, 90.0, 120.0] {
        for &length in &[0.01, 1.0, 7.15, 20.0] {
            assert!(swing_acceleration(&p, bat_speed, length) > 0.0);
        }
    }
}

#[test]
fn test_zero_length_is_not_guarded() {
    let p = profile();
    assert!(swing_acceleration(&p, 65.0, 0.0).is_infinite());
}

#[test]
fn test_score_saturates() {
    let p = profile();
    for acc in [-100.0, 0.0, 10.0, 14.999, 15.0] {
        assert_eq!(swing_score(&p, acc), 20.0);
    }
    for acc in [30.0, 30.001, 45.0, 1.0e9, f64::INFINITY] {
        assert_eq!(swing_score(&p, acc), 80.0);
    }
    assert!((swing_score(&p, 22.5) - 50.0).abs() < 1e-12);
}

#[test]
fn test_score_monotone_and_bounded() {
    let p = profile();
    let mut prev = f64::NEG_INFINITY;
    let mut acc = 0.0;
    while acc <= 45.0 {
        let score = swing_score(&p, acc);
        assert!(score >= prev);
        assert!((20.0..=80.0).contains(&score));
        prev = score;
        acc += 0.25;
    }
    assert_eq!(swing_score(&p, f64::NAN), 20.0);
}

#[test]
fn test_launch_angle_offset() {
    let p = profile();
    for attack in [-5.0, -1.5, 0.0, 8.84, 25.0] {
        assert!((launch_angle(&p, attack) - (attack + 6.0)).abs() < 1e-12);
    }
}
