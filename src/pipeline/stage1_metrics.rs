use crate::model::metrics::{DerivedSwingMetrics, RawSwingInput, clamp_score};
use crate::model::profile::ScoringProfile;

pub fn swing_length(profile: &ScoringProfile, time_to_contact: f64, bat_speed: f64) -> f64 {
    (time_to_contact / profile.length_calibration) * bat_speed
}

/// No guard on `swing_length`; near-zero lengths produce huge or infinite values.
pub fn swing_acceleration(profile: &ScoringProfile, bat_speed: f64, swing_length: f64) -> f64 {
    profile.acceleration_scale * (bat_speed * bat_speed / swing_length)
}

/// Linear map of `[min_acceleration, max_acceleration]` onto the score range.
/// Saturates outside the reference range.
pub fn swing_score(profile: &ScoringProfile, swing_acceleration: f64) -> f64 {
    let acc_span = profile.max_acceleration - profile.min_acceleration;
    let raw = profile.score_floor
        + ((swing_acceleration - profile.min_acceleration) / acc_span) * profile.score_span();
    clamp_score(raw, profile.score_floor, profile.score_ceiling)
}

pub fn launch_angle(profile: &ScoringProfile, attack_angle: f64) -> f64 {
    attack_angle - profile.approach_angle
}

pub fn run_stage1(input: &RawSwingInput, profile: &ScoringProfile) -> DerivedSwingMetrics {
    let length = swing_length(profile, input.time_to_contact, input.bat_speed);
    let acceleration = swing_acceleration(profile, input.bat_speed, length);
    DerivedSwingMetrics {
        swing_length: length,
        swing_acceleration: acceleration,
        swing_score: swing_score(profile, acceleration),
        launch_angle: launch_angle(profile, input.attack_angle),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_metrics.rs"]
mod tests;
