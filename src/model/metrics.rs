use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawSwingInput {
    /// mph
    pub bat_speed: f64,
    /// degrees
    pub attack_angle: f64,
    /// seconds
    pub time_to_contact: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedSwingMetrics {
    /// feet
    pub swing_length: f64,
    /// g
    pub swing_acceleration: f64,
    pub swing_score: f64,
    /// degrees
    pub launch_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Warning,
    Alert,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 40.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Alert
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Good => "good",
            ScoreTier::Warning => "warning",
            ScoreTier::Alert => "alert",
        }
    }
}

/// Clamps to `[lo, hi]`; NaN maps to `lo`.
pub fn clamp_score(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() || x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}
