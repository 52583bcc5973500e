/// Calibration constants shared by the metric formulas.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    /// Time-to-contact divisor for swing length.
    pub length_calibration: f64,
    /// Scale applied to `bat_speed^2 / swing_length`.
    pub acceleration_scale: f64,
    pub min_acceleration: f64,
    pub max_acceleration: f64,
    pub score_floor: f64,
    pub score_ceiling: f64,
    /// Typical pitch descent angle, in degrees.
    pub approach_angle: f64,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            length_calibration: 1.3636,
            acceleration_scale: 0.03343,
            min_acceleration: 15.0,
            max_acceleration: 30.0,
            score_floor: 20.0,
            score_ceiling: 80.0,
            approach_angle: -6.0,
        }
    }

    pub fn score_span(&self) -> f64 {
        self.score_ceiling - self.score_floor
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Advisory slider bounds; values outside are accepted but logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const BAT_SPEED_RANGE: InputRange = InputRange {
    field: "bat_speed",
    min: 50.0,
    max: 90.0,
};

pub const ATTACK_ANGLE_RANGE: InputRange = InputRange {
    field: "attack_angle",
    min: -5.0,
    max: 25.0,
};

pub const TIME_TO_CONTACT_RANGE: InputRange = InputRange {
    field: "time_to_contact",
    min: 0.1,
    max: 0.2,
};
