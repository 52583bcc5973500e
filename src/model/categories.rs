use serde::Serialize;

pub const CATEGORY_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwingCategory {
    Orange,
    Purple,
    Red,
    Grey,
    Green,
    Pink,
    Brown,
    Blue,
}

impl SwingCategory {
    pub fn name(self) -> &'static str {
        match self {
            SwingCategory::Orange => "Orange",
            SwingCategory::Purple => "Purple",
            SwingCategory::Red => "Red",
            SwingCategory::Grey => "Grey",
            SwingCategory::Green => "Green",
            SwingCategory::Pink => "Pink",
            SwingCategory::Brown => "Brown",
            SwingCategory::Blue => "Blue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        category_order()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for SwingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn category_order() -> &'static [SwingCategory; CATEGORY_COUNT] {
    &[
        SwingCategory::Orange,
        SwingCategory::Purple,
        SwingCategory::Red,
        SwingCategory::Grey,
        SwingCategory::Green,
        SwingCategory::Pink,
        SwingCategory::Brown,
        SwingCategory::Blue,
    ]
}

/// A point in (bat speed, swing acceleration, attack angle) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwingPoint {
    pub bat_speed: f64,
    pub swing_acceleration: f64,
    pub attack_angle: f64,
}

impl SwingPoint {
    pub const fn new(bat_speed: f64, swing_acceleration: f64, attack_angle: f64) -> Self {
        Self {
            bat_speed,
            swing_acceleration,
            attack_angle,
        }
    }

    /// Unweighted Euclidean distance; all three axes are treated as commensurable.
    pub fn distance(&self, other: &SwingPoint) -> f64 {
        let db = self.bat_speed - other.bat_speed;
        let da = self.swing_acceleration - other.swing_acceleration;
        let dg = self.attack_angle - other.attack_angle;
        (db * db + da * da + dg * dg).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryCentroid {
    pub category: SwingCategory,
    pub point: SwingPoint,
}

const fn centroid(
    category: SwingCategory,
    bat_speed: f64,
    swing_acceleration: f64,
    attack_angle: f64,
) -> CategoryCentroid {
    CategoryCentroid {
        category,
        point: SwingPoint::new(bat_speed, swing_acceleration, attack_angle),
    }
}

/// Declaration order doubles as tie-break order.
pub const CENTROIDS: [CategoryCentroid; CATEGORY_COUNT] = [
    centroid(SwingCategory::Orange, 73.3, 24.03, 8.84),
    centroid(SwingCategory::Purple, 71.2, 24.66, 8.41),
    centroid(SwingCategory::Red, 69.9, 22.21, 10.39),
    centroid(SwingCategory::Grey, 69.3, 22.21, 14.47),
    centroid(SwingCategory::Green, 65.9, 22.29, 8.47),
    centroid(SwingCategory::Pink, 68.7, 20.48, 10.34),
    centroid(SwingCategory::Brown, 68.9, 22.47, 6.33),
    centroid(SwingCategory::Blue, 64.4, 20.4, 8.99),
];

pub fn centroid_for(category: SwingCategory) -> &'static CategoryCentroid {
    // Table order matches category_order().
    &CENTROIDS[category as usize]
}
