use serde::Serialize;

use crate::model::categories::{CATEGORY_COUNT, CENTROIDS, CategoryCentroid, SwingCategory, SwingPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CentroidDistance {
    pub category: SwingCategory,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: SwingCategory,
    pub distance: f64,
    /// In centroid declaration order.
    pub distances: [CentroidDistance; CATEGORY_COUNT],
}

pub fn run_stage2(point: &SwingPoint) -> Classification {
    classify_against(point, &CENTROIDS)
}

/// Linear scan with a running minimum. A later centroid only wins on a
/// strictly smaller distance, so ties go to the first declared; NaN never wins.
pub fn classify_against(
    point: &SwingPoint,
    table: &[CategoryCentroid; CATEGORY_COUNT],
) -> Classification {
    let distances: [CentroidDistance; CATEGORY_COUNT] =
        std::array::from_fn(|i| CentroidDistance {
            category: table[i].category,
            distance: point.distance(&table[i].point),
        });

    let mut best = distances[0];
    for candidate in &distances[1..] {
        if candidate.distance < best.distance {
            best = *candidate;
        }
    }

    tracing::debug!(
        category = best.category.name(),
        distance = best.distance,
        "nearest centroid"
    );

    Classification {
        category: best.category,
        distance: best.distance,
        distances,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
