pub mod stage1_metrics;
pub mod stage2_classify;
pub mod stage3_report;

use crate::model::catalog::{CategoryInfo, category_info};
use crate::model::categories::SwingPoint;
use crate::model::metrics::{DerivedSwingMetrics, RawSwingInput, ScoreTier};
use crate::model::profile::ScoringProfile;
use stage1_metrics::run_stage1;
use stage2_classify::{Classification, run_stage2};

#[derive(Debug, Clone, PartialEq)]
pub struct SwingEvaluation {
    pub input: RawSwingInput,
    pub metrics: DerivedSwingMetrics,
    pub classification: Classification,
    pub info: &'static CategoryInfo,
    pub tier: ScoreTier,
    pub profile: ScoringProfile,
}

impl SwingEvaluation {
    pub fn category_name(&self) -> &'static str {
        self.classification.category.name()
    }

    pub fn category_description(&self) -> &'static str {
        self.info.description
    }

    pub fn category_metrics_summary(&self) -> &'static str {
        self.info.metrics_summary
    }
}

pub fn evaluate_swing(bat_speed: f64, attack_angle: f64, time_to_contact: f64) -> SwingEvaluation {
    let input = RawSwingInput {
        bat_speed,
        attack_angle,
        time_to_contact,
    };
    evaluate_with_profile(&input, &ScoringProfile::default_v1())
}

pub fn evaluate_with_profile(input: &RawSwingInput, profile: &ScoringProfile) -> SwingEvaluation {
    let metrics = run_stage1(input, profile);
    let point = SwingPoint::new(
        input.bat_speed,
        metrics.swing_acceleration,
        input.attack_angle,
    );
    let classification = run_stage2(&point);
    let info = category_info(classification.category);
    let tier = ScoreTier::from_score(metrics.swing_score);

    SwingEvaluation {
        input: *input,
        metrics,
        classification,
        info,
        tier,
        profile: profile.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
