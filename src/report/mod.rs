pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::metrics::{DerivedSwingMetrics, RawSwingInput, ScoreTier};

pub const GAUGE_WIDTH: usize = 30;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub description: &'static str,
    pub metrics_summary: &'static str,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedDistance {
    pub name: &'static str,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: RawSwingInput,
    pub metrics: DerivedSwingMetrics,
    pub score_tier: ScoreTier,
    pub category: CategorySummary,
    pub distances: Vec<NamedDistance>,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub metrics: DerivedSwingMetrics,
    pub score_tier: ScoreTier,
    pub score_ceiling: f64,
    pub gauge: String,
    pub category: &'static str,
    pub distance: f64,
    pub runner_up: Option<NamedDistance>,
    pub description: &'static str,
    pub metrics_summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub bat_speed: f64,
    pub swing_acceleration: f64,
    pub attack_angle: f64,
    pub description: &'static str,
    pub metrics_summary: &'static str,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Filled share of the gauge: `(score - floor) / span`, clipped to `[0, 1]`.
pub fn gauge_fraction(score: f64, floor: f64, span: f64) -> f64 {
    if span.is_nan() || span <= 0.0 || score.is_nan() {
        return 0.0;
    }
    ((score - floor) / span).clamp(0.0, 1.0)
}

pub fn render_gauge(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let mut out = String::with_capacity(width + 2);
    out.push('[');
    out.extend(std::iter::repeat_n('#', filled));
    out.extend(std::iter::repeat_n('-', width - filled));
    out.push(']');
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
