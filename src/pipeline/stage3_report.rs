use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{Result, SwingError};
use crate::model::catalog::builtin_catalog;
use crate::model::categories::{SwingCategory, centroid_for};
use crate::pipeline::SwingEvaluation;
use crate::report::json::{render_catalog_json, render_summary_json};
use crate::report::text::{render_catalog_text, render_report_text};
use crate::report::{
    CatalogEntry, CategorySummary, GAUGE_WIDTH, NamedDistance, ReportContext, SummaryData,
    ToolMeta, gauge_fraction, render_gauge,
};

pub const REPORT_FILE: &str = "report.txt";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render_evaluation(eval: &SwingEvaluation, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_report_text(&build_report_context(eval))),
        ReportFormat::Json => render_summary_json(&build_summary(eval)),
    }
}

/// Writes `report.txt` and `summary.json` into `out_dir`, creating it if needed.
pub fn write_reports(eval: &SwingEvaluation, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| SwingError::io(out_dir, e))?;

    let report_path = out_dir.join(REPORT_FILE);
    let report = render_report_text(&build_report_context(eval));
    write_text(&report_path, &report)?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    let json = render_summary_json(&build_summary(eval))?;
    write_text(&summary_path, &json)?;

    Ok(vec![report_path, summary_path])
}

pub fn render_catalog(filter: Option<SwingCategory>, format: ReportFormat) -> Result<String> {
    let entries = catalog_entries(filter);
    match format {
        ReportFormat::Text => Ok(render_catalog_text(&entries)),
        ReportFormat::Json => render_catalog_json(&entries),
    }
}

pub fn build_summary(eval: &SwingEvaluation) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: eval.input,
        metrics: eval.metrics,
        score_tier: eval.tier,
        category: CategorySummary {
            name: eval.category_name(),
            description: eval.category_description(),
            metrics_summary: eval.category_metrics_summary(),
            distance: eval.classification.distance,
        },
        distances: eval
            .classification
            .distances
            .iter()
            .map(|d| NamedDistance {
                name: d.category.name(),
                distance: d.distance,
            })
            .collect(),
    }
}

pub fn build_report_context(eval: &SwingEvaluation) -> ReportContext {
    let fraction = gauge_fraction(
        eval.metrics.swing_score,
        eval.profile.score_floor,
        eval.profile.score_span(),
    );
    ReportContext {
        metrics: eval.metrics,
        score_tier: eval.tier,
        score_ceiling: eval.profile.score_ceiling,
        gauge: render_gauge(fraction, GAUGE_WIDTH),
        category: eval.category_name(),
        distance: eval.classification.distance,
        runner_up: runner_up(eval),
        description: eval.category_description(),
        metrics_summary: eval.category_metrics_summary(),
    }
}

fn runner_up(eval: &SwingEvaluation) -> Option<NamedDistance> {
    let mut best: Option<NamedDistance> = None;
    for d in &eval.classification.distances {
        if d.category == eval.classification.category {
            continue;
        }
        if best.as_ref().is_none_or(|b| d.distance < b.distance) {
            best = Some(NamedDistance {
                name: d.category.name(),
                distance: d.distance,
            });
        }
    }
    best
}

fn catalog_entries(filter: Option<SwingCategory>) -> Vec<CatalogEntry> {
    builtin_catalog()
        .iter()
        .filter(|info| filter.is_none_or(|f| f == info.category))
        .map(|info| {
            let centroid = centroid_for(info.category);
            CatalogEntry {
                name: info.category.name(),
                bat_speed: centroid.point.bat_speed,
                swing_acceleration: centroid.point.swing_acceleration,
                attack_angle: centroid.point.attack_angle,
                description: info.description,
                metrics_summary: info.metrics_summary,
            }
        })
        .collect()
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| SwingError::io(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| SwingError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
