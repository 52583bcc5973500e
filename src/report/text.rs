use crate::report::{CatalogEntry, ReportContext, format_f64_2};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Swing Metrics Report\n");
    out.push_str("====================\n\n");

    out.push_str("1. Derived metrics\n");
    out.push_str(&format!(
        "Swing length: {} feet\n",
        format_f64_2(ctx.metrics.swing_length)
    ));
    out.push_str(&format!(
        "Swing acceleration: {} g\n",
        format_f64_2(ctx.metrics.swing_acceleration)
    ));
    out.push_str(&format!(
        "Swing score: {} ({})\n",
        format_f64_2(ctx.metrics.swing_score),
        ctx.score_tier.label()
    ));
    out.push_str(&format!(
        "Launch angle: {} degrees\n\n",
        format_f64_2(ctx.metrics.launch_angle)
    ));

    out.push_str("2. Swing score\n");
    out.push_str(&format!(
        "{} {} / {}\n",
        ctx.gauge,
        format_f64_2(ctx.metrics.swing_score),
        ctx.score_ceiling
    ));
    out.push_str(&format!("{}\n\n", tier_statement(ctx.metrics.swing_score)));

    out.push_str(&format!("3. Color category: {}\n", ctx.category));
    out.push_str(&format!(
        "Distance to centroid: {}\n",
        format_f64_2(ctx.distance)
    ));
    if let Some(next) = &ctx.runner_up {
        out.push_str(&format!(
            "Next closest: {} ({})\n",
            next.name,
            format_f64_2(next.distance)
        ));
    }
    out.push_str(&format!("Description: {}\n", ctx.description));
    out.push_str(&format!("Metrics: {}\n", ctx.metrics_summary));

    out
}

pub fn render_catalog_text(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", entry.name));
        out.push_str(&format!(
            "Centroid: bat speed {}, swing acceleration {}, attack angle {}\n",
            format_f64_2(entry.bat_speed),
            format_f64_2(entry.swing_acceleration),
            format_f64_2(entry.attack_angle)
        ));
        out.push_str(&format!("Description: {}\n", entry.description));
        out.push_str(&format!("Metrics: {}\n", entry.metrics_summary));
    }
    out
}

fn tier_statement(score: f64) -> &'static str {
    if score >= 60.0 {
        "Acceleration is well above the reference range midpoint."
    } else if score >= 40.0 {
        "Acceleration is near the middle of the reference range."
    } else {
        "Acceleration is in the low end of the reference range."
    }
}
