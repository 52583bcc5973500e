mod error;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Result, SwingError};
use crate::model::categories::SwingCategory;
use crate::model::metrics::RawSwingInput;
use crate::model::profile::{
    ATTACK_ANGLE_RANGE, BAT_SPEED_RANGE, InputRange, ScoringProfile, TIME_TO_CONTACT_RANGE,
};
use crate::pipeline::evaluate_swing;
use crate::pipeline::stage1_metrics::swing_length;
use crate::pipeline::stage3_report::{
    ReportFormat, render_catalog, render_evaluation, write_reports,
};

/// Swing metrics calculator and swing archetype classifier.
#[derive(Parser, Debug)]
#[command(name = "swing-metrics", version)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute derived metrics and the color category for one swing
    Evaluate {
        /// Bat speed in mph
        #[arg(long, default_value_t = 65.0, allow_negative_numbers = true)]
        bat_speed: f64,

        /// Attack angle in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        attack_angle: f64,

        /// Time to contact in seconds
        #[arg(long, default_value_t = 0.15, allow_negative_numbers = true)]
        time_to_contact: f64,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write report.txt and summary.json into this directory instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show centroids and descriptions of the color categories
    Catalog {
        /// Restrict output to one category (e.g. Orange)
        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate {
            bat_speed,
            attack_angle,
            time_to_contact,
            format,
            out,
        } => {
            let input = RawSwingInput {
                bat_speed,
                attack_angle,
                time_to_contact,
            };
            validate_input(&input, &ScoringProfile::default_v1())?;
            log_advisory_ranges(&input);

            let eval = evaluate_swing(bat_speed, attack_angle, time_to_contact);
            tracing::info!(
                category = eval.category_name(),
                swing_score = eval.metrics.swing_score,
                "swing evaluated"
            );

            match out {
                Some(dir) => {
                    for path in write_reports(&eval, &dir)? {
                        tracing::info!(path = %path.display(), "report written");
                    }
                }
                None => print!("{}", render_evaluation(&eval, format)?),
            }
        }
        Command::Catalog { category, format } => {
            let filter = match category {
                Some(name) => Some(
                    SwingCategory::from_name(&name).ok_or(SwingError::UnknownCategory(name))?,
                ),
                None => None,
            };
            print!("{}", render_catalog(filter, format)?);
        }
    }
    Ok(())
}

/// Rejects inputs the formulas cannot give a meaningful answer for.
fn validate_input(input: &RawSwingInput, profile: &ScoringProfile) -> Result<()> {
    for (field, value) in [
        ("bat_speed", input.bat_speed),
        ("attack_angle", input.attack_angle),
        ("time_to_contact", input.time_to_contact),
    ] {
        if !value.is_finite() {
            return Err(SwingError::NonFiniteInput { field, value });
        }
    }

    let length = swing_length(profile, input.time_to_contact, input.bat_speed);
    if input.bat_speed <= 0.0 || input.time_to_contact <= 0.0 || length <= 0.0 {
        return Err(SwingError::DegenerateSwingLength {
            swing_length: length,
        });
    }
    Ok(())
}

fn log_advisory_ranges(input: &RawSwingInput) {
    let checks: [(InputRange, f64); 3] = [
        (BAT_SPEED_RANGE, input.bat_speed),
        (ATTACK_ANGLE_RANGE, input.attack_angle),
        (TIME_TO_CONTACT_RANGE, input.time_to_contact),
    ];
    for (range, value) in checks {
        if !range.contains(value) {
            tracing::warn!(
                field = range.field,
                value,
                min = range.min,
                max = range.max,
                "input outside the recognized range; result is extrapolated"
            );
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
