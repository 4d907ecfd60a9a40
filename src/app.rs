//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and sets up logging
//! - parses CLI arguments
//! - runs the color pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{ColorArgs, Command, PeakArgs, PlotArgs};
use crate::domain::{Nanometers, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "BLACKBODY_LOG";

/// Entry point for the `blackbody` binary.
pub fn run() -> Result<(), AppError> {
    // Missing `.env` is the normal case.
    let _ = dotenvy::dotenv();
    init_logging();

    // We want `blackbody 6500` to behave like `blackbody color 6500`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Color(args) => handle_color(args),
        Command::Peak(args) => handle_peak(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so stdout stays a clean report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_color(args: ColorArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    tracing::debug!(?config, "starting color run");
    let run = pipeline::run(&config)?;

    if config.print_samples {
        print!("{}", crate::report::format_samples(&run.spectrum));
    }
    if config.print_normalized {
        print!("{}", crate::report::format_normalized_samples(&run.spectrum));
    }

    println!("{}", crate::report::format_color_summary(&run));

    if config.plot {
        let plot = crate::plot::render_spectrum_plot(
            &run.spectrum,
            Some(run.peak_wavelength),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_samples_csv(path, &run.spectrum)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::color_json::write_color_json(path, &run.to_color_file())?;
    }

    Ok(())
}

fn handle_peak(args: PeakArgs) -> Result<(), AppError> {
    let t = args.temperature;
    println!(
        "{}",
        crate::report::format_peak(
            t,
            crate::math::peak_wavelength(t),
            crate::math::peak_radiance(t)
        )
    );
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let color = crate::io::color_json::read_color_json(&args.input)?;
    tracing::debug!(temperature = color.temperature.value(), "loaded color JSON");

    let plot = crate::plot::render_plot_from_color_file(&color, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn run_config_from_args(args: &ColorArgs) -> RunConfig {
    RunConfig {
        temperature: args.temperature,
        start: Nanometers(args.start),
        end: Nanometers(args.end),
        sample_count: args.samples,
        print_samples: args.print_samples,
        print_normalized: args.print_normalized,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `blackbody <args>` defaults to `blackbody color <args>`.
///
/// Rules:
/// - `blackbody`                        -> unchanged (clap prints usage)
/// - `blackbody 6500 ...`               -> `blackbody color 6500 ...`
/// - `blackbody --plot 6500`            -> `blackbody color --plot 6500`
/// - `blackbody --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "color" | "peak" | "plot");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "color".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_temperature_defaults_to_color() {
        assert_eq!(
            rewrite_args(argv(&["blackbody", "6500"])),
            argv(&["blackbody", "color", "6500"])
        );
        assert_eq!(
            rewrite_args(argv(&["blackbody", "--plot", "3000"])),
            argv(&["blackbody", "color", "--plot", "3000"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for args in [
            &["blackbody"][..],
            &["blackbody", "--help"],
            &["blackbody", "-V"],
            &["blackbody", "peak", "5000"],
            &["blackbody", "plot", "--input", "x.json"],
            &["blackbody", "color", "6500"],
        ] {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }
    }

    #[test]
    fn rewritten_args_parse_into_run_config() {
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&[
            "blackbody",
            "2700",
            "--start",
            "400",
            "--end",
            "700",
            "-n",
            "31",
            "--export-json",
            "out.json",
        ])))
        .unwrap();
        let Command::Color(args) = cli.command else {
            panic!("expected color command");
        };
        let config = run_config_from_args(&args);
        assert_eq!(config.temperature.value(), 2700.0);
        assert_eq!(config.start, Nanometers(400.0));
        assert_eq!(config.end, Nanometers(700.0));
        assert_eq!(config.sample_count, 31);
        assert_eq!(config.export_json.as_deref(), Some(std::path::Path::new("out.json")));
        assert!(config.export_csv.is_none());
    }
}
