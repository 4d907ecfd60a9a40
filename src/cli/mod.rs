//! Command-line parsing for the black-body color tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the physics/colorimetry code. Range defaults can also come from
//! the environment (or a `.env` file loaded before parsing).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::color::{CIE_LAMBDA_END, CIE_LAMBDA_START, CIE_SAMPLES};
use crate::domain::Kelvin;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "blackbody",
    version,
    about = "Compute the XYZ/RGB representation of a black-body spectrum"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the spectrum and color for a temperature (default command).
    Color(ColorArgs),
    /// Print the Wien peak wavelength and the radiance there.
    Peak(PeakArgs),
    /// Plot a spectrum previously exported with `--export-json`.
    Plot(PlotArgs),
}

/// Options for the color pipeline.
#[derive(Debug, Args, Clone)]
pub struct ColorArgs {
    /// Temperature in kelvin (must be > 0).
    #[arg(value_name = "KELVIN", value_parser = parse_temperature, allow_negative_numbers = true)]
    pub temperature: Kelvin,

    /// First wavelength (nm) of the displayed spectrum.
    #[arg(long, env = "BLACKBODY_START_NM", default_value_t = CIE_LAMBDA_START.value())]
    pub start: f64,

    /// Last wavelength (nm) of the displayed spectrum.
    #[arg(long, env = "BLACKBODY_END_NM", default_value_t = CIE_LAMBDA_END.value())]
    pub end: f64,

    /// Number of samples in the displayed spectrum.
    #[arg(short = 'n', long, env = "BLACKBODY_SAMPLES", default_value_t = CIE_SAMPLES)]
    pub samples: usize,

    /// Print every raw spectral sample.
    #[arg(long)]
    pub print_samples: bool,

    /// Print every spectral sample divided by the largest one.
    #[arg(long)]
    pub print_normalized: bool,

    /// Render an ASCII plot of the spectrum.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the spectrum samples to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export spectrum + color to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for the peak report.
#[derive(Debug, Args, Clone)]
pub struct PeakArgs {
    /// Temperature in kelvin (must be > 0).
    #[arg(value_name = "KELVIN", value_parser = parse_temperature, allow_negative_numbers = true)]
    pub temperature: Kelvin,
}

/// Options for plotting a saved spectrum.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// JSON file produced by `blackbody --export-json`.
    #[arg(long, value_name = "JSON")]
    pub input: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Parse a temperature argument: a finite real strictly greater than zero.
pub fn parse_temperature(raw: &str) -> Result<Kelvin, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("could not convert temperature '{raw}' to a number"))?;
    if !(value.is_finite() && value > 0.0) {
        return Err("temperature must be in range (0, inf)".to_string());
    }
    Ok(Kelvin(value))
}
