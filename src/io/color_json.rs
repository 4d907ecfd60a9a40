//! Read/write color JSON files.
//!
//! Color JSON is the "portable" result of a run:
//! - temperature and Wien peak
//! - XYZ, linear RGB and normalized RGB
//! - the sampled spectrum, so `blackbody plot` can redraw it later
//!
//! The schema is defined by `domain::ColorFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::ColorFile;
use crate::error::AppError;

/// Write a color JSON file.
pub fn write_color_json(path: &Path, color: &ColorFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            AppError::IO,
            format!("Failed to create color JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), color)
        .map_err(|e| AppError::new(AppError::IO, format!("Failed to write color JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote color JSON");
    Ok(())
}

/// Read a color JSON file.
pub fn read_color_json(path: &Path) -> Result<ColorFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            AppError::IO,
            format!("Failed to open color JSON '{}': {e}", path.display()),
        )
    })?;
    let color: ColorFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(AppError::IO, format!("Invalid color JSON: {e}")))?;
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline;
    use crate::color::{CIE_LAMBDA_END, CIE_LAMBDA_START};
    use crate::domain::{Kelvin, RunConfig};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("blackbody-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn written_file_reads_back_identically() {
        let config = RunConfig {
            temperature: Kelvin(4000.0),
            start: CIE_LAMBDA_START,
            end: CIE_LAMBDA_END,
            sample_count: 46,
            print_samples: false,
            print_normalized: false,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_json: None,
        };
        let color = pipeline::run(&config).unwrap().to_color_file();

        let path = temp_path("roundtrip");
        write_color_json(&path, &color).unwrap();
        let back = read_color_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * a.abs().max(1.0);
        assert_eq!(back.tool, color.tool);
        assert_eq!(back.temperature, color.temperature);
        assert_eq!(back.spectrum.len(), 46);
        assert!(close(back.xyz.y, color.xyz.y));
        assert!(close(back.rgb_normalized.b, color.rgb_normalized.b));
        assert!(close(back.peak_wavelength.value(), color.peak_wavelength.value()));
        for (a, b) in back.spectrum.samples.iter().zip(&color.spectrum.samples) {
            assert!(close(a.value(), b.value()));
        }
    }

    #[test]
    fn garbage_is_rejected_with_io_exit_code() {
        let path = temp_path("garbage");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_color_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert_eq!(err.exit_code(), AppError::IO);
        assert!(err.to_string().starts_with("Invalid color JSON"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_color_json(Path::new("/nonexistent/blackbody.json")).unwrap_err();
        assert_eq!(err.exit_code(), AppError::IO);
    }
}
