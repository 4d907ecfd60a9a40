//! Export spectrum samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Spectrum;
use crate::error::AppError;

/// Write one row per sample: wavelength, raw radiance and max-normalized radiance.
pub fn write_samples_csv(path: &Path, spectrum: &Spectrum) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            AppError::IO,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;
    let mut out = BufWriter::new(file);

    writeln!(out, "wavelength_nm,radiance,normalized")
        .map_err(|e| AppError::new(AppError::IO, format!("Failed to write export CSV header: {e}")))?;

    let normalized = spectrum.normalized();
    for ((lambda, s), n) in spectrum.points().zip(normalized) {
        writeln!(out, "{:.6},{:.6},{:.10}", lambda.value(), s.value(), n)
            .map_err(|e| AppError::new(AppError::IO, format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::new(AppError::IO, format!("Failed to flush export CSV: {e}")))?;

    tracing::info!(path = %path.display(), rows = spectrum.len(), "wrote samples CSV");
    Ok(())
}
