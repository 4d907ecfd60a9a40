/// Failures raised by the numeric core.
///
/// Invalid physical inputs (negative wavelengths or temperatures) never produce
/// an error; they degrade to zero-valued results. Only structural misuse of the
/// pipeline is reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("spectrum has {actual} samples, the CIE 1931 table needs exactly {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    /// Malformed command-line input (clap uses the same status for its own errors).
    pub const USAGE: u8 = 2;
    /// Reading or writing an export failed.
    pub const IO: u8 = 3;
    /// The color pipeline rejected its input.
    pub const COMPUTE: u8 = 4;

    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        AppError::new(AppError::COMPUTE, format!("Color computation failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_maps_to_compute_exit_code() {
        let err: AppError = ColorError::LengthMismatch {
            expected: 471,
            actual: 3,
        }
        .into();
        assert_eq!(err.exit_code(), AppError::COMPUTE);
        assert!(err.to_string().contains("3 samples"), "got: {err}");
    }
}
