//! Crate-level error types.
//!
//! The camera itself never fails; errors come from options I/O and from
//! bringing up a GPU context or viewer window.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the freecam crate.
#[derive(Debug)]
pub enum FreecamError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for FreecamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for FreecamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for FreecamError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for FreecamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let io = FreecamError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "preset.toml",
        ));
        assert_eq!(io.to_string(), "I/O error: preset.toml");
        assert!(io.source().is_some());

        let parse = FreecamError::OptionsParse("bad key".into());
        assert_eq!(parse.to_string(), "options parse error: bad key");
        assert!(parse.source().is_none());
    }

    #[test]
    fn gpu_errors_convert() {
        let err = FreecamError::from(RenderContextError::UnsupportedSurface);
        assert!(matches!(err, FreecamError::Gpu(_)));
        assert!(err.to_string().starts_with("GPU error:"));
    }
}
