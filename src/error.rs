//! Errors raised at the crate boundary.
//!
//! Composition itself never fails: bad counts are clamped and unknown names
//! fall back to defaults. Only the adapters around it (configuration parsing,
//! color parsing, rasterization, file output) can return an [`Error`].

use thiserror::Error;

/// Errors produced by boundary operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration document could not be parsed or written.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A color string was not a valid hex color.
    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    Color(String),

    /// The serialized document was rejected by the SVG parser.
    #[error("failed to parse SVG document: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// The requested raster size could not be allocated.
    #[error("cannot allocate a {width}x{height} raster")]
    PixmapSize { width: u32, height: u32 },

    /// Raster encoding failed.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn pixmap_size_message() {
        let err = Error::PixmapSize { width: 0, height: 10 };
        assert_eq!(err.to_string(), "cannot allocate a 0x10 raster");
    }
}
