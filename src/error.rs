//! Domain error types for catreel
//!
//! Provides structured error types for different domains:
//! - `CarouselError` for carousel configuration
//! - `FeedError` for loading sighting feeds
//! - `CatreelError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for catreel
#[derive(Debug, Error)]
pub enum CatreelError {
    #[error("Carousel error: {0}")]
    Carousel(#[from] CarouselError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Degenerate carousel configuration, rejected at setup time
#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("card width must be a positive finite number, got {0}")]
    InvalidCardWidth(f64),

    #[error("gap must be a non-negative finite number, got {0}")]
    InvalidGap(f64),

    #[error("item pitch (card width + gap) must be positive, got {0}")]
    DegenerateGeometry(f64),
}

/// Errors related to sighting feeds
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read feed {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse feed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate sighting id '{0}'")]
    DuplicateId(String),

    #[error("Sighting #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// Result type alias for CatreelError
pub type Result<T> = std::result::Result<T, CatreelError>;

/// Result type alias for CarouselError
pub type CarouselResult<T> = std::result::Result<T, CarouselError>;

/// Result type alias for FeedError
pub type FeedResult<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_error_converts_to_top_level() {
        let err: CatreelError = CarouselError::DegenerateGeometry(0.0).into();
        assert!(matches!(err, CatreelError::Carousel(_)));
        assert!(err.to_string().contains("item pitch"));
    }

    #[test]
    fn test_feed_error_converts_to_top_level() {
        let err: CatreelError = FeedError::DuplicateId("cat-1".into()).into();
        assert!(matches!(err, CatreelError::Feed(_)));
        assert_eq!(err.to_string(), "Feed error: Duplicate sighting id 'cat-1'");
    }
}
