//! Configuration and error types for imgsig feature extraction.
//!
//! This module defines the public configuration surface for the feature
//! layer. Apart from the initial file open, extraction is a pure function of
//! `(decoded_pixels, config)`, so two calls over the same image bytes with
//! the same config produce bit-identical features.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic configuration for the image feature pipeline.
///
/// The defaults reproduce the service's published wire contract: a 64-bit
/// DCT perceptual hash rendered as 16 hex characters, 256 intensity bins for
/// grayscale images, and an 8 x 8 x 8 joint histogram (512 values) for color
/// images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureConfig {
    /// Side length of the square perceptual-hash grid.
    ///
    /// The hash carries `hash_size * hash_size` bits, so the rendered hex
    /// string grows quadratically with this value. Any change here makes
    /// hashes incomparable with previously computed ones.
    pub hash_size: u32,
    /// Number of intensity bins for single-channel (grayscale) images.
    ///
    /// Bins partition the `0..=255` intensity range uniformly.
    pub grayscale_bins: usize,
    /// Number of bins per channel for the joint RGB histogram.
    ///
    /// The flattened color vector has `color_bins_per_channel` cubed entries.
    pub color_bins_per_channel: usize,
}

impl FeatureConfig {
    /// Create a new configuration with the service defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the perceptual-hash grid size. Typical values: 8 or 16.
    /// Larger grids discriminate more finely but hash strings get longer.
    pub fn with_hash_size(mut self, hash_size: u32) -> Self {
        self.hash_size = hash_size;
        self
    }

    /// Set the number of grayscale intensity bins. Maximum 256 (one bin per
    /// 8-bit intensity level).
    pub fn with_grayscale_bins(mut self, bins: usize) -> Self {
        self.grayscale_bins = bins;
        self
    }

    /// Set the number of bins per color channel. The histogram vector length
    /// is this value cubed, so it grows quickly.
    pub fn with_color_bins_per_channel(mut self, bins: usize) -> Self {
        self.color_bins_per_channel = bins;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.hash_size < 2 {
            return Err(FeatureError::InvalidHashSize {
                hash_size: self.hash_size,
            });
        }
        if self.grayscale_bins < 1 || self.grayscale_bins > 256 {
            return Err(FeatureError::InvalidGrayscaleBins {
                bins: self.grayscale_bins,
            });
        }
        if self.color_bins_per_channel < 1 || self.color_bins_per_channel > 256 {
            return Err(FeatureError::InvalidColorBins {
                bins: self.color_bins_per_channel,
            });
        }

        Ok(())
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            hash_size: 8,
            grayscale_bins: 256,
            color_bins_per_channel: 8,
        }
    }
}

/// Errors returned by the image feature pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeatureError {
    /// The file could not be opened or decoded as an image.
    ///
    /// Missing files, unreadable files, and files that are not a decodable
    /// image format all surface here; this is the only I/O error path in
    /// the crate.
    #[error("failed to open image {path}: {source}")]
    ImageOpen {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid config: hash_size must be >= 2 (got {hash_size})")]
    InvalidHashSize { hash_size: u32 },

    #[error("invalid config: grayscale_bins must be in 1..=256 (got {bins})")]
    InvalidGrayscaleBins { bins: usize },

    #[error("invalid config: color_bins_per_channel must be in 1..=256 (got {bins})")]
    InvalidColorBins { bins: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = FeatureConfig::default();
        assert_eq!(cfg.hash_size, 8);
        assert_eq!(cfg.grayscale_bins, 256);
        assert_eq!(cfg.color_bins_per_channel, 8);
    }

    #[test]
    fn config_new_creates_default() {
        let cfg_new = FeatureConfig::new();
        let cfg_default = FeatureConfig::default();
        assert_eq!(cfg_new, cfg_default);
    }

    #[test]
    fn config_builder_with_hash_size() {
        let cfg = FeatureConfig::new().with_hash_size(16);
        assert_eq!(cfg.hash_size, 16);
    }

    #[test]
    fn config_builder_with_grayscale_bins() {
        let cfg = FeatureConfig::new().with_grayscale_bins(64);
        assert_eq!(cfg.grayscale_bins, 64);
    }

    #[test]
    fn config_builder_with_color_bins_per_channel() {
        let cfg = FeatureConfig::new().with_color_bins_per_channel(4);
        assert_eq!(cfg.color_bins_per_channel, 4);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = FeatureConfig::new()
            .with_hash_size(4)
            .with_grayscale_bins(32)
            .with_color_bins_per_channel(2);

        assert_eq!(cfg.hash_size, 4);
        assert_eq!(cfg.grayscale_bins, 32);
        assert_eq!(cfg.color_bins_per_channel, 2);
    }

    #[test]
    fn config_validate_valid() {
        let cfg = FeatureConfig::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_validate_invalid_hash_size_zero() {
        let cfg = FeatureConfig::new().with_hash_size(0);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidHashSize { hash_size: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_hash_size_one() {
        let cfg = FeatureConfig::new().with_hash_size(1);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidHashSize { hash_size: 1 })
        ));
    }

    #[test]
    fn config_validate_invalid_grayscale_bins_zero() {
        let cfg = FeatureConfig::new().with_grayscale_bins(0);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidGrayscaleBins { bins: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_grayscale_bins_over_256() {
        let cfg = FeatureConfig::new().with_grayscale_bins(257);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidGrayscaleBins { bins: 257 })
        ));
    }

    #[test]
    fn config_validate_invalid_color_bins_zero() {
        let cfg = FeatureConfig::new().with_color_bins_per_channel(0);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidColorBins { bins: 0 })
        ));
    }

    #[test]
    fn config_validate_invalid_color_bins_over_256() {
        let cfg = FeatureConfig::new().with_color_bins_per_channel(300);
        assert!(matches!(
            cfg.validate(),
            Err(FeatureError::InvalidColorBins { bins: 300 })
        ));
    }

    #[test]
    fn config_validate_grayscale_bins_at_max() {
        let cfg = FeatureConfig::new().with_grayscale_bins(256);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_clone() {
        let cfg = FeatureConfig::default();
        let cloned = cfg.clone();
        assert_eq!(cfg, cloned);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = FeatureConfig::new()
            .with_hash_size(16)
            .with_grayscale_bins(128)
            .with_color_bins_per_channel(4);

        let serialized = serde_json::to_string(&cfg).unwrap();
        let deserialized: FeatureConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn error_display_invalid_hash_size() {
        let err = FeatureError::InvalidHashSize { hash_size: 1 };
        assert!(err.to_string().contains("invalid config"));
        assert!(err.to_string().contains("hash_size must be >= 2"));
    }

    #[test]
    fn error_display_invalid_color_bins() {
        let err = FeatureError::InvalidColorBins { bins: 0 };
        assert!(err.to_string().contains("color_bins_per_channel"));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn error_display_image_open_includes_path() {
        let source = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = FeatureError::ImageOpen {
            path: "/tmp/missing.png".to_string(),
            source,
        };
        assert!(err.to_string().contains("/tmp/missing.png"));
        assert!(err.to_string().contains("failed to open image"));
    }
}
