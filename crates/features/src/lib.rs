//! # imgsig Feature Extraction
//!
//! This crate provides image feature extraction for the imgsig service. It
//! takes a decodable image and produces a compact pair of similarity
//! features that are robust to minor content modifications: a DCT perceptual
//! hash and an L2-normalized histogram vector.
//!
//! ## Contract
//!
//! - [`extract_from_image`] is a pure function of `(decoded_pixels, config)`
//!   with no I/O, no network, and no reliance on clocks or global process
//!   state.
//! - [`extract_features`] adds exactly one fallible step on top: opening and
//!   decoding the file at a path. Missing files, unreadable files, and
//!   undecodable formats all surface as [`FeatureError::ImageOpen`]; there
//!   is no other I/O in the crate.
//!
//! Invariant: for the same image bytes and the same [`FeatureConfig`], the
//! extracted features are bit identical.
//!
//! ## Core Pipeline
//!
//! Feature extraction consists of three stages:
//!
//! 1.  **Decode**: The file is opened and decoded into pixels. The decoded
//!     channel layout (not the file extension) drives everything downstream.
//!
//! 2.  **Histogram**: Images that decode as single-channel luma get a
//!     per-intensity histogram (256 bins by default); every other layout
//!     gets a joint RGB histogram (8 bins per channel, 512 values by
//!     default), flattened row-major with the red bin outermost. Counts are
//!     L2-normalized so vectors are comparable across image sizes.
//!
//! 3.  **Perceptual hash**: A mean hash over the DCT low-frequency
//!     coefficients (the classic pHash construction), rendered as lowercase
//!     hex. Computation is delegated to `image_hasher` rather than
//!     reimplemented here.
//!
//! ## Example Usage
//!
//! ```
//! use features::{extract_from_image, FeatureConfig};
//! use image::{DynamicImage, Rgb, RgbImage};
//!
//! let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([200, 40, 40])));
//! let features = extract_from_image(&image, &FeatureConfig::default()).unwrap();
//!
//! assert_eq!(features.histogram_vector.len(), 512);
//! assert_eq!(features.phash.len(), 16);
//! ```
//!
pub mod config;
pub mod features;
mod histogram;
mod phash;

pub use crate::config::{FeatureConfig, FeatureError};
pub use crate::features::ImageFeatures;

use image::DynamicImage;
use std::path::Path;

/// Extract features from the image file at `path`.
///
/// This is the service entry point: the configuration is validated, the file
/// is opened and decoded, then the pure pixel pipeline runs. The open is the
/// only fallible I/O step.
pub fn extract_features(
    path: impl AsRef<Path>,
    cfg: &FeatureConfig,
) -> Result<ImageFeatures, FeatureError> {
    cfg.validate()?;

    let path = path.as_ref();
    let image = image::open(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to open image");
        FeatureError::ImageOpen {
            path: path.display().to_string(),
            source,
        }
    })?;

    extract_from_image(&image, cfg)
}

/// Extract features from an already decoded image (histogram, then hash).
///
/// The histogram shape follows the decoded channel layout: 8- and 16-bit
/// luma images take the grayscale path, every other layout (RGB, RGBA,
/// luma-with-alpha, ...) takes the joint color path.
pub fn extract_from_image(
    image: &DynamicImage,
    cfg: &FeatureConfig,
) -> Result<ImageFeatures, FeatureError> {
    cfg.validate()?;

    let histogram_vector = match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => {
            histogram::grayscale_histogram(image, cfg.grayscale_bins)
        }
        _ => histogram::color_histogram(image, cfg.color_bins_per_channel),
    };

    let phash = phash::phash_hex(image, cfg.hash_size);

    Ok(ImageFeatures {
        histogram_vector,
        phash,
    })
}
