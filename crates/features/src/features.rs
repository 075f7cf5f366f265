//! Feature artifact types for the imgsig extraction layer.
//!
//! This module defines the public feature representation produced by the
//! extraction stage. The field names are part of the wire contract: the
//! processing endpoint serializes [`ImageFeatures`] directly as its success
//! payload, so renaming a field is a breaking API change.

use serde::{Deserialize, Serialize};

/// Features extracted from one decoded image.
///
/// The features are produced **only** from decoded pixel data and a
/// [`crate::config::FeatureConfig`]. No file metadata, timestamps, or
/// environment state is consulted, which is what makes extraction
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageFeatures {
    /// Flattened, L2-normalized histogram.
    ///
    /// Length is `grayscale_bins` (256 by default) for single-channel
    /// images and `color_bins_per_channel` cubed (512 by default) for
    /// everything else. Every entry lies in `[0, 1]` and the vector's
    /// Euclidean norm is 1 unless the image had no pixels.
    pub histogram_vector: Vec<f32>,
    /// Lowercase hex rendering of the DCT perceptual hash.
    ///
    /// With the default `hash_size = 8` this is 16 characters (64 bits).
    /// Visually similar images produce hashes with small Hamming distance.
    pub phash: String,
}
