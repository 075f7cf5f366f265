//! Histogram computation for imgsig feature extraction.
//!
//! This module implements the two histogram shapes the service publishes:
//! a per-intensity histogram for single-channel images and a joint
//! three-channel histogram for color images, flattened row-major with the
//! red bin outermost. Counts are L2-normalized so vectors are comparable
//! across image sizes.

use image::DynamicImage;

/// Compute the intensity histogram of a single-channel image.
///
/// The image is read through its 8-bit luma view, so `0..=255` is split
/// into `bins` uniform buckets. The result has length `bins` and Euclidean
/// norm 1 (or all zeros for an empty image).
pub(crate) fn grayscale_histogram(image: &DynamicImage, bins: usize) -> Vec<f32> {
    let luma = image.to_luma8();
    let mut counts = vec![0u64; bins];
    for pixel in luma.pixels() {
        counts[bucket(pixel.0[0], bins)] += 1;
    }
    normalize_l2(&counts)
}

/// Compute the joint RGB histogram of a color image.
///
/// Each channel is split into `bins` uniform buckets and the three bucket
/// indices address one cell of a `bins x bins x bins` cube. The cube is
/// flattened row-major (red outermost, blue innermost), so the result has
/// length `bins` cubed. Alpha channels are dropped by the RGB conversion.
pub(crate) fn color_histogram(image: &DynamicImage, bins: usize) -> Vec<f32> {
    let rgb = image.to_rgb8();
    let mut counts = vec![0u64; bins * bins * bins];
    for pixel in rgb.pixels() {
        let r = bucket(pixel.0[0], bins);
        let g = bucket(pixel.0[1], bins);
        let b = bucket(pixel.0[2], bins);
        counts[(r * bins + g) * bins + b] += 1;
    }
    normalize_l2(&counts)
}

/// Map a channel value to one of `bins` uniform buckets over `0..=255`.
#[inline]
pub(crate) fn bucket(value: u8, bins: usize) -> usize {
    value as usize * bins / 256
}

/// Scale counts so the vector's Euclidean norm is 1.
///
/// The squared sum is accumulated in f64 before the final f32 narrowing so
/// large images do not lose counts to float rounding. An all-zero input
/// (empty image) stays all-zero.
fn normalize_l2(counts: &[u64]) -> Vec<f32> {
    let norm = counts
        .iter()
        .map(|&c| (c as f64) * (c as f64))
        .sum::<f64>()
        .sqrt();

    if norm == 0.0 {
        return vec![0.0; counts.len()];
    }

    counts.iter().map(|&c| (c as f64 / norm) as f32).collect()
}
