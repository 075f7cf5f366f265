//! End-to-end extraction tests over real image files on disk.

use features::{extract_features, FeatureConfig, FeatureError};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn gradient_rgb() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, y| {
        Rgb([(x * 2) as u8, (y * 2) as u8, (x + y) as u8])
    })
}

fn write_color_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    gradient_rgb().save(&path).unwrap();
    path
}

fn write_gray_png(dir: &Path, name: &str) -> PathBuf {
    let img = GrayImage::from_fn(100, 100, |x, y| Luma([((x + y) % 256) as u8]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

fn l2_norm(values: &[f32]) -> f32 {
    values.iter().map(|v| v * v).sum::<f32>().sqrt()
}

#[test]
fn color_png_yields_512_bins_and_64_bit_hash() {
    let dir = TempDir::new().unwrap();
    let path = write_color_png(dir.path(), "color.png");

    let features = extract_features(&path, &FeatureConfig::default()).unwrap();

    assert_eq!(features.histogram_vector.len(), 512);
    assert_eq!(features.phash.len(), 16);
    assert!(features.phash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn grayscale_png_yields_256_bins() {
    let dir = TempDir::new().unwrap();
    let path = write_gray_png(dir.path(), "gray.png");

    let features = extract_features(&path, &FeatureConfig::default()).unwrap();

    assert_eq!(features.histogram_vector.len(), 256);
    assert_eq!(features.phash.len(), 16);
}

#[test]
fn color_jpeg_decodes_like_any_color_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("color.jpg");
    gradient_rgb().save(&path).unwrap();

    let features = extract_features(&path, &FeatureConfig::default()).unwrap();

    assert_eq!(features.histogram_vector.len(), 512);
    assert_eq!(features.phash.len(), 16);
}

#[test]
fn histogram_is_normalized_and_bounded() {
    let dir = TempDir::new().unwrap();
    let path = write_color_png(dir.path(), "color.png");

    let features = extract_features(&path, &FeatureConfig::default()).unwrap();

    assert!((l2_norm(&features.histogram_vector) - 1.0).abs() < 1e-5);
    assert!(features
        .histogram_vector
        .iter()
        .all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn extraction_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = write_color_png(dir.path(), "color.png");
    let cfg = FeatureConfig::default();

    let first = extract_features(&path, &cfg).unwrap();
    let second = extract_features(&path, &cfg).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_file_is_image_open_error() {
    let result = extract_features("/nonexistent/missing.png", &FeatureConfig::default());

    match result {
        Err(FeatureError::ImageOpen { path, .. }) => {
            assert!(path.contains("missing.png"));
        }
        other => panic!("expected ImageOpen, got {other:?}"),
    }
}

#[test]
fn non_image_file_is_image_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"plain text pretending to be a png").unwrap();

    let result = extract_features(&path, &FeatureConfig::default());
    assert!(matches!(result, Err(FeatureError::ImageOpen { .. })));
}

#[test]
fn invalid_config_is_rejected_before_any_io() {
    let cfg = FeatureConfig::new().with_hash_size(0);

    // The path does not exist; an ImageOpen here would mean the file was
    // touched before the config check.
    let result = extract_features("/nonexistent/missing.png", &cfg);
    assert!(matches!(
        result,
        Err(FeatureError::InvalidHashSize { hash_size: 0 })
    ));
}

#[test]
fn custom_bins_change_vector_length() {
    let dir = TempDir::new().unwrap();
    let gray = write_gray_png(dir.path(), "gray.png");
    let color = write_color_png(dir.path(), "color.png");

    let gray_features =
        extract_features(&gray, &FeatureConfig::new().with_grayscale_bins(64)).unwrap();
    let color_features =
        extract_features(&color, &FeatureConfig::new().with_color_bins_per_channel(4)).unwrap();

    assert_eq!(gray_features.histogram_vector.len(), 64);
    assert_eq!(color_features.histogram_vector.len(), 64);
}

#[test]
fn similar_files_hash_close() {
    let dir = TempDir::new().unwrap();
    let original = write_color_png(dir.path(), "original.png");

    let mut altered = gradient_rgb();
    altered.put_pixel(50, 50, Rgb([0, 0, 0]));
    let altered_path = dir.path().join("altered.png");
    altered.save(&altered_path).unwrap();

    let cfg = FeatureConfig::default();
    let h1 = extract_features(&original, &cfg).unwrap().phash;
    let h2 = extract_features(&altered_path, &cfg).unwrap().phash;

    let a = u64::from_str_radix(&h1, 16).unwrap();
    let b = u64::from_str_radix(&h2, 16).unwrap();
    assert!((a ^ b).count_ones() <= 8);
}
