//! DCT perceptual hashing for imgsig feature extraction.
//!
//! This module delegates to `image_hasher`'s mean hasher with DCT
//! preprocessing, the classic pHash construction: the image is shrunk onto a
//! small grid, transformed to the frequency domain, and each low-frequency
//! coefficient is compared against the mean to yield one bit. Visually
//! similar images therefore produce hashes with small Hamming distance.

use image::DynamicImage;
use image_hasher::{HashAlg, HasherConfig};

/// Hash an image on a `size x size` grid and render the bits as lowercase
/// hex.
///
/// The output carries `size * size` bits rounded up to whole bytes, so the
/// default `size = 8` yields 16 hex characters (64 bits). The hasher handles
/// grayscale and color inputs alike.
pub(crate) fn phash_hex(image: &DynamicImage, size: u32) -> String {
    let hasher = HasherConfig::new()
        .hash_size(size, size)
        .hash_alg(HashAlg::Mean)
        .preproc_dct()
        .to_hasher();

    hex::encode(hasher.hash_image(image).as_bytes())
}
