use std::{
    fs,
    path::{Path, PathBuf},
};

use image::imageops::FilterType;
use thiserror::Error;

use crate::models::Bounds;

/// Why an image could not be turned into a [`Picture`].
///
/// Always recoverable: the session skips to the next draw.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was opened.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not an image we can decode.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// File that was decoded.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGB image, already scaled to its display bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGB triples.
    pub pixels: Vec<u8>,
}

impl Picture {
    /// RGB value at `(x, y)`; out-of-range coordinates read as black.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0];
        }
        let offset = ((y * self.width + x) * 3) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }
}

/// Largest size with the same aspect ratio that fits `max_width` × `max_height`.
///
/// Scales up as well as down. Fractions are truncated, with a 1×1 floor.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let ratio = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scaled_width = (f64::from(width) * ratio) as u32;
    let scaled_height = (f64::from(height) * ratio) as u32;
    (scaled_width.max(1), scaled_height.max(1))
}

/// Read, decode and scale the image at `path` to fit `bounds`.
pub fn load_picture(path: &Path, bounds: Bounds) -> Result<Picture, DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = fit_within(
        decoded.width(),
        decoded.height(),
        bounds.width,
        bounds.height,
    );
    let rgb = decoded
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgb8();

    Ok(Picture {
        width: rgb.width(),
        height: rgb.height(),
        pixels: rgb.into_raw(),
    })
}
