//! Image discovery and decoding.

/// Directory listing and identifier resolution.
pub mod catalog;
/// Decoding and fit-to-box scaling.
pub mod picture;

pub use catalog::{is_image_name, split_selection, ImageCatalog, IMAGE_EXTENSIONS};
pub use picture::{fit_within, load_picture, DecodeError, Picture};
