// SPDX-License-Identifier: MPL-2.0
//! Decoded slide image container and byte-level decoding.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready to hand to Iced's image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Natural size of the image as an Iced size.
    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width as f32, self.height as f32)
    }
}

/// Decode fetched bytes (JPEG, PNG, GIF, WebP, BMP) into an [`ImageData`].
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
