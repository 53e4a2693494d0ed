// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sprite sheet image loading.
//!
//! This module decodes an image file into RGBA pixels suitable for an egui
//! texture, along with the name and natural size the project needs.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// A decoded sprite sheet.
pub struct LoadedImage {
    /// File name shown to the user and written to exports
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8, row major
    pub pixels: Vec<u8>,
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(LoadedImage {
        name,
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
