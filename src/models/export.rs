// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Export document.
//!
//! The export document is the only artifact the tool produces: the texture
//! reference, the source image identity and every animation as an ordered
//! list of rectangles.

use super::animation::Animation;
use super::project::Project;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// File stem used when the image name has none.
pub const DEFAULT_EXPORT_STEM: &str = "animations";

/// Serializable snapshot of a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub texture: String,
    pub image_name: String,
    pub image_width: u32,
    pub image_height: u32,
    #[serde(serialize_with = "serialize_animations")]
    pub animations: Vec<Animation>,
}

/// Write animations as a `name -> [frame, ...]` object, in project order.
fn serialize_animations<S>(animations: &[Animation], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(animations.len()))?;
    for animation in animations {
        map.serialize_entry(&animation.name, &animation.frames)?;
    }
    map.end()
}

impl ExportDocument {
    /// Build the export document, or `None` if no image has been loaded.
    pub fn from_project(project: &Project) -> Option<Self> {
        if project.image_name().is_empty() {
            return None;
        }
        let (image_width, image_height) = project.image_size();
        Some(Self {
            texture: project.texture_path().to_string(),
            image_name: project.image_name().to_string(),
            image_width,
            image_height,
            animations: project.animations().to_vec(),
        })
    }

    /// Suggested file name for this document.
    pub fn file_name(&self) -> String {
        export_file_name(&self.image_name)
    }
}

/// Derive the export file name from an image name.
///
/// Everything from the first `.` on is dropped.
pub fn export_file_name(image_name: &str) -> String {
    let stem = image_name.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { DEFAULT_EXPORT_STEM } else { stem };
    format!("{}.json", stem)
}
