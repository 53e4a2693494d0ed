// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project state management.
//!
//! This module owns the authoritative authoring state: the loaded sprite
//! sheet, the grid cell size and the named animations. Every mutation
//! either applies completely or leaves the project untouched, and reports
//! which of the two happened.

use super::animation::{Animation, Frame};
use crate::config::AppConfig;
use crate::util::geometry::{cells_across, sanitize_dimension};

/// Cell size used when an image is loaded and no grid has been set yet.
pub const FALLBACK_CELL_SIZE: u32 = 64;

/// Complete authoring state for one sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    image_name: String,
    texture_path: String,
    image_url: Option<String>,
    image_width: u32,
    image_height: u32,
    frame_width: u32,
    frame_height: u32,
    animations: Vec<Animation>,
    active_animation: String,
}

impl Default for Project {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Project {
    /// Create an empty project (no image) seeded from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut animations = Vec::new();
        let mut active_animation = String::new();
        if !config.default_animation.is_empty() {
            animations.push(Animation::new(config.default_animation.clone()));
            active_animation = config.default_animation.clone();
        }

        Self {
            image_name: String::new(),
            texture_path: config.texture_path.clone(),
            image_url: None,
            image_width: 0,
            image_height: 0,
            frame_width: config.cell_width,
            frame_height: config.cell_height,
            animations,
            active_animation,
        }
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn texture_path(&self) -> &str {
        &self.texture_path
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    /// Current grid cell size as (width, height).
    pub fn cell_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn active_animation(&self) -> &str {
        &self.active_animation
    }

    /// Number of whole grid columns across the image.
    pub fn columns(&self) -> u32 {
        cells_across(self.image_width, self.frame_width)
    }

    /// Number of whole grid rows down the image.
    pub fn rows(&self) -> u32 {
        cells_across(self.image_height, self.frame_height)
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name == name)
    }

    pub fn contains_animation(&self, name: &str) -> bool {
        self.animation(name).is_some()
    }

    /// Frame count of the named animation (0 if it does not exist).
    pub fn frame_count(&self, name: &str) -> usize {
        self.animation(name).map_or(0, Animation::frame_count)
    }

    /// Frames of the active animation.
    ///
    /// Empty when nothing is active or the active name is not a key.
    pub fn active_frames(&self) -> &[Frame] {
        self.animation(&self.active_animation)
            .map(|a| a.frames.as_slice())
            .unwrap_or(&[])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.animations.iter().position(|a| a.name == name)
    }

    /// Replace the loaded image. Grid size carries over unless unset.
    pub fn load_image(&mut self, name: &str, url: &str, width: u32, height: u32) {
        self.image_name = name.to_string();
        self.image_url = Some(url.to_string());
        self.image_width = width;
        self.image_height = height;
        if self.frame_width == 0 {
            self.frame_width = FALLBACK_CELL_SIZE;
        }
        if self.frame_height == 0 {
            self.frame_height = FALLBACK_CELL_SIZE;
        }
    }

    /// Set the grid cell size. Existing frames keep their size.
    ///
    /// Callers are expected to sanitize the values first.
    pub fn set_cell_size(&mut self, width: u32, height: u32) -> bool {
        if (width, height) == (self.frame_width, self.frame_height) {
            return false;
        }
        self.frame_width = width;
        self.frame_height = height;
        true
    }

    /// Divide the image width into `columns` cells.
    pub fn set_columns(&mut self, columns: u32) -> bool {
        if columns == 0 || self.image_width == 0 {
            return false;
        }
        let width = sanitize_dimension((self.image_width / columns) as i64);
        self.set_cell_size(width, self.frame_height)
    }

    /// Divide the image height into `rows` cells.
    pub fn set_rows(&mut self, rows: u32) -> bool {
        if rows == 0 || self.image_height == 0 {
            return false;
        }
        let height = sanitize_dimension((self.image_height / rows) as i64);
        self.set_cell_size(self.frame_width, height)
    }

    pub fn set_texture_path(&mut self, path: &str) {
        self.texture_path = path.to_string();
    }

    /// Add an empty animation and make it active.
    pub fn add_animation(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains_animation(name) {
            return false;
        }
        self.animations.push(Animation::new(name));
        self.active_animation = name.to_string();
        true
    }

    /// Rename an animation in place, keeping its frames and position.
    pub fn rename_animation(&mut self, old_name: &str, new_name: &str) -> bool {
        if new_name.is_empty() || new_name == old_name || self.contains_animation(new_name) {
            return false;
        }
        let Some(index) = self.position(old_name) else {
            return false;
        };

        self.animations[index].name = new_name.to_string();
        if self.active_animation == old_name {
            self.active_animation = new_name.to_string();
        }
        true
    }

    /// Delete an animation.
    ///
    /// If it was active, the animation that followed it becomes active
    /// (or the new last one when it was last), or nothing if none remain.
    pub fn delete_animation(&mut self, name: &str) -> bool {
        let Some(index) = self.position(name) else {
            return false;
        };

        self.animations.remove(index);
        if self.active_animation == name {
            self.active_animation = self
                .animations
                .get(index)
                .or_else(|| self.animations.last())
                .map(|a| a.name.clone())
                .unwrap_or_default();
        }
        true
    }

    /// Select the active animation. The name is not checked against the
    /// current animations.
    pub fn set_active_animation(&mut self, name: &str) {
        self.active_animation = name.to_string();
    }

    /// Append a frame to the active animation.
    pub fn append_frame(&mut self, frame: Frame) -> bool {
        if self.active_animation.is_empty() {
            return false;
        }
        let Some(index) = self.position(&self.active_animation) else {
            return false;
        };
        self.animations[index].frames.push(frame);
        true
    }

    /// Remove the frame at `index` from the named animation.
    pub fn remove_frame_at(&mut self, animation: &str, index: usize) -> bool {
        let Some(anim) = self.animations.iter_mut().find(|a| a.name == animation) else {
            return false;
        };
        if index >= anim.frames.len() {
            return false;
        }
        anim.frames.remove(index);
        true
    }
}
