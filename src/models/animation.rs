// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation data structures.
//!
//! This module defines frames (rectangles on the sprite sheet) and the
//! named, ordered sequences of frames that make up an animation.

use serde::{Deserialize, Serialize};

/// A rectangle on the sprite sheet, in source image pixels.
///
/// Frames have no identity of their own; they are addressed by their
/// index within an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Create a new frame at the given position with the given size.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// A named, ordered sequence of frames. Order is playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub name: String,
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Create an empty animation with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
