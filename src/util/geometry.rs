// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate transformation between client
//! (screen) space and canvas space, and the grid snapping rules used to
//! turn a pointer position into a sprite sheet cell.

use serde::{Deserialize, Serialize};

/// A 2D point. In canvas space the units are source image pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Convert a client-space position to canvas space.
///
/// `container_origin` is the top-left corner of the rendered (already
/// zoomed) image container in client space. Scroll offset is assumed to be
/// reflected in that origin.
pub fn client_to_canvas(client: Point, container_origin: Point, zoom: f64) -> Point {
    Point {
        x: (client.x - container_origin.x) / zoom,
        y: (client.y - container_origin.y) / zoom,
    }
}

/// Snap a canvas point to the origin of the grid cell containing it.
///
/// Cell dimensions of zero are treated as 1.
pub fn snap_to_grid(point: Point, cell_width: u32, cell_height: u32) -> Point {
    let w = cell_width.max(1) as f64;
    let h = cell_height.max(1) as f64;
    Point {
        x: (point.x / w).floor() * w,
        y: (point.y / h).floor() * h,
    }
}

/// Column and row index of the grid cell containing a canvas point.
pub fn grid_cell_index(point: Point, cell_width: u32, cell_height: u32) -> (i64, i64) {
    let w = cell_width.max(1) as f64;
    let h = cell_height.max(1) as f64;
    ((point.x / w).floor() as i64, (point.y / h).floor() as i64)
}

/// Number of whole cells of `cell` size that fit in `extent` pixels.
pub fn cells_across(extent: u32, cell: u32) -> u32 {
    if extent == 0 {
        return 0;
    }
    extent / cell.max(1)
}

/// Clamp user-entered dimension to a valid cell size (at least 1).
pub fn sanitize_dimension(value: i64) -> u32 {
    value.clamp(1, u32::MAX as i64) as u32
}
