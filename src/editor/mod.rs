// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor logic that sits between raw input and the project model.

pub mod interaction;
pub mod playback;
pub mod shortcuts;
