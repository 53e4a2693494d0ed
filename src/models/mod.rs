// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: frames, animations, the project and its export form.

pub mod animation;
pub mod export;
pub mod project;
