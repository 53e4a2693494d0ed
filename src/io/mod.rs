// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for sprite sheets and export documents.

pub mod media;
pub mod serialization;
