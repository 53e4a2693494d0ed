// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sheet Animator
//!
//! A cross-platform desktop application for slicing sprite sheets into a
//! grid, grouping grid cells into named animations, previewing them and
//! exporting the result as JSON.

mod app;
mod config;
mod editor;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::SheetAnimatorApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Sheet Animator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sheet Animator",
        options,
        Box::new(|_cc| Ok(Box::new(SheetAnimatorApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
