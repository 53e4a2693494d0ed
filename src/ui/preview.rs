// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation preview panel.
//!
//! Shows the current frame of the active animation cut out of the sprite
//! sheet, with play/pause and speed controls.

use crate::editor::playback::{PlaybackState, MAX_FPS, MIN_FPS};
use crate::models::project::Project;

/// Preview frames are drawn at this multiple of their pixel size.
const PREVIEW_SCALE: f32 = 1.5;
const PREVIEW_HEIGHT: f32 = 160.0;

/// Display the preview and its controls.
pub fn show(
    ui: &mut egui::Ui,
    project: &Project,
    image_texture: &Option<egui::TextureHandle>,
    playback: &mut PlaybackState,
) {
    let frames = project.active_frames();

    let current = match (image_texture, playback.current(frames)) {
        (Some(texture), Some(frame)) if project.has_image() => Some((texture, *frame)),
        _ => None,
    };

    let Some((texture, frame)) = current else {
        ui.label(egui::RichText::new("No frames selected").weak().italics());
        return;
    };

    let (img_width, img_height) = project.image_size();
    let uv = egui::Rect::from_min_size(
        egui::pos2(
            frame.x as f32 / img_width.max(1) as f32,
            frame.y as f32 / img_height.max(1) as f32,
        ),
        egui::vec2(
            frame.width as f32 / img_width.max(1) as f32,
            frame.height as f32 / img_height.max(1) as f32,
        ),
    );

    // Fit the frame into a fixed-height area so the panel does not jump
    let desired = egui::vec2(frame.width as f32, frame.height as f32) * PREVIEW_SCALE;
    let fit = (PREVIEW_HEIGHT / desired.y.max(1.0)).min(1.0);
    let display_size = desired * fit;

    ui.allocate_ui(egui::vec2(ui.available_width(), PREVIEW_HEIGHT), |ui| {
        ui.centered_and_justified(|ui| {
            let (rect, _) = ui.allocate_exact_size(display_size, egui::Sense::hover());
            ui.painter().image(texture.id(), rect, uv, egui::Color32::WHITE);
        });
    });

    ui.horizontal(|ui| {
        let icon = if playback.is_playing() { "⏸" } else { "▶" };
        if ui.button(icon).clicked() {
            playback.toggle_playing();
        }

        let mut fps = playback.fps();
        if ui
            .add(egui::Slider::new(&mut fps, MIN_FPS..=MAX_FPS).suffix(" fps"))
            .changed()
        {
            playback.set_fps(fps);
        }
    });

    ui.label(
        egui::RichText::new(format!(
            "Frame {} / {}",
            playback.current_frame_index() % frames.len() + 1,
            frames.len()
        ))
        .weak(),
    );
}
