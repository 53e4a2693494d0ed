// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the sprite sheet.
//!
//! This module shows the loaded sheet at the current zoom with the grid
//! overlay, the hovered cell, the resize indicator and the frames of the
//! active animation, and turns raw pointer input into interaction events.

use crate::editor::interaction::{InteractionEvent, InteractionState, Mode, PointerSample};
use crate::models::animation::Frame;
use crate::models::project::Project;
use crate::util::geometry::Point;

/// Grid lines closer than this (in screen pixels) are not drawn.
const MIN_GRID_SPACING: f32 = 3.0;

const GRID_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(28, 34, 42, 100);
const HOVER_COLOR: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
const RESIZE_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const FRAME_COLOR: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);

/// Display the canvas and collect pointer events for this frame.
pub fn show(
    ui: &mut egui::Ui,
    project: &Project,
    interaction: &InteractionState,
    image_texture: &Option<egui::TextureHandle>,
) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(20);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        match image_texture {
            Some(texture) if project.has_image() => {
                egui::ScrollArea::both()
                    .id_source("sheet_scroll")
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        events = show_sheet(ui, project, interaction, texture);
                    });
            }
            _ => show_placeholder(ui),
        }
    });

    events
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Sprite Sheet Required")
                    .size(24.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(
                    "Load a sprite sheet to divide it into a grid and start mapping your animations.",
                )
                .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}

fn show_sheet(
    ui: &mut egui::Ui,
    project: &Project,
    interaction: &InteractionState,
    texture: &egui::TextureHandle,
) -> Vec<InteractionEvent> {
    let zoom = interaction.zoom() as f32;
    let (img_width, img_height) = project.image_size();
    let size = egui::vec2(img_width as f32 * zoom, img_height as f32 * zoom);

    let (image_rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let response = match interaction.mode() {
        Mode::Select => response.on_hover_cursor(egui::CursorIcon::PointingHand),
        Mode::Resize => response.on_hover_cursor(egui::CursorIcon::ResizeNwSe),
    };

    let events = collect_events(ui, &response, image_rect, interaction);

    let painter = ui.painter_at(image_rect);
    painter.image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    let (cell_width, cell_height) = project.cell_size();
    let to_screen = |x: f64, y: f64| image_rect.min + egui::vec2(x as f32 * zoom, y as f32 * zoom);
    let cell_size = egui::vec2(cell_width as f32 * zoom, cell_height as f32 * zoom);

    if interaction.grid_visible() {
        draw_grid(&painter, image_rect, cell_size);
    }

    if let Some(origin) = interaction.drag_origin() {
        // Resize indicator
        let rect = egui::Rect::from_min_size(to_screen(origin.x, origin.y), cell_size);
        painter.rect_filled(rect, 0.0, RESIZE_COLOR.gamma_multiply(0.1));
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, RESIZE_COLOR));
    } else if interaction.mode() == Mode::Select && response.hovered() {
        let hover = interaction.hover_cell();
        let rect = egui::Rect::from_min_size(to_screen(hover.x, hover.y), cell_size);
        painter.rect_filled(rect, 0.0, HOVER_COLOR.gamma_multiply(0.3));
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, HOVER_COLOR));
    }

    for (idx, frame) in project.active_frames().iter().enumerate() {
        draw_frame(&painter, idx, frame, &to_screen, zoom);
    }

    events
}

/// Translate this frame's pointer input over the sheet into events.
fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    image_rect: egui::Rect,
    interaction: &InteractionState,
) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    let container_origin = Point::new(image_rect.min.x as f64, image_rect.min.y as f64);
    let sample_at = |pos: egui::Pos2| PointerSample {
        client: Point::new(pos.x as f64, pos.y as f64),
        container_origin,
    };

    let (pressed, released, moved, pointer_pos, press_origin) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.delta() != egui::Vec2::ZERO,
            i.pointer.hover_pos(),
            i.pointer.press_origin(),
        )
    });

    let inside = pointer_pos.is_some_and(|pos| image_rect.contains(pos));
    let was_dragging = interaction.is_dragging();
    let pressed_here = pressed && response.hovered();

    if moved && (inside || was_dragging) {
        if let Some(pos) = pointer_pos {
            events.push(InteractionEvent::PointerMoved(sample_at(pos)));
        }
    }

    if pressed_here {
        if let Some(pos) = press_origin.or(pointer_pos) {
            events.push(InteractionEvent::PointerPressed(sample_at(pos)));
        }
    }

    // Press and release can land in the same frame
    if released {
        events.push(InteractionEvent::PointerReleased);
    } else if was_dragging && !inside {
        events.push(InteractionEvent::PointerLeft);
    }

    if response.clicked() {
        events.push(InteractionEvent::Click);
    }

    events
}

fn draw_grid(painter: &egui::Painter, image_rect: egui::Rect, cell_size: egui::Vec2) {
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);

    if cell_size.x >= MIN_GRID_SPACING {
        let mut x = image_rect.min.x;
        while x <= image_rect.max.x {
            painter.vline(x, image_rect.y_range(), stroke);
            x += cell_size.x;
        }
    }

    if cell_size.y >= MIN_GRID_SPACING {
        let mut y = image_rect.min.y;
        while y <= image_rect.max.y {
            painter.hline(image_rect.x_range(), y, stroke);
            y += cell_size.y;
        }
    }
}

/// Draw a registered frame with its index label.
fn draw_frame(
    painter: &egui::Painter,
    idx: usize,
    frame: &Frame,
    to_screen: &impl Fn(f64, f64) -> egui::Pos2,
    zoom: f32,
) {
    let rect = egui::Rect::from_min_size(
        to_screen(frame.x as f64, frame.y as f64),
        egui::vec2(frame.width as f32 * zoom, frame.height as f32 * zoom),
    );
    painter.rect_filled(rect, 0.0, FRAME_COLOR.gamma_multiply(0.2));
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, FRAME_COLOR));

    let galley = painter.layout_no_wrap(
        format!("FRAME {}", idx),
        egui::FontId::proportional(10.0),
        egui::Color32::WHITE,
    );
    let label_rect = egui::Rect::from_min_size(rect.min, galley.size() + egui::vec2(4.0, 2.0));
    painter.rect_filled(label_rect, 2.0, egui::Color32::from_rgb(79, 70, 229));
    painter.galley(label_rect.min + egui::vec2(2.0, 1.0), galley, egui::Color32::WHITE);
}
