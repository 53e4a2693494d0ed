// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project properties panel.
//!
//! This module provides the side panel for editing the texture path and
//! grid partitioning, and for managing animations and their frames.

use crate::models::animation::Frame;
use crate::models::project::Project;
use crate::util::geometry::sanitize_dimension;

/// Result of interaction with the properties panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesAction {
    None,
    SetTexturePath(String),
    SetColumns(u32),
    SetRows(u32),
    SetCellSize(u32, u32),
    AddAnimation(String),
    RenameAnimation { old_name: String, new_name: String },
    DeleteAnimation(String),
    SelectAnimation(String),
    RemoveFrame(String, usize),
}

/// Text buffers owned by the panel between frames.
#[derive(Debug, Default)]
pub struct PanelState {
    new_animation_name: String,
    renaming: Option<RenameState>,
}

/// Inline rename in progress.
#[derive(Debug)]
struct RenameState {
    old_name: String,
    edit: String,
    /// Focus has been given to the text field
    focused: bool,
}

/// Display the project setup, grid and animation sections.
pub fn show(ui: &mut egui::Ui, project: &Project, state: &mut PanelState) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Project Setup");
        ui.add_space(4.0);
        project_section(ui, project, &mut action);

        ui.separator();
        ui.heading("Grid Partitioning");
        ui.add_space(4.0);
        grid_section(ui, project, &mut action);

        ui.separator();
        ui.heading("Animations");
        ui.add_space(4.0);
        animation_section(ui, project, state, &mut action);
    });

    action
}

fn project_section(ui: &mut egui::Ui, project: &Project, action: &mut PropertiesAction) {
    ui.label("Texture path");
    let mut path = project.texture_path().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut path)
            .hint_text("e.g. assets/textures/hero.png")
            .font(egui::TextStyle::Monospace),
    );
    if response.changed() {
        *action = PropertiesAction::SetTexturePath(path);
    }

    if project.has_image() {
        let (width, height) = project.image_size();
        let label = ui.label(
            egui::RichText::new(format!("{} ({}x{})", project.image_name(), width, height))
                .weak(),
        );
        if let Some(url) = project.image_url() {
            label.on_hover_text(url);
        }
    }
}

fn grid_section(ui: &mut egui::Ui, project: &Project, action: &mut PropertiesAction) {
    let (cell_width, cell_height) = project.cell_size();

    egui::Grid::new("grid_partitioning")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Columns");
            let mut columns = project.columns();
            let response = ui.add_enabled(project.has_image(), egui::DragValue::new(&mut columns));
            if response.changed() && columns > 0 {
                *action = PropertiesAction::SetColumns(columns);
            }
            ui.end_row();

            ui.label("Rows");
            let mut rows = project.rows();
            let response = ui.add_enabled(project.has_image(), egui::DragValue::new(&mut rows));
            if response.changed() && rows > 0 {
                *action = PropertiesAction::SetRows(rows);
            }
            ui.end_row();

            ui.label("Cell width");
            let mut width = cell_width as i64;
            if ui.add(egui::DragValue::new(&mut width).suffix(" px")).changed() {
                *action = PropertiesAction::SetCellSize(sanitize_dimension(width), cell_height);
            }
            ui.end_row();

            ui.label("Cell height");
            let mut height = cell_height as i64;
            if ui.add(egui::DragValue::new(&mut height).suffix(" px")).changed() {
                *action = PropertiesAction::SetCellSize(cell_width, sanitize_dimension(height));
            }
            ui.end_row();
        });
}

fn animation_section(
    ui: &mut egui::Ui,
    project: &Project,
    state: &mut PanelState,
    action: &mut PropertiesAction,
) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.new_animation_name)
                .hint_text("New animation name...")
                .desired_width(160.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || submitted) && !state.new_animation_name.is_empty() {
            *action = PropertiesAction::AddAnimation(std::mem::take(&mut state.new_animation_name));
        }
    });

    ui.add_space(6.0);

    if project.animations().is_empty() {
        ui.label(egui::RichText::new("No animations yet").weak().italics());
        return;
    }

    for animation in project.animations() {
        let is_active = project.active_animation() == animation.name;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let editing = state
                    .renaming
                    .as_ref()
                    .is_some_and(|rename| rename.old_name == animation.name);

                if editing {
                    rename_field(ui, state, action);
                } else {
                    if ui.selectable_label(is_active, &animation.name).clicked() {
                        *action = PropertiesAction::SelectAnimation(animation.name.clone());
                    }
                    if ui.small_button("✏").on_hover_text("Rename").clicked() {
                        state.renaming = Some(RenameState {
                            old_name: animation.name.clone(),
                            edit: animation.name.clone(),
                            focused: false,
                        });
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                        *action = PropertiesAction::DeleteAnimation(animation.name.clone());
                    }
                    ui.label(egui::RichText::new(animation.frame_count().to_string()).weak());
                });
            });

            if is_active && animation.frames.is_empty() {
                ui.label(
                    egui::RichText::new("Click cells on the sheet to add frames")
                        .weak()
                        .italics(),
                );
            }
            for (idx, frame) in animation.frames.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(frame_label(idx, frame)).monospace());
                    if ui.small_button("✕").on_hover_text("Remove frame").clicked() {
                        *action = PropertiesAction::RemoveFrame(animation.name.clone(), idx);
                    }
                });
            }
        });
    }
}

fn frame_label(idx: usize, frame: &Frame) -> String {
    format!(
        "#{} ({}, {}) {}x{}",
        idx, frame.x, frame.y, frame.width, frame.height
    )
}

/// Inline rename field. Commits on focus loss, Escape cancels.
fn rename_field(ui: &mut egui::Ui, state: &mut PanelState, action: &mut PropertiesAction) {
    let Some(rename) = state.renaming.as_mut() else {
        return;
    };

    let response = ui.add(egui::TextEdit::singleline(&mut rename.edit).desired_width(140.0));
    if !rename.focused {
        response.request_focus();
        rename.focused = true;
        return;
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.renaming = None;
    } else if response.lost_focus() {
        if !rename.edit.is_empty() && rename.edit != rename.old_name {
            *action = PropertiesAction::RenameAnimation {
                old_name: rename.old_name.clone(),
                new_name: rename.edit.clone(),
            };
        }
        state.renaming = None;
    }
}
