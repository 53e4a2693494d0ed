// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and mode selection UI.
//!
//! This module provides the toolbar for switching between picking grid
//! cells and redefining the grid, toggling the grid overlay and zooming,
//! plus a readout of the current cell size and hovered cell.

use crate::editor::interaction::{GridContext, InteractionEvent, InteractionState, Mode};

/// Display the toolbar. Returns the event for any button pressed.
pub fn show(
    ui: &mut egui::Ui,
    interaction: &InteractionState,
    grid: &GridContext,
) -> Option<InteractionEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Mode:");

        ui.separator();

        if ui
            .selectable_label(interaction.mode() == Mode::Select, "▦ Grid Select (P)")
            .on_hover_text("Pick grid cells")
            .clicked()
        {
            event = Some(InteractionEvent::SetMode(Mode::Select));
        }

        if ui
            .selectable_label(interaction.mode() == Mode::Resize, "⤡ Set Grid Size (R)")
            .on_hover_text("Drag on the sheet to define the cell size")
            .clicked()
        {
            event = Some(InteractionEvent::SetMode(Mode::Resize));
        }

        ui.separator();

        let grid_text = if interaction.grid_visible() { "GRID ON" } else { "GRID OFF" };
        if ui
            .selectable_label(interaction.grid_visible(), grid_text)
            .on_hover_text("Toggle grid (G)")
            .clicked()
        {
            event = Some(InteractionEvent::ToggleGrid);
        }

        ui.separator();

        if ui.button("−").clicked() {
            event = Some(InteractionEvent::ZoomOut);
        }
        ui.label(egui::RichText::new(format!("{}%", interaction.zoom_percent())).monospace());
        if ui.button("+").clicked() {
            event = Some(InteractionEvent::ZoomIn);
        }

        ui.separator();

        let (col, row) = interaction.hover_cell_index(grid);
        ui.label(format!("Cell: {}x{}", grid.cell_width, grid.cell_height));
        ui.label(format!("Coord: {},{}", col, row));

        ui.separator();

        let mode_text = match interaction.mode() {
            Mode::Select => "Click a cell or press A to add it to the active animation",
            Mode::Resize => "Drag from a cell corner to set the grid cell size",
        };

        ui.label(egui::RichText::new(mode_text).italics().weak());
    });

    event
}
