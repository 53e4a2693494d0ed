// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It owns the project, the interaction state and
//! the preview playback, routes input from the UI components through the
//! interaction state machine, and applies the resulting intents to the
//! project.

use crate::config::AppConfig;
use crate::editor::interaction::{GridContext, Intent, InteractionEvent, InteractionState, Mode};
use crate::editor::playback::PlaybackState;
use crate::editor::shortcuts::{self, Command, ShortcutKey};
use crate::io::media::{self, LoadedImage};
use crate::io::serialization;
use crate::models::export::ExportDocument;
use crate::models::project::Project;
use crate::ui::{canvas, preview, properties, toolbar};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::Instant;

/// Result of background image loading operation.
struct LoadedImageData {
    image: LoadedImage,
    path: PathBuf,
}

/// Main application state.
pub struct SheetAnimatorApp {
    /// The sprite sheet being authored
    project: Project,

    /// Pointer mode, zoom, drag and hover state for the canvas
    interaction: InteractionState,

    /// Preview playback of the active animation
    playback: PlaybackState,

    /// Text buffers for the properties panel
    panel: properties::PanelState,

    /// Loaded sprite sheet texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<anyhow::Result<LoadedImageData>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Time of the previous update, for playback
    last_update: Instant,
}

impl Default for SheetAnimatorApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SheetAnimatorApp {
    /// Create a new application instance from configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            project: Project::from_config(&config),
            interaction: InteractionState::new(config.show_grid),
            playback: PlaybackState::new(config.fps),
            panel: properties::PanelState::default(),
            image_texture: None,
            image_loader: None,
            loading_message: None,
            last_update: Instant::now(),
        }
    }

    /// Feed an event through the interaction state machine and apply the
    /// resulting intent to the project.
    fn dispatch(&mut self, event: InteractionEvent) {
        let grid = GridContext::from_project(&self.project);
        let Some(intent) = self.interaction.handle(event, &grid) else {
            return;
        };

        match intent {
            Intent::AppendFrame(frame) => {
                if self.project.append_frame(frame) {
                    log::info!(
                        "Added frame ({}, {}) {}x{} to '{}', total: {}",
                        frame.x,
                        frame.y,
                        frame.width,
                        frame.height,
                        self.project.active_animation(),
                        self.project.active_frames().len()
                    );
                }
            }
            Intent::SetCellSize { width, height } => {
                if self.project.set_cell_size(width, height) {
                    log::debug!("Cell size set to {}x{}", width, height);
                }
            }
        }
    }

    /// Run a keyboard command.
    fn run_command(&mut self, command: Command) {
        match command {
            Command::Export => self.export_animations(),
            Command::CommitFrame => self.dispatch(InteractionEvent::AddFrameKey),
            Command::SelectMode => self.dispatch(InteractionEvent::SetMode(Mode::Select)),
            Command::ResizeMode => self.dispatch(InteractionEvent::SetMode(Mode::Resize)),
            Command::ToggleGrid => self.dispatch(InteractionEvent::ToggleGrid),
        }
    }

    /// Resolve this frame's key presses to commands.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        const KEYS: [(egui::Key, ShortcutKey); 5] = [
            (egui::Key::A, ShortcutKey::A),
            (egui::Key::P, ShortcutKey::P),
            (egui::Key::R, ShortcutKey::R),
            (egui::Key::G, ShortcutKey::G),
            (egui::Key::S, ShortcutKey::S),
        ];

        // Don't hijack typing in text fields
        let text_focused = ctx.wants_keyboard_input();

        let commands: Vec<Command> = ctx.input(|i| {
            KEYS.iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .filter_map(|(_, key)| shortcuts::resolve(*key, i.modifiers.command, text_focused))
                .collect()
        });

        for command in commands {
            self.run_command(command);
        }
    }

    /// Apply an action from the properties panel.
    fn apply_properties_action(&mut self, action: properties::PropertiesAction) {
        use properties::PropertiesAction;

        match action {
            PropertiesAction::SetTexturePath(path) => {
                self.project.set_texture_path(&path);
            }
            PropertiesAction::SetColumns(columns) => {
                if self.project.set_columns(columns) {
                    log::debug!("Grid set to {} columns", columns);
                }
            }
            PropertiesAction::SetRows(rows) => {
                if self.project.set_rows(rows) {
                    log::debug!("Grid set to {} rows", rows);
                }
            }
            PropertiesAction::SetCellSize(width, height) => {
                if self.project.set_cell_size(width, height) {
                    log::debug!("Cell size set to {}x{}", width, height);
                }
            }
            PropertiesAction::AddAnimation(name) => {
                if self.project.add_animation(&name) {
                    log::info!("Added animation '{}', total: {}", name, self.project.animations().len());
                }
            }
            PropertiesAction::RenameAnimation { old_name, new_name } => {
                if self.project.rename_animation(&old_name, &new_name) {
                    log::info!("Renamed animation '{}' to '{}'", old_name, new_name);
                }
            }
            PropertiesAction::DeleteAnimation(name) => {
                if self.project.delete_animation(&name) {
                    log::info!("Deleted animation '{}', total: {}", name, self.project.animations().len());
                }
            }
            PropertiesAction::SelectAnimation(name) => {
                self.project.set_active_animation(&name);
            }
            PropertiesAction::RemoveFrame(name, idx) => {
                if self.project.remove_frame_at(&name, idx) {
                    log::info!("Removed frame {} from '{}', total: {}", idx, name, self.project.frame_count(&name));
                }
            }
            PropertiesAction::None => {}
        }
    }

    /// Export the animations to a JSON file chosen by the user.
    fn export_animations(&self) {
        let Some(doc) = ExportDocument::from_project(&self.project) else {
            log::warn!("Nothing to export: no sprite sheet loaded");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(doc.file_name())
            .save_file()
        else {
            return;
        };

        match serialization::export_json(&doc, &path) {
            Ok(_) => log::info!("Exported animations to {}", path.display()),
            Err(e) => log::error!("Failed to export animations: {:#}", e),
        }
    }

    /// Load a sprite sheet in the background.
    pub fn load_image_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading sprite sheet...".to_string());

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = media::load_image(&path).map(|image| {
                log::info!("Decoded image: {} ({}x{})", path.display(), image.width, image.height);
                LoadedImageData { image, path }
            });

            let _ = sender.send(result);
        });
    }

    /// Pick up a finished background load, if any.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };

        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(LoadedImageData { image, path }) => {
                let size = [image.width as usize, image.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                // Nearest filtering keeps pixel art crisp when zoomed
                let texture = ctx.load_texture("sprite_sheet", color_image, egui::TextureOptions::NEAREST);
                self.image_texture = Some(texture);

                self.project.load_image(
                    &image.name,
                    &path.to_string_lossy(),
                    image.width,
                    image.height,
                );

                let (cell_width, cell_height) = self.project.cell_size();
                log::info!(
                    "Loaded sprite sheet {} ({}x{}), grid {}x{} cells of {}x{}",
                    image.name,
                    image.width,
                    image.height,
                    self.project.columns(),
                    self.project.rows(),
                    cell_width,
                    cell_height
                );
            }
            Err(e) => {
                log::error!("Failed to load image: {:#}", e);
            }
        }
    }

    /// Advance the preview and schedule the next repaint while playing.
    fn update_playback(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let dt = now - self.last_update;
        self.last_update = now;

        self.playback.sync_animation(self.project.active_animation());
        let frame_count = self.project.active_frames().len();
        self.playback.tick(dt, frame_count);

        if let Some(wait) = self.playback.time_until_next_frame(frame_count) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for SheetAnimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed image loading
        self.poll_image_loader(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        self.handle_shortcuts(ctx);
        self.update_playback(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        // Open native file picker
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", media::IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.load_image_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let can_export = !self.project.image_name().is_empty();
                    if ui
                        .add_enabled(can_export, egui::Button::new("Export JSON... (Ctrl+S)"))
                        .clicked()
                    {
                        self.export_animations();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Zoom In").clicked() {
                        self.dispatch(InteractionEvent::ZoomIn);
                        ui.close_menu();
                    }
                    if ui.button("Zoom Out").clicked() {
                        self.dispatch(InteractionEvent::ZoomOut);
                        ui.close_menu();
                    }
                    if ui.button("Reset Zoom").clicked() {
                        self.dispatch(InteractionEvent::ResetZoom);
                        ui.close_menu();
                    }
                    ui.separator();
                    let mut show_grid = self.interaction.grid_visible();
                    if ui.checkbox(&mut show_grid, "Show Grid (G)").clicked() {
                        self.dispatch(InteractionEvent::ToggleGrid);
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_event = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                let grid = GridContext::from_project(&self.project);
                toolbar::show(ui, &self.interaction, &grid)
            })
            .inner;
        if let Some(event) = toolbar_event {
            self.dispatch(event);
        }

        // Properties panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(300.0)
            .show(ctx, |ui| {
                let action = properties::show(ui, &self.project, &mut self.panel);

                ui.separator();
                ui.heading("Preview");
                preview::show(ui, &self.project, &self.image_texture, &mut self.playback);

                action
            })
            .inner;
        self.apply_properties_action(properties_action);

        // Main canvas (center)
        let canvas_events = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    Vec::new()
                } else {
                    canvas::show(ui, &self.project, &self.interaction, &self.image_texture)
                }
            })
            .inner;

        for event in canvas_events {
            self.dispatch(event);
        }
    }
}
