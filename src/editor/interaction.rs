// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport interaction state machine.
//!
//! Pointer and keyboard input for the sprite sheet canvas is fed into
//! [`InteractionState::handle`] one event at a time. The state machine
//! tracks zoom, the current mode (picking cells or redefining the grid),
//! drag progress and the hovered cell, and answers each event with at most
//! one [`Intent`] for the project to apply. It never touches the project
//! itself and holds no timers.

use crate::models::animation::Frame;
use crate::models::project::Project;
use crate::util::geometry::{client_to_canvas, grid_cell_index, snap_to_grid, Point};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 5.0;
pub const ZOOM_STEP: f64 = 0.2;

/// What a pointer gesture on the canvas does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Clicking commits the hovered cell as a frame
    #[default]
    Select,
    /// Dragging redefines the grid cell size
    Resize,
}

/// A pointer position together with where the canvas is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position in client space
    pub client: Point,
    /// Top-left corner of the zoomed image in client space
    pub container_origin: Point,
}

/// Input delivered to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    PointerPressed(PointerSample),
    PointerMoved(PointerSample),
    PointerReleased,
    /// Pointer left the canvas; ends a drag like a release
    PointerLeft,
    /// Pointer click on the canvas (commit gesture)
    Click,
    /// The "add frame" key (commit gesture)
    AddFrameKey,
    SetMode(Mode),
    ToggleGrid,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Change the project should make in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AppendFrame(Frame),
    SetCellSize { width: u32, height: u32 },
}

/// The slice of project state the state machine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridContext {
    pub cell_width: u32,
    pub cell_height: u32,
    pub has_active_animation: bool,
}

impl GridContext {
    pub fn from_project(project: &Project) -> Self {
        let (cell_width, cell_height) = project.cell_size();
        Self {
            cell_width,
            cell_height,
            has_active_animation: !project.active_animation().is_empty(),
        }
    }
}

/// Interaction state for one editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    zoom: f64,
    mode: Mode,
    dragging: bool,
    /// Canvas position where the current resize drag started
    drag_origin: Point,
    /// Origin of the hovered grid cell, in canvas space
    hover_cell: Point,
    show_grid: bool,
    /// The last press started a resize; the click that follows it belongs
    /// to the same gesture.
    resize_gesture: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InteractionState {
    pub fn new(show_grid: bool) -> Self {
        Self {
            zoom: 1.0,
            mode: Mode::Select,
            dragging: false,
            drag_origin: Point::default(),
            hover_cell: Point::default(),
            show_grid,
            resize_gesture: false,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom as a whole percentage, for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Where the current resize drag started, if one is in progress.
    pub fn drag_origin(&self) -> Option<Point> {
        self.dragging.then_some(self.drag_origin)
    }

    pub fn hover_cell(&self) -> Point {
        self.hover_cell
    }

    /// Column and row of the hovered cell.
    pub fn hover_cell_index(&self, grid: &GridContext) -> (i64, i64) {
        grid_cell_index(self.hover_cell, grid.cell_width, grid.cell_height)
    }

    pub fn grid_visible(&self) -> bool {
        self.show_grid
    }

    /// Apply one input event and return what the project should do, if
    /// anything.
    pub fn handle(&mut self, event: InteractionEvent, grid: &GridContext) -> Option<Intent> {
        match event {
            InteractionEvent::PointerPressed(sample) => {
                self.pointer_pressed(sample);
                None
            }
            InteractionEvent::PointerMoved(sample) => self.pointer_moved(sample, grid),
            InteractionEvent::PointerReleased | InteractionEvent::PointerLeft => {
                self.pointer_released();
                None
            }
            InteractionEvent::Click => {
                if std::mem::take(&mut self.resize_gesture) {
                    return None;
                }
                self.commit(grid)
            }
            InteractionEvent::AddFrameKey => self.commit(grid),
            InteractionEvent::SetMode(mode) => {
                self.mode = mode;
                None
            }
            InteractionEvent::ToggleGrid => {
                self.show_grid = !self.show_grid;
                None
            }
            InteractionEvent::ZoomIn => {
                self.set_zoom(self.zoom + ZOOM_STEP);
                None
            }
            InteractionEvent::ZoomOut => {
                self.set_zoom(self.zoom - ZOOM_STEP);
                None
            }
            InteractionEvent::ResetZoom => {
                self.zoom = 1.0;
                None
            }
        }
    }

    fn set_zoom(&mut self, zoom: f64) {
        // Keep zoom on the 0.1 lattice so repeated steps do not drift
        let zoom = (zoom * 10.0).round() / 10.0;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn canvas_position(&self, sample: PointerSample) -> Point {
        client_to_canvas(sample.client, sample.container_origin, self.zoom)
    }

    fn pointer_pressed(&mut self, sample: PointerSample) {
        self.resize_gesture = self.mode == Mode::Resize;
        if self.mode == Mode::Resize {
            self.dragging = true;
            self.drag_origin = self.canvas_position(sample);
        }
    }

    fn pointer_moved(&mut self, sample: PointerSample, grid: &GridContext) -> Option<Intent> {
        let position = self.canvas_position(sample);

        if self.dragging {
            let width = (position.x - self.drag_origin.x).round().max(1.0) as u32;
            let height = (position.y - self.drag_origin.y).round().max(1.0) as u32;
            return Some(Intent::SetCellSize { width, height });
        }

        self.hover_cell = snap_to_grid(position, grid.cell_width, grid.cell_height);
        None
    }

    fn pointer_released(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.mode = Mode::Select;
        }
    }

    fn commit(&self, grid: &GridContext) -> Option<Intent> {
        if self.mode == Mode::Resize || self.dragging {
            return None;
        }
        if !grid.has_active_animation {
            return None;
        }

        Some(Intent::AppendFrame(Frame::new(
            self.hover_cell.x as i32,
            self.hover_cell.y as i32,
            grid.cell_width,
            grid.cell_height,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point { x: 100.0, y: 50.0 };

    fn sample(x: f64, y: f64) -> PointerSample {
        // Canvas coordinates at zoom 1.0
        PointerSample {
            client: Point::new(ORIGIN.x + x, ORIGIN.y + y),
            container_origin: ORIGIN,
        }
    }

    fn grid(w: u32, h: u32) -> GridContext {
        GridContext {
            cell_width: w,
            cell_height: h,
            has_active_animation: true,
        }
    }

    /// Apply intents the way the app does.
    fn apply(project: &mut Project, intent: Option<Intent>) {
        match intent {
            Some(Intent::AppendFrame(frame)) => {
                project.append_frame(frame);
            }
            Some(Intent::SetCellSize { width, height }) => {
                project.set_cell_size(width, height);
            }
            None => {}
        }
    }

    fn send(state: &mut InteractionState, project: &mut Project, event: InteractionEvent) -> Option<Intent> {
        let intent = state.handle(event, &GridContext::from_project(project));
        apply(project, intent);
        intent
    }

    #[test]
    fn test_click_commits_hovered_cell() {
        let mut project = Project::default();
        project.load_image("sheet.png", "/sheet.png", 256, 256);
        project.set_cell_size(64, 64);
        assert_eq!((project.columns(), project.rows()), (4, 4));

        let mut state = InteractionState::default();
        send(&mut state, &mut project, InteractionEvent::PointerMoved(sample(130.0, 70.0)));
        send(&mut state, &mut project, InteractionEvent::PointerPressed(sample(130.0, 70.0)));
        send(&mut state, &mut project, InteractionEvent::PointerReleased);
        let intent = send(&mut state, &mut project, InteractionEvent::Click);

        let expected = Frame::new(128, 64, 64, 64);
        assert_eq!(intent, Some(Intent::AppendFrame(expected)));
        assert_eq!(project.active_frames(), &[expected]);
    }

    #[test]
    fn test_hover_accounts_for_zoom() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::ZoomIn, &g);
        state.handle(InteractionEvent::ZoomIn, &g);
        state.handle(InteractionEvent::ZoomIn, &g);
        state.handle(InteractionEvent::ZoomIn, &g);
        state.handle(InteractionEvent::ZoomIn, &g);
        assert_eq!(state.zoom(), 2.0);

        // 140 client px at 2x is canvas 70
        let moved = PointerSample {
            client: Point::new(260.0, 140.0),
            container_origin: Point::new(0.0, 0.0),
        };
        state.handle(InteractionEvent::PointerMoved(moved), &g);
        assert_eq!(state.hover_cell(), Point::new(128.0, 64.0));
        assert_eq!(state.hover_cell_index(&g), (2, 1));
    }

    #[test]
    fn test_add_frame_key_commits() {
        let mut state = InteractionState::default();
        let g = grid(32, 32);
        state.handle(InteractionEvent::PointerMoved(sample(40.0, 5.0)), &g);
        assert_eq!(
            state.handle(InteractionEvent::AddFrameKey, &g),
            Some(Intent::AppendFrame(Frame::new(32, 0, 32, 32)))
        );
    }

    #[test]
    fn test_commit_uses_current_cell_size() {
        let mut state = InteractionState::default();
        state.handle(InteractionEvent::PointerMoved(sample(70.0, 70.0)), &grid(64, 64));
        // Grid changed after hovering; hover origin stays, size follows the grid
        assert_eq!(
            state.handle(InteractionEvent::AddFrameKey, &grid(16, 16)),
            Some(Intent::AppendFrame(Frame::new(64, 64, 16, 16)))
        );
    }

    #[test]
    fn test_commit_without_active_animation_is_ignored() {
        let mut state = InteractionState::default();
        let g = GridContext {
            has_active_animation: false,
            ..grid(64, 64)
        };
        state.handle(InteractionEvent::PointerMoved(sample(10.0, 10.0)), &g);
        assert_eq!(state.handle(InteractionEvent::Click, &g), None);
        assert_eq!(state.handle(InteractionEvent::AddFrameKey, &g), None);
    }

    #[test]
    fn test_resize_drag_sets_cell_size() {
        let mut project = Project::default();
        project.load_image("sheet.png", "/sheet.png", 256, 256);
        let mut state = InteractionState::default();

        send(&mut state, &mut project, InteractionEvent::SetMode(Mode::Resize));
        send(&mut state, &mut project, InteractionEvent::PointerPressed(sample(10.0, 10.0)));
        assert!(state.is_dragging());
        assert_eq!(state.drag_origin(), Some(Point::new(10.0, 10.0)));

        let intent = send(&mut state, &mut project, InteractionEvent::PointerMoved(sample(42.0, 26.0)));
        assert_eq!(intent, Some(Intent::SetCellSize { width: 32, height: 16 }));
        assert_eq!(project.cell_size(), (32, 16));
        assert_eq!(state.mode(), Mode::Resize);

        send(&mut state, &mut project, InteractionEvent::PointerReleased);
        assert_eq!(state.mode(), Mode::Select);
        assert!(!state.is_dragging());
        assert_eq!(state.drag_origin(), None);
        assert_eq!(project.cell_size(), (32, 16));

        // The click completing the resize gesture adds nothing
        assert_eq!(send(&mut state, &mut project, InteractionEvent::Click), None);
        assert!(project.active_frames().is_empty());

        // Subsequent commits use the new grid
        send(&mut state, &mut project, InteractionEvent::PointerMoved(sample(40.0, 40.0)));
        send(&mut state, &mut project, InteractionEvent::PointerPressed(sample(40.0, 40.0)));
        send(&mut state, &mut project, InteractionEvent::PointerReleased);
        send(&mut state, &mut project, InteractionEvent::Click);
        assert_eq!(project.active_frames(), &[Frame::new(32, 32, 32, 16)]);
    }

    #[test]
    fn test_resize_updates_on_every_move() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::SetMode(Mode::Resize), &g);
        state.handle(InteractionEvent::PointerPressed(sample(0.0, 0.0)), &g);

        let sizes: Vec<_> = [(10.4, 10.6), (20.0, 5.0), (-30.0, 48.0)]
            .iter()
            .map(|&(x, y)| state.handle(InteractionEvent::PointerMoved(sample(x, y)), &g))
            .collect();

        assert_eq!(
            sizes,
            vec![
                Some(Intent::SetCellSize { width: 10, height: 11 }),
                Some(Intent::SetCellSize { width: 20, height: 5 }),
                Some(Intent::SetCellSize { width: 1, height: 48 }),
            ]
        );
    }

    #[test]
    fn test_resize_drag_at_zoom() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::ZoomOut, &g);
        state.handle(InteractionEvent::ZoomOut, &g);
        assert!((state.zoom() - 0.6).abs() < 1e-9);
        state.handle(InteractionEvent::SetMode(Mode::Resize), &g);

        let origin = Point::new(0.0, 0.0);
        let at = |x, y| PointerSample {
            client: Point::new(x, y),
            container_origin: origin,
        };
        state.handle(InteractionEvent::PointerPressed(at(0.0, 0.0)), &g);
        assert_eq!(
            state.handle(InteractionEvent::PointerMoved(at(30.0, 60.0)), &g),
            Some(Intent::SetCellSize { width: 50, height: 100 })
        );
    }

    #[test]
    fn test_pointer_leave_ends_resize() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::SetMode(Mode::Resize), &g);
        state.handle(InteractionEvent::PointerPressed(sample(0.0, 0.0)), &g);
        state.handle(InteractionEvent::PointerLeft, &g);
        assert!(!state.is_dragging());
        assert_eq!(state.mode(), Mode::Select);
    }

    #[test]
    fn test_commit_suppressed_in_resize_mode() {
        let mut project = Project::default();
        project.load_image("sheet.png", "/sheet.png", 256, 256);
        let mut state = InteractionState::default();

        send(&mut state, &mut project, InteractionEvent::PointerMoved(sample(70.0, 70.0)));
        send(&mut state, &mut project, InteractionEvent::SetMode(Mode::Resize));

        for point in [(0.0, 0.0), (70.0, 70.0), (255.0, 1.0)] {
            send(&mut state, &mut project, InteractionEvent::PointerMoved(sample(point.0, point.1)));
            assert_eq!(send(&mut state, &mut project, InteractionEvent::AddFrameKey), None);
            assert_eq!(send(&mut state, &mut project, InteractionEvent::Click), None);
        }
        assert!(project.active_frames().is_empty());
    }

    #[test]
    fn test_commit_suppressed_while_dragging() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::SetMode(Mode::Resize), &g);
        state.handle(InteractionEvent::PointerPressed(sample(0.0, 0.0)), &g);
        // Switching mode mid-drag does not end the drag
        state.handle(InteractionEvent::SetMode(Mode::Select), &g);
        assert!(state.is_dragging());
        assert_eq!(state.handle(InteractionEvent::AddFrameKey, &g), None);
    }

    #[test]
    fn test_press_in_select_does_not_drag() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::PointerPressed(sample(5.0, 5.0)), &g);
        assert!(!state.is_dragging());
        assert_eq!(state.handle(InteractionEvent::PointerMoved(sample(90.0, 5.0)), &g), None);
        assert_eq!(state.hover_cell(), Point::new(64.0, 0.0));
    }

    #[test]
    fn test_hover_not_updated_while_dragging() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        state.handle(InteractionEvent::PointerMoved(sample(70.0, 70.0)), &g);
        state.handle(InteractionEvent::SetMode(Mode::Resize), &g);
        state.handle(InteractionEvent::PointerPressed(sample(0.0, 0.0)), &g);
        state.handle(InteractionEvent::PointerMoved(sample(200.0, 200.0)), &g);
        assert_eq!(state.hover_cell(), Point::new(64.0, 64.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut state = InteractionState::default();
        let g = grid(64, 64);
        for _ in 0..50 {
            state.handle(InteractionEvent::ZoomIn, &g);
        }
        assert_eq!(state.zoom(), MAX_ZOOM);
        assert_eq!(state.zoom_percent(), 500);

        for _ in 0..50 {
            state.handle(InteractionEvent::ZoomOut, &g);
        }
        assert_eq!(state.zoom(), MIN_ZOOM);
        assert_eq!(state.zoom_percent(), 20);

        state.handle(InteractionEvent::ResetZoom, &g);
        assert_eq!(state.zoom(), 1.0);
    }

    #[test]
    fn test_toggle_grid() {
        let mut state = InteractionState::new(true);
        let g = grid(64, 64);
        state.handle(InteractionEvent::ToggleGrid, &g);
        assert!(!state.grid_visible());
        state.handle(InteractionEvent::ToggleGrid, &g);
        assert!(state.grid_visible());
    }

    #[test]
    fn test_state_serializes() {
        let mut state = InteractionState::default();
        state.handle(InteractionEvent::SetMode(Mode::Resize), &grid(8, 8));
        let json = serde_json::to_string(&state).unwrap();
        let restored: InteractionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
