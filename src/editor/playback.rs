// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation preview playback.
//!
//! Playback is driven by elapsed time handed in from the UI loop rather
//! than an owned timer: [`PlaybackState::tick`] advances the frame index and
//! [`PlaybackState::time_until_next_frame`] tells the caller when to wake up
//! next. When playback is stopped there is nothing to wake up for.

use crate::models::animation::Frame;
use std::time::Duration;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;
pub const DEFAULT_FPS: u32 = 12;

/// Looping preview of the active animation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    current_frame: usize,
    fps: u32,
    playing: bool,
    /// Time accumulated towards the next frame advance
    elapsed: Duration,
    /// Animation the index belongs to
    animation: String,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl PlaybackState {
    pub fn new(fps: u32) -> Self {
        Self {
            current_frame: 0,
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            playing: true,
            elapsed: Duration::ZERO,
            animation: String::new(),
        }
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Time between frame advances.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Change playback speed. Timing restarts from zero.
    pub fn set_fps(&mut self, fps: u32) {
        let fps = fps.clamp(MIN_FPS, MAX_FPS);
        if fps != self.fps {
            self.fps = fps;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Start or pause playback. Timing restarts from zero.
    pub fn set_playing(&mut self, playing: bool) {
        if playing != self.playing {
            self.playing = playing;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn toggle_playing(&mut self) {
        self.set_playing(!self.playing);
    }

    /// Follow the active animation, rewinding when it changes.
    pub fn sync_animation(&mut self, name: &str) {
        if self.animation != name {
            self.animation = name.to_string();
            self.current_frame = 0;
            self.elapsed = Duration::ZERO;
        }
    }

    fn is_running(&self, frame_count: usize) -> bool {
        self.playing && frame_count > 0
    }

    /// Advance by `dt` of wall time. Returns true if the frame changed.
    pub fn tick(&mut self, dt: Duration, frame_count: usize) -> bool {
        if !self.is_running(frame_count) {
            return false;
        }

        let previous = self.current_frame;
        let start = previous % frame_count;
        self.elapsed += dt;

        let interval = self.frame_interval().as_nanos().max(1);
        let steps = self.elapsed.as_nanos() / interval;
        if steps > 0 {
            let consumed = interval * steps;
            self.elapsed = Duration::from_nanos((self.elapsed.as_nanos() - consumed) as u64);
            self.current_frame = ((start as u128 + steps) % frame_count as u128) as usize;
        } else {
            self.current_frame = start;
        }

        steps > 0 || self.current_frame != previous
    }

    /// How long until the next frame advance, or `None` when stopped.
    pub fn time_until_next_frame(&self, frame_count: usize) -> Option<Duration> {
        if !self.is_running(frame_count) {
            return None;
        }
        Some(self.frame_interval().saturating_sub(self.elapsed))
    }

    /// The frame to show, or `None` if there is nothing to render.
    pub fn current<'a>(&self, frames: &'a [Frame]) -> Option<&'a Frame> {
        if frames.is_empty() {
            return None;
        }
        frames.get(self.current_frame % frames.len())
    }
}
