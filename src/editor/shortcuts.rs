// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Global keyboard shortcuts.

/// Keys that carry a global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    A,
    P,
    R,
    G,
    S,
}

/// Editor command bound to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Export,
    CommitFrame,
    SelectMode,
    ResizeMode,
    ToggleGrid,
}

/// Resolve a key press to a command.
///
/// `command` is Ctrl (or Cmd on macOS). Nothing resolves while a text
/// field has keyboard focus, so typing a name never triggers a shortcut.
pub fn resolve(key: ShortcutKey, command: bool, text_focused: bool) -> Option<Command> {
    if text_focused {
        return None;
    }

    match (key, command) {
        (ShortcutKey::S, true) => Some(Command::Export),
        (_, true) => None,
        (ShortcutKey::A, false) => Some(Command::CommitFrame),
        (ShortcutKey::P, false) => Some(Command::SelectMode),
        (ShortcutKey::R, false) => Some(Command::ResizeMode),
        (ShortcutKey::G, false) => Some(Command::ToggleGrid),
        (ShortcutKey::S, false) => None,
    }
}
