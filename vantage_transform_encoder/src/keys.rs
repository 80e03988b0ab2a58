// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation.
//!
//! | Key | Intent |
//! |---|---|
//! | `+`, `=` | zoom in |
//! | `-` | zoom out |
//! | `0` | reset |
//! | arrows | fixed-step pan |
//!
//! Modifiers are not consulted. Only key-down events produce intents, and the
//! platform's default action should be prevented for every key that does.

use ui_events::keyboard::{Key, KeyState, NamedKey};
use vantage_view2d::{PanDirection, ZoomDirection};

use crate::ViewIntent;

/// Maps a key event to a view intent.
#[must_use]
pub fn key_intent(key: &Key, state: KeyState) -> Option<ViewIntent> {
    if !state.is_down() {
        return None;
    }
    match key {
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(ViewIntent::ZoomStep(ZoomDirection::In)),
            "-" => Some(ViewIntent::ZoomStep(ZoomDirection::Out)),
            "0" => Some(ViewIntent::Reset),
            _ => None,
        },
        Key::Named(NamedKey::ArrowLeft) => Some(ViewIntent::PanStep(PanDirection::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(ViewIntent::PanStep(PanDirection::Right)),
        Key::Named(NamedKey::ArrowUp) => Some(ViewIntent::PanStep(PanDirection::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(ViewIntent::PanStep(PanDirection::Down)),
        _ => None,
    }
}

/// Returns `true` if the platform's default action for `key` must be suppressed.
#[must_use]
pub fn prevent_default(key: &Key) -> bool {
    key_intent(key, KeyState::Down).is_some()
}
