//! # Input State
//!
//! Pressed-key bookkeeping for the tick loop. Key events arrive from winit
//! between ticks and only mutate the sets here; the simulation reads them at
//! the start of its tick. A held key produces a continuous per-tick action
//! (so several joints can move at once), while `drain_pressed` exposes the
//! one-shot edges used for camera switching and toggles.

use std::collections::HashSet;

use winit::keyboard::{Key, NamedKey};

/// Lowercase textual key identifiers currently held, plus this-tick edges
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<String>,
    pressed: Vec<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key-down event. Repeats while held are ignored.
    pub fn key_down(&mut self, key: &str) {
        let key = key.to_lowercase();
        if self.held.insert(key.clone()) {
            self.pressed.push(key);
        }
    }

    /// Records a key-up event
    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Whether the key is currently held
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Takes the keys that went down since the last drain (one-shot edges)
    pub fn drain_pressed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pressed)
    }
}

/// Maps a winit logical key to the exercise's lowercase identifier.
///
/// Characters are lowercased (`Q` and `q` drive the same joint); the arrow
/// keys get stable lowercase names. Unbound keys map to `None`.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_lowercase()),
        Key::Named(NamedKey::ArrowUp) => Some("arrowup".to_string()),
        Key::Named(NamedKey::ArrowDown) => Some("arrowdown".to_string()),
        Key::Named(NamedKey::ArrowLeft) => Some("arrowleft".to_string()),
        Key::Named(NamedKey::ArrowRight) => Some("arrowright".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_until_released() {
        let mut input = InputState::new();
        input.key_down("Q");
        assert!(input.is_held("q"));
        input.key_up("q");
        assert!(!input.is_held("q"));
    }

    #[test]
    fn test_pressed_edges_drain_once() {
        let mut input = InputState::new();
        input.key_down("1");
        input.key_down("1"); // key repeat while held
        assert_eq!(input.drain_pressed(), vec!["1".to_string()]);
        assert!(input.drain_pressed().is_empty());
        assert!(input.is_held("1"));
    }

    #[test]
    fn test_arrow_key_names() {
        assert_eq!(
            key_name(&Key::Named(NamedKey::ArrowUp)).as_deref(),
            Some("arrowup")
        );
        assert_eq!(key_name(&Key::Named(NamedKey::Tab)), None);
    }
}
