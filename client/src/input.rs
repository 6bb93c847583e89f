//! Keyboard input handling
//!
//! Left player: Q up, A down. Right player: P up, L down. Escape quits.

use game_core::{FrameInput, Key, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to a paddle control
pub fn key_for(key: PhysicalKey) -> Option<Key> {
    match key {
        PhysicalKey::Code(KeyCode::KeyQ) => Some(Key::LeftUp),
        PhysicalKey::Code(KeyCode::KeyA) => Some(Key::LeftDown),
        PhysicalKey::Code(KeyCode::KeyP) => Some(Key::RightUp),
        PhysicalKey::Code(KeyCode::KeyL) => Some(Key::RightDown),
        _ => None,
    }
}

/// Collects window input between frames and hands it over once per frame
#[derive(Debug, Default)]
pub struct InputCollector {
    pending: FrameInput,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Auto-repeat presses are dropped since the
    /// paddle velocity already persists while a key is held.
    pub fn on_key(&mut self, key: PhysicalKey, pressed: bool, repeat: bool) {
        if repeat {
            return;
        }
        if pressed && key == PhysicalKey::Code(KeyCode::Escape) {
            self.request_close();
            return;
        }
        if let Some(key) = key_for(key) {
            self.pending.push(KeyEvent { key, pressed });
        }
    }

    pub fn request_close(&mut self) {
        self.pending.close_requested = true;
    }

    /// Drain everything collected since the last frame
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}
