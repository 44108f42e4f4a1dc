use glam::Vec2;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

const INPUT_DEADZONE: f32 = 0.1;

/// Keyboard keys, named after their US layout position
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum KeyCode {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Return,
    Escape,
    BackSpace,
    Tab,
    Space,
    Left,
    Right,
    Up,
    Down,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
}

/// How far a key is held, 0.0 is released and 1.0 fully down.
/// Analog sources below the deadzone read as released.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct KeyState(f32);

impl KeyState {
    pub const UP: Self = Self(0.0);
    pub const DOWN: Self = Self(1.0);

    pub fn new(state: f32) -> Self {
        if state > INPUT_DEADZONE {
            Self(state.min(1.0))
        } else {
            Self::UP
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_up(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_down(&self) -> bool {
        !self.is_up()
    }
}

impl From<f32> for KeyState {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Keyboard polling supplied by the host
pub trait Keyboard {
    /// Key is held this frame
    fn is_down(&self, key: KeyCode) -> bool;
    /// Key went down this frame
    fn is_pressed(&self, key: KeyCode) -> bool;
}

/// Tracks key state from events fed by the host
#[derive(Default, Debug)]
pub struct InputState {
    keys_state: HashMap<KeyCode, KeyState>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn set_key_state(&mut self, key: KeyCode, state: KeyState) {
        let prev = self.keys_state.get(&key).copied().unwrap_or_default();
        if state.is_down() && prev.is_up() {
            self.keys_pressed.insert(key);
        } else if state.is_up() && prev.is_down() {
            self.keys_released.insert(key);
        }
        self.keys_state.insert(key, state);
    }

    /// Get key state
    pub fn get_state(&self, key: KeyCode) -> KeyState {
        self.keys_state.get(&key).copied().unwrap_or_default()
    }

    /// Key is just released
    pub fn is_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Clear per frame transitions, call at the end of each frame
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}

impl Keyboard for InputState {
    fn is_down(&self, key: KeyCode) -> bool {
        self.get_state(key).is_down()
    }

    fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

/// Player key bindings, arrow keys always work for movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub jump: KeyCode,
    pub action: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            jump: KeyCode::Space,
            action: KeyCode::KeyZ,
        }
    }
}

impl Controls {
    /// Load bindings from json, missing fields keep their defaults
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn move_left<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_down(self.left) || kb.is_down(KeyCode::Left)
    }

    pub fn move_right<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_down(self.right) || kb.is_down(KeyCode::Right)
    }

    pub fn move_up<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_down(self.up) || kb.is_down(KeyCode::Up)
    }

    pub fn move_down<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_down(self.down) || kb.is_down(KeyCode::Down)
    }

    pub fn jump<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_pressed(self.jump)
    }

    pub fn action<K: Keyboard>(&self, kb: &K) -> bool {
        kb.is_pressed(self.action)
    }

    /// Normalized movement direction, zero when idle
    pub fn move_vector<K: Keyboard>(&self, kb: &K) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.move_left(kb) {
            v.x -= 1.0;
        }
        if self.move_right(kb) {
            v.x += 1.0;
        }
        if self.move_up(kb) {
            v.y -= 1.0;
        }
        if self.move_down(kb) {
            v.y += 1.0;
        }
        v.normalize_or_zero()
    }
}
