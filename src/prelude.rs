pub use crate::animation::{Animation, FrameStepping};
pub use crate::assets::{AssetRoot, Loader, Resource};
pub use crate::camera::Camera2D;
pub use crate::canvas::Canvas;
pub use crate::color::*;
pub use crate::debug::{draw_grid, draw_hitbox, draw_point};
pub use crate::errors::{Error, Result};
pub use crate::grid::Grid;
pub use crate::input::{Controls, InputState, KeyCode, KeyState, Keyboard};
pub use crate::random::{rand_chance, rand_float, rand_int};
pub use crate::tilemap::{TileId, Tilemap, EMPTY};
pub use crate::timer::Timer;
pub use crate::types::{vec2, IVec2, Rect, Vec2};
pub use glam;
