pub mod animation;
pub mod assets;
pub mod camera;
pub mod canvas;
pub mod color;
pub mod debug;
pub mod errors;
pub mod grid;
pub mod input;
pub mod prelude;
pub mod random;
pub mod tilemap;
pub mod timer;
pub mod types;

