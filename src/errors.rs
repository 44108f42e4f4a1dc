use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid {cols}x{rows} with tile size {tile_size}")]
    InvalidGrid { cols: i32, rows: i32, tile_size: i32 },
    #[error("cell ({col}, {row}) is out of bounds")]
    OutOfBounds { col: i32, row: i32 },
    #[error("expect {expected} tiles, got {actual}")]
    TileCount { expected: usize, actual: usize },
    #[error("invalid animation with {frames} frames at {fps} fps")]
    InvalidAnimation { frames: u32, fps: f32 },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
