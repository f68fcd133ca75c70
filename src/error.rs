use std::io;
use thiserror::Error;

/// Errors surfaced by the arena outside the geometry hot path.
///
/// Ray and intersection queries never fail; a missing hit is an `Option`.
#[derive(Error, Debug)]
pub enum ArenaError {
    /// Both wall endpoints are the same point.
    #[error("degenerate wall: both endpoints at ({x}, {y})")]
    DegenerateWall { x: f32, y: f32 },

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] io::Error),

    /// Config file is not valid TOML for `Config`.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Frame snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
