use crate::error::ArenaError;
use crate::palette;
use macroquad::color::Color;
use macroquad::math::Vec2;

/// One straight obstacle edge.
///
/// Walls are immutable once built; anything that moves rebuilds its walls
/// from transformed vertices instead of editing endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
    /// Display color, also the identity reported by a ray hit
    pub color: Color,
}

impl Wall {
    /// Create a wall in the default palette color
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self::with_color(a, b, palette::DEFAULT_WALL)
    }

    pub fn with_color(a: Vec2, b: Vec2, color: Color) -> Self {
        Wall { a, b, color }
    }

    /// Create a wall, rejecting zero-length segments
    pub fn try_new(a: Vec2, b: Vec2, color: Color) -> Result<Self, ArenaError> {
        if a == b {
            return Err(ArenaError::DegenerateWall { x: a.x, y: a.y });
        }
        Ok(Self::with_color(a, b, color))
    }

    pub fn midpoint(&self) -> Vec2 {
        self.a.lerp(self.b, 0.5)
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}
