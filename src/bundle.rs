use crate::ray::{Ray, RayHeading};
use crate::wall::Wall;
use macroquad::math::Vec2;
use std::f32::consts::TAU;

/// A viewing cone: a center heading and the full angular width around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    /// Center direction, radians
    pub heading: f32,
    /// Total width, radians
    pub width: f32,
}

impl FieldOfView {
    pub fn new(heading: f32, width: f32) -> Self {
        FieldOfView { heading, width }
    }

    /// Build from a center heading and a half-angle in degrees
    pub fn from_half_degrees(heading: f32, half_degrees: f32) -> Self {
        Self::new(heading, 2.0 * half_degrees.to_radians())
    }

    pub fn min_angle(&self) -> f32 {
        self.heading - self.width / 2.0
    }

    pub fn max_angle(&self) -> f32 {
        self.heading + self.width / 2.0
    }

    /// The `count` sample angles across this cone, see `distribute_between`
    pub fn angles(&self, count: usize) -> Vec<f32> {
        distribute_between(count, self.min_angle(), self.max_angle())
    }
}

/// `count` values spaced evenly from `min` towards `max`.
///
/// Sample `i` is `min + i * (max - min) / count`: the first sample is `min`
/// and `max` itself is never produced, so sample `i` always lands on screen
/// column `i`.
pub fn distribute_between(count: usize, min: f32, max: f32) -> Vec<f32> {
    let range = max - min;
    (0..count)
        .map(|ix| min + (ix as f32 * range) / count as f32)
        .collect()
}

/// Fresh rays from `origin` spread across `fov`, intersected against `walls`
pub fn create_rays_at_position(
    count: usize,
    origin: Vec2,
    fov: FieldOfView,
    reach: f32,
    walls: &[Wall],
) -> Vec<Ray> {
    fov.angles(count)
        .into_iter()
        .map(|angle| Ray::with_walls(origin, RayHeading::Angle(angle), reach, walls))
        .collect()
}

/// Fresh rays from `origin` sweeping the whole circle `[0, 2π)`
pub fn create_rays_around(count: usize, origin: Vec2, reach: f32, walls: &[Wall]) -> Vec<Ray> {
    distribute_between(count, 0.0, TAU)
        .into_iter()
        .map(|angle| Ray::with_walls(origin, RayHeading::Angle(angle), reach, walls))
        .collect()
}
