//! Fake first-person view: each ray of the player's bundle becomes one
//! vertical strip whose height shrinks linearly with hit distance.

use crate::geometry::map_range;
use crate::ray::{Hit, Ray};
use macroquad::color::{hsl_to_rgb, rgb_to_hsl, Color, BLACK};

/// Distance assigned to a ray that hit nothing, as a multiple of the arena width
const NO_HIT_DISTANCE_FACTOR: f32 = 1.5;
/// Lightness (0..1) of a surface touching the viewer
const NEAR_LIGHTNESS: f32 = 0.50;
/// Lightness (0..1) of a surface one arena width away
const FAR_LIGHTNESS: f32 = 0.03;

/// One screen column's worth of ray result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistantPoint {
    pub distance: f32,
    pub color: Color,
}

/// Per-column distances for one frame, index = screen column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceBuffer {
    pub values: Vec<DistantPoint>,
}

/// A vertical bar ready to draw: left edge at `x`, centered on the screen's mid-height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Keep the hue and saturation of `color`, darkening it with distance
pub fn shade_for_distance(color: Color, distance: f32, arena_width: f32) -> Color {
    let (h, s, _) = rgb_to_hsl(color);
    let lightness = map_range(distance, 0.0, arena_width, NEAR_LIGHTNESS, FAR_LIGHTNESS);
    hsl_to_rgb(h, s, lightness.clamp(0.0, 1.0))
}

/// Strip height for a hit `distance`: full `max_height` at zero distance,
/// falling linearly to nothing at `arena_width` and clamped there.
pub fn strip_height(distance: f32, arena_width: f32, max_height: f32) -> f32 {
    map_range(distance, 0.0, arena_width, max_height, 0.0).max(0.0)
}

impl DistantPoint {
    /// Column value for a ray's nearest hit; a miss sits beyond every possible hit, in black
    pub fn from_hit(hit: Option<Hit>, arena_width: f32) -> Self {
        match hit {
            Some(Hit { distance, color }) => DistantPoint {
                distance,
                color: shade_for_distance(color, distance, arena_width),
            },
            None => DistantPoint {
                distance: arena_width * NO_HIT_DISTANCE_FACTOR,
                color: BLACK,
            },
        }
    }
}

impl DistanceBuffer {
    /// One column per ray, in bundle order
    pub fn from_rays(rays: &[Ray], arena_width: f32) -> Self {
        DistanceBuffer {
            values: rays
                .iter()
                .map(|ray| DistantPoint::from_hit(ray.nearest_hit(), arena_width))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lay the columns out across a `screen_w` × `screen_h` view.
    ///
    /// `height_ratio` is the fraction of the screen a wall at zero distance fills.
    pub fn strips(&self, screen_w: f32, screen_h: f32, arena_width: f32, height_ratio: f32) -> Vec<Strip> {
        if self.values.is_empty() {
            return Vec::new();
        }

        // Whole-pixel widths at exact spacing; neighbours may overlap by under a pixel
        let spacing = screen_w / self.values.len() as f32;
        let width = spacing.ceil();
        let max_height = screen_h * height_ratio;

        self.values
            .iter()
            .enumerate()
            .map(|(ix, point)| Strip {
                x: ix as f32 * spacing,
                width,
                height: strip_height(point.distance, arena_width, max_height),
                color: point.color,
            })
            .collect()
    }
}
