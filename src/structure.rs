use crate::geometry::rotate_around;
use crate::palette;
use crate::wall::Wall;
use log::debug;
use macroquad::color::Color;
use macroquad::math::Vec2;
use macroquad::rand::{gen_range, ChooseRandom};
use std::f32::consts::TAU;

/// Side counts to pick from; a single side is a lone segment, so it is the most common
const SIDE_CHOICES: [usize; 7] = [1, 1, 1, 3, 4, 5, 6];

/// A closed polygon (or a lone segment) of same-colored walls that drifts and spins.
///
/// `vertices` are kept unrotated; the walls are rebuilt from them rotated by
/// `rotation` about `center` whenever the structure moves.
#[derive(Debug, Clone)]
pub struct Structure {
    pub center: Vec2,
    pub color: Color,
    /// Accumulated rotation, radians
    pub rotation: f32,
    /// Horizontal drift per frame; negative moves left
    pub movement_speed: f32,
    /// Rotation per frame, radians
    pub rotation_speed: f32,
    vertices: Vec<Vec2>,
    walls: Vec<Wall>,
}

impl Structure {
    /// Regular polygon with `sides` vertices on a circle of `radius` around `center`
    pub fn polygon(center: Vec2, radius: f32, sides: usize, color: Color) -> Self {
        let vertices = (0..sides)
            .map(|i| center + Vec2::from_angle(i as f32 * TAU / sides as f32) * radius)
            .collect();
        Self::from_vertices(center, vertices, color)
    }

    /// A single wall from `a` to `b`, centered on its midpoint
    pub fn segment(a: Vec2, b: Vec2, color: Color) -> Self {
        Self::from_vertices(a.lerp(b, 0.5), vec![a, b], color)
    }

    fn from_vertices(center: Vec2, vertices: Vec<Vec2>, color: Color) -> Self {
        let mut structure = Structure {
            center,
            color,
            rotation: 0.0,
            movement_speed: 0.0,
            rotation_speed: 0.0,
            vertices,
            walls: Vec::new(),
        };
        structure.rebuild_walls();
        structure
    }

    /// Random structure somewhere inside `size`, with random drift and spin
    pub fn random(size: Vec2) -> Self {
        let sides = SIDE_CHOICES.choose().copied().unwrap_or(1);
        let color = palette::random_color();

        let mut structure = if sides == 1 {
            let a = Vec2::new(gen_range(0.0, size.x), gen_range(0.0, size.y));
            let dir = Vec2::from_angle(gen_range(0.0, TAU));
            Self::segment(a, a + dir * gen_range(40.0, 400.0), color)
        } else {
            let center = Vec2::new(gen_range(0.0, size.x), gen_range(0.0, size.y));
            let radius = gen_range(20.0, gen_range(100.0, 200.0));
            Self::polygon(center, radius, sides, color)
        };

        structure.movement_speed = -gen_range(0.2, 2.0);
        structure.rotation_speed = gen_range(-0.01, 0.01);
        structure.rotation = gen_range(0.0, TAU);
        structure.rebuild_walls();

        debug!(
            "structure: {} sides at ({:.0}, {:.0}), drift {:.2}",
            sides, structure.center.x, structure.center.y, structure.movement_speed
        );
        structure
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Spin by `angle` radians on top of the current rotation
    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
        self.rebuild_walls();
    }

    /// Drift horizontally by `movement_speed`, wrapping to the right edge of
    /// an arena `arena_width` wide when the center would leave on the left.
    pub fn drift(&mut self, arena_width: f32) {
        let mut amount = self.movement_speed;
        if self.center.x + amount < 0.0 {
            amount += arena_width;
        }

        let shift = Vec2::new(amount, 0.0);
        self.center += shift;
        for v in &mut self.vertices {
            *v += shift;
        }
        self.rebuild_walls();
    }

    /// Advance one frame: drift when `moving`, spin by `rotation_speed` when `rotating`
    pub fn update(&mut self, arena_width: f32, moving: bool, rotating: bool) {
        if moving {
            self.drift(arena_width);
        }
        if rotating {
            self.rotate(self.rotation_speed);
        }
    }

    fn rebuild_walls(&mut self) {
        let rotated: Vec<Vec2> = self
            .vertices
            .iter()
            .map(|&v| rotate_around(v, self.center, self.rotation))
            .collect();

        self.walls = if rotated.len() == 2 {
            vec![Wall::with_color(rotated[0], rotated[1], self.color)]
        } else {
            (0..rotated.len())
                .map(|i| {
                    let next = (i + 1) % rotated.len();
                    Wall::with_color(rotated[i], rotated[next], self.color)
                })
                .collect()
        };
    }
}
