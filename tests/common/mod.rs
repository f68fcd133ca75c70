#![allow(dead_code)]

use macroquad::math::{vec2, Vec2};
use rayarena::Wall;

/// Float tolerance for geometric comparisons
pub const EPS: f32 = 1e-3;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

pub fn approx_vec(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < EPS
}

/// Wall from raw coordinates
pub fn wall(ax: f32, ay: f32, bx: f32, by: f32) -> Wall {
    Wall::new(vec2(ax, ay), vec2(bx, by))
}

/// Vertical wall at `x`, spanning `y0..=y1`
pub fn vertical_wall(x: f32, y0: f32, y1: f32) -> Wall {
    wall(x, y0, x, y1)
}

/// Segment pairs; all but the third cross
pub fn segment_pairs() -> Vec<[Vec2; 4]> {
    vec![
        [vec2(0.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0), vec2(10.0, 0.0)],
        [vec2(-3.0, 1.0), vec2(7.0, 2.0), vec2(2.0, -4.0), vec2(1.0, 9.0)],
        [vec2(115.0, 870.0), vec2(-669.0, 1014.0), vec2(37.0, 520.0), vec2(350.0, 440.0)],
        [vec2(37.0, 520.0), vec2(350.0, 440.0), vec2(100.0, 300.0), vec2(200.0, 700.0)],
        [vec2(0.5, 0.5), vec2(0.5, -20.0), vec2(-10.0, -3.25), vec2(10.0, -1.0)],
    ]
}
