use crate::geometry::{heading, segment_intersection};
use crate::wall::Wall;
use macroquad::color::Color;
use macroquad::math::Vec2;

/// How a ray is aimed: an explicit angle, or towards a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayHeading {
    /// Radians from the +x axis
    Angle(f32),
    LookAt(Vec2),
}

/// A point where the ray crossed a wall, tagged with what it hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    pub pt: Vec2,
    /// Color of the wall that produced this point
    pub color: Color,
    /// Index of that wall in the slice passed to `recalculate_intersections`
    pub wall: usize,
}

/// Nearest-hit summary handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub distance: f32,
    pub color: Color,
}

/// A directed half-line from `origin`, truncated at `far_end` for intersection tests.
///
/// The far end is `origin + dir * reach` and is refreshed whenever origin or
/// direction change. Intersections are a cache of the last wall set passed in
/// and are never refreshed implicitly: moving or re-aiming a ray leaves them
/// stale until `recalculate_intersections` runs again.
#[derive(Debug, Clone)]
pub struct Ray {
    origin: Vec2,
    /// Unit direction
    dir: Vec2,
    reach: f32,
    far_end: Vec2,
    intersections: Vec<IntersectionPoint>,
}

impl Ray {
    /// Create a ray with no intersections yet
    pub fn new(origin: Vec2, aim: RayHeading, reach: f32) -> Self {
        let mut ray = Ray {
            origin,
            dir: Vec2::X,
            reach,
            far_end: origin,
            intersections: Vec::new(),
        };
        ray.aim(aim);
        ray
    }

    /// Create a ray and intersect it against `walls` straight away
    pub fn with_walls(origin: Vec2, aim: RayHeading, reach: f32, walls: &[Wall]) -> Self {
        let mut ray = Self::new(origin, aim, reach);
        if !walls.is_empty() {
            ray.recalculate_intersections(walls);
        }
        ray
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Direction angle in radians
    pub fn heading(&self) -> f32 {
        heading(self.dir)
    }

    pub fn reach(&self) -> f32 {
        self.reach
    }

    pub fn far_end(&self) -> Vec2 {
        self.far_end
    }

    /// Hits from the last `recalculate_intersections`, in wall order
    pub fn intersections(&self) -> &[IntersectionPoint] {
        &self.intersections
    }

    /// Move the origin, keeping direction. Does not touch cached intersections.
    pub fn set_position(&mut self, origin: Vec2) {
        self.origin = origin;
        self.recalculate_far_end();
    }

    /// Re-aim the ray. Does not touch cached intersections.
    pub fn aim(&mut self, aim: RayHeading) {
        let angle = match aim {
            RayHeading::Angle(angle) => angle,
            RayHeading::LookAt(target) => {
                let delta = target - self.origin;
                delta.y.atan2(delta.x)
            }
        };
        self.dir = Vec2::from_angle(angle);
        self.recalculate_far_end();
    }

    /// Point the ray at `target`. Does not touch cached intersections.
    pub fn look_at(&mut self, target: Vec2) {
        self.aim(RayHeading::LookAt(target));
    }

    fn recalculate_far_end(&mut self) {
        self.far_end = self.origin + self.dir * self.reach;
    }

    /// Where this ray's segment crosses `wall`, if it does
    pub fn intersection_with_wall(&self, wall: &Wall) -> Option<Vec2> {
        segment_intersection(wall.a, wall.b, self.origin, self.far_end)
    }

    /// All hits against `walls`, in wall order, without caching them
    pub fn calculate_intersections(&self, walls: &[Wall]) -> Vec<IntersectionPoint> {
        walls
            .iter()
            .enumerate()
            .filter_map(|(index, wall)| {
                self.intersection_with_wall(wall).map(|pt| IntersectionPoint {
                    pt,
                    color: wall.color,
                    wall: index,
                })
            })
            .collect()
    }

    /// Replace the cached hits with those against `walls`
    pub fn recalculate_intersections(&mut self, walls: &[Wall]) {
        self.intersections = self.calculate_intersections(walls);
    }

    /// The cached hit closest to the origin.
    ///
    /// On exact distance ties the earliest hit in wall order wins.
    pub fn nearest_intersection(&self) -> Option<IntersectionPoint> {
        self.intersections
            .iter()
            .min_by(|a, b| {
                self.origin
                    .distance(a.pt)
                    .total_cmp(&self.origin.distance(b.pt))
            })
            .copied()
    }

    /// Distance and color of the nearest hit
    pub fn nearest_hit(&self) -> Option<Hit> {
        self.nearest_intersection().map(|nearest| Hit {
            distance: self.origin.distance(nearest.pt),
            color: nearest.color,
        })
    }

    /// Whether nothing cached lies strictly closer to the origin than `target`.
    ///
    /// Only meaningful when the ray already points at `target`: the target
    /// distance is measured directly, not along the ray.
    pub fn can_see_point(&self, target: Vec2) -> bool {
        let dist_to_target = self.origin.distance(target);
        match self.nearest_intersection() {
            Some(nearest) => self.origin.distance(nearest.pt) >= dist_to_target,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{BLUE, RED};
    use macroquad::math::vec2;
    use std::f32::consts::FRAC_PI_2;

    const REACH: f32 = 800.0;

    fn wall_ahead() -> Wall {
        Wall::new(vec2(10.0, -5.0), vec2(10.0, 5.0))
    }

    #[test]
    fn test_far_end_follows_direction() {
        let mut ray = Ray::new(vec2(0.0, 0.0), RayHeading::Angle(0.0), 100.0);
        assert_eq!(ray.far_end(), vec2(100.0, 0.0));

        ray.set_position(vec2(5.0, 5.0));
        assert_eq!(ray.far_end(), vec2(105.0, 5.0));

        ray.aim(RayHeading::Angle(FRAC_PI_2));
        assert!(ray.far_end().distance(vec2(5.0, 105.0)) < 1e-3);
    }

    #[test]
    fn test_look_at_points_at_target() {
        let ray = Ray::new(vec2(1.0, 1.0), RayHeading::LookAt(vec2(1.0, 11.0)), 50.0);
        assert!((ray.heading() - FRAC_PI_2).abs() < 1e-6);
        assert!((ray.dir().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_new_ray_has_no_intersections() {
        let ray = Ray::new(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH);
        assert!(ray.intersections().is_empty());
        assert!(ray.nearest_intersection().is_none());
        assert!(ray.nearest_hit().is_none());
    }

    #[test]
    fn test_with_walls_computes_hits() {
        let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &[wall_ahead()]);
        let nearest = ray.nearest_intersection().unwrap();
        assert_eq!(nearest.pt, vec2(10.0, 0.0));
        assert_eq!(nearest.wall, 0);
        assert_eq!(ray.nearest_hit().unwrap().distance, 10.0);
    }

    #[test]
    fn test_reaim_leaves_hits_stale() {
        let walls = [wall_ahead()];
        let mut ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &walls);

        ray.look_at(vec2(0.0, -10.0));
        assert_eq!(ray.intersections().len(), 1);

        ray.recalculate_intersections(&walls);
        assert!(ray.intersections().is_empty());
    }

    #[test]
    fn test_nearest_picks_closest() {
        let walls = [
            Wall::with_color(vec2(30.0, -5.0), vec2(30.0, 5.0), RED),
            Wall::with_color(vec2(10.0, -5.0), vec2(10.0, 5.0), BLUE),
            Wall::with_color(vec2(20.0, -5.0), vec2(20.0, 5.0), RED),
        ];
        let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &walls);
        assert_eq!(ray.intersections().len(), 3);

        let nearest = ray.nearest_intersection().unwrap();
        assert_eq!(nearest.color, BLUE);
        assert_eq!(nearest.wall, 1);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        // Both walls cross the ray exactly at (10, 0)
        let walls = [
            Wall::with_color(vec2(10.0, -5.0), vec2(10.0, 5.0), RED),
            Wall::with_color(vec2(5.0, -5.0), vec2(15.0, 5.0), BLUE),
        ];
        let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), 100.0, &walls);
        assert_eq!(ray.intersections().len(), 2);
        assert_eq!(ray.nearest_intersection().unwrap().color, RED);
    }

    #[test]
    fn test_wall_behind_or_beyond_reach_is_missed() {
        let walls = [
            Wall::new(vec2(-10.0, -5.0), vec2(-10.0, 5.0)),
            Wall::new(vec2(200.0, -5.0), vec2(200.0, 5.0)),
        ];
        let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), 100.0, &walls);
        assert!(ray.intersections().is_empty());
    }

    #[test]
    fn test_can_see_point() {
        let ray = Ray::with_walls(vec2(0.0, 0.0), RayHeading::Angle(0.0), REACH, &[wall_ahead()]);
        assert!(ray.can_see_point(vec2(5.0, 0.0)));
        assert!(!ray.can_see_point(vec2(15.0, 0.0)));
        // A wall exactly at the target does not block it
        assert!(ray.can_see_point(vec2(10.0, 0.0)));
    }
}
