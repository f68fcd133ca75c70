use crate::geometry::map_range;
use crate::ray::{Ray, RayHeading};
use crate::wall::Wall;
use macroquad::math::Vec2;
use macroquad::rand::gen_range;

/// Brightness of an agent that cannot see its target
pub const HIDDEN_BRIGHTNESS: f32 = 20.0;
/// Brightness of an agent standing on its target
pub const MAX_BRIGHTNESS: f32 = 255.0;

/// What an agent can see of its target this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSight {
    pub visible: bool,
    /// Straight-line distance to the target
    pub distance: f32,
    /// 0..=255 alpha used to draw the agent
    pub brightness: f32,
}

/// A wandering point that keeps a line-of-sight ray on a shared target
#[derive(Debug, Clone)]
pub struct Agent {
    pub pos: Vec2,
    /// Ray from `pos` aimed at the last target passed to `update`
    pub ray: Ray,
}

impl Agent {
    pub fn new(pos: Vec2, target: Vec2, reach: f32) -> Self {
        Agent {
            pos,
            ray: Ray::new(pos, RayHeading::LookAt(target), reach),
        }
    }

    /// Spawn at a random point inside `size`
    pub fn random(size: Vec2, target: Vec2) -> Self {
        let pos = Vec2::new(gen_range(0.0, size.x), gen_range(0.0, size.y));
        Self::new(pos, target, size.x)
    }

    /// Nudge the agent by `offset` and rebuild its ray towards `target` against `walls`.
    ///
    /// `reach` follows the arena width, which can change between frames.
    pub fn update(&mut self, walls: &[Wall], target: Vec2, offset: Vec2, reach: f32) {
        self.pos += offset;
        self.ray = Ray::with_walls(self.pos, RayHeading::LookAt(target), reach, walls);
    }

    /// Visibility and brightness relative to `target`.
    ///
    /// `falloff` is the distance at which a visible agent fades to black,
    /// normally the larger arena dimension.
    pub fn sight(&self, target: Vec2, falloff: f32) -> AgentSight {
        let distance = self.pos.distance(target);
        let visible = self.ray.can_see_point(target);
        let brightness = if visible {
            map_range(distance, 0.0, falloff, MAX_BRIGHTNESS, 0.0)
        } else {
            HIDDEN_BRIGHTNESS
        };

        AgentSight {
            visible,
            distance,
            brightness,
        }
    }
}

/// Per-axis jitter in `[-amplitude, amplitude]`
pub fn wander_offset(amplitude: f32) -> Vec2 {
    if amplitude <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        gen_range(-amplitude, amplitude),
        gen_range(-amplitude, amplitude),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_agent_sees_target_in_open() {
        let mut agent = Agent::new(vec2(0.0, 0.0), vec2(50.0, 0.0), 100.0);
        agent.update(&[], vec2(50.0, 0.0), Vec2::ZERO, 100.0);

        let sight = agent.sight(vec2(50.0, 0.0), 100.0);
        assert!(sight.visible);
        assert_eq!(sight.distance, 50.0);
        assert_eq!(sight.brightness, 127.5);
    }

    #[test]
    fn test_agent_blocked_by_wall() {
        let walls = [Wall::new(vec2(25.0, -5.0), vec2(25.0, 5.0))];
        let mut agent = Agent::new(vec2(0.0, 0.0), vec2(50.0, 0.0), 100.0);
        agent.update(&walls, vec2(50.0, 0.0), Vec2::ZERO, 100.0);

        let sight = agent.sight(vec2(50.0, 0.0), 100.0);
        assert!(!sight.visible);
        assert_eq!(sight.brightness, HIDDEN_BRIGHTNESS);
    }

    #[test]
    fn test_update_moves_and_reaims() {
        let mut agent = Agent::new(vec2(0.0, 0.0), vec2(10.0, 0.0), 100.0);
        agent.update(&[], vec2(1.0, 11.0), vec2(1.0, 1.0), 100.0);
        assert_eq!(agent.pos, vec2(1.0, 1.0));
        assert_eq!(agent.ray.origin(), vec2(1.0, 1.0));
        assert!((agent.ray.dir() - vec2(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_wander_offset_bounds() {
        assert_eq!(wander_offset(0.0), Vec2::ZERO, "{}", 100.0);
        for _ in 0..50 {
            let offset = wander_offset(1.0);
            assert!(offset.x.abs() <= 1.0 && offset.y.abs() <= 1.0);
        }
    }
}
