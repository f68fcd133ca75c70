use crate::geometry::{average, heading};
use macroquad::math::Vec2;
use std::collections::VecDeque;

/// Pointer movements remembered when smoothing the heading
const HEADING_HISTORY: usize = 8;

/// The pointer-controlled viewer the ray bundle is cast from
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Radians; kept when the pointer stops moving
    pub heading: f32,
    last_pointer: Option<Vec2>,
    movements: VecDeque<Vec2>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Player {
            pos,
            heading: 0.0,
            last_pointer: None,
            movements: VecDeque::with_capacity(HEADING_HISTORY),
        }
    }

    /// Follow the pointer and steer the heading along recent pointer motion
    pub fn update(&mut self, pointer: Vec2) {
        let previous = self.last_pointer.replace(pointer).unwrap_or(pointer);
        self.pos = pointer;
        if let Some(angle) = self.angle_of_movement(pointer - previous) {
            self.heading = angle;
        }
    }

    /// Heading of the averaged recent movements, or `None` when there is no clear direction
    fn angle_of_movement(&mut self, delta: Vec2) -> Option<f32> {
        if delta.length_squared() < 1.0 {
            return None;
        }

        self.movements.push_front(delta);
        self.movements.truncate(HEADING_HISTORY);

        let recent: Vec<Vec2> = self.movements.iter().copied().collect();
        let avg = average(&recent);
        // Opposite movements can cancel out
        if avg.length() > 0.0 {
            Some(heading(avg))
        } else {
            None
        }
    }
}
