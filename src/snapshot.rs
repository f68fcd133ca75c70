use crate::error::ArenaError;
use crate::world::WorldState;
use serde::Serialize;

/// Player pose at snapshot time
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PoseSnapshot {
    pub x: f32,
    pub y: f32,
    /// Radians
    pub heading: f32,
}

/// Nearest hit of one player ray
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HitSnapshot {
    pub distance: f32,
    /// Wall color as 8-bit RGBA
    pub color: [u8; 4],
}

/// Plain-data view of a frame for copying out of the app
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub arena: [f32; 2],
    pub player: PoseSnapshot,
    /// One entry per player ray, `null` where the ray hit nothing
    pub hits: Vec<Option<HitSnapshot>>,
    pub agents: usize,
    pub agents_seeing_player: usize,
}

impl FrameSnapshot {
    pub fn capture(world: &WorldState) -> Self {
        let hits = world
            .player_rays
            .iter()
            .map(|ray| {
                ray.nearest_hit().map(|hit| HitSnapshot {
                    distance: hit.distance,
                    color: <[u8; 4]>::from(hit.color),
                })
            })
            .collect();

        FrameSnapshot {
            frame: world.frame(),
            arena: [world.size.x, world.size.y],
            player: PoseSnapshot {
                x: world.player.pos.x,
                y: world.player.pos.y,
                heading: world.player.heading,
            },
            hits,
            agents: world.agents.len(),
            agents_seeing_player: world.agent_sights().iter().filter(|s| s.visible).count(),
        }
    }

    pub fn to_json(&self) -> Result<String, ArenaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
