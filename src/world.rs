use crate::agent::{wander_offset, Agent, AgentSight};
use crate::bundle::{create_rays_around, create_rays_at_position, FieldOfView};
use crate::config::Config;
use crate::input::{Command, FrameInput};
use crate::options::{AppOptions, RenderingOptions};
use crate::palette;
use crate::player::Player;
use crate::projection::DistanceBuffer;
use crate::ray::Ray;
use crate::structure::Structure;
use crate::wall::Wall;
use log::info;
use macroquad::math::Vec2;

/// Tunables the frame step needs, lifted out of `Config`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSettings {
    pub player_rays: usize,
    pub half_fov_degrees: f32,
    pub full_circle: bool,
    pub agent_wander: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WorldSettings {
    fn from(config: &Config) -> Self {
        WorldSettings {
            player_rays: config.population.player_rays,
            half_fov_degrees: config.player.half_fov_degrees,
            full_circle: config.player.full_circle,
            agent_wander: config.agents.wander,
        }
    }
}

/// Everything one frame reads and writes.
///
/// The wall list is rebuilt from the boundary and the structures every
/// frame; rays and agents only borrow it.
pub struct WorldState {
    /// Arena width and height
    pub size: Vec2,
    pub structures: Vec<Structure>,
    pub agents: Vec<Agent>,
    pub player: Player,
    /// Bundle cast from the player this frame, one ray per screen column
    pub player_rays: Vec<Ray>,
    pub app: AppOptions,
    pub rendering: RenderingOptions,
    pub settings: WorldSettings,
    frame: u64,
}

impl WorldState {
    /// An arena with only its boundary, the player centered and default options
    pub fn empty(size: Vec2, settings: WorldSettings) -> Self {
        let mut world = WorldState {
            size,
            structures: Vec::new(),
            agents: Vec::new(),
            player: Player::new(size / 2.0),
            player_rays: Vec::new(),
            app: AppOptions::default(),
            rendering: RenderingOptions::default(),
            settings,
            frame: 0,
        };
        world.player_rays = world.cast_player_rays(&world.all_walls());
        world
    }

    /// A randomly populated arena as described by `config`
    pub fn new(config: &Config, size: Vec2) -> Self {
        let mut world = Self::empty(size, WorldSettings::from(config));
        let target = world.player.pos;

        world.structures = (0..config.population.structures)
            .map(|_| Structure::random(size))
            .collect();
        world.agents = (0..config.population.agents)
            .map(|_| Agent::random(size, target))
            .collect();

        if config.options.randomize_at_start {
            world.app = AppOptions::random();
            world.rendering = RenderingOptions::random();
        }

        world.player_rays = world.cast_player_rays(&world.all_walls());

        info!(
            "World {}x{}: {} structures, {} agents, {} player rays",
            size.x,
            size.y,
            world.structures.len(),
            world.agents.len(),
            world.settings.player_rays
        );
        world
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ray length: the arena width
    pub fn reach(&self) -> f32 {
        self.size.x
    }

    /// Distance at which a visible agent fades out
    pub fn falloff(&self) -> f32 {
        self.size.x.max(self.size.y)
    }

    pub fn fov(&self) -> FieldOfView {
        FieldOfView::from_half_degrees(self.player.heading, self.settings.half_fov_degrees)
    }

    /// The four arena edges
    pub fn boundary_walls(&self) -> Vec<Wall> {
        let tl = Vec2::ZERO;
        let tr = Vec2::new(self.size.x, 0.0);
        let br = self.size;
        let bl = Vec2::new(0.0, self.size.y);

        [(tl, tr), (tr, br), (bl, br), (tl, bl)]
            .into_iter()
            .map(|(a, b)| Wall::with_color(a, b, palette::BOUNDARY))
            .collect()
    }

    /// Boundary walls followed by every structure's walls
    pub fn all_walls(&self) -> Vec<Wall> {
        let mut walls = self.boundary_walls();
        for structure in &self.structures {
            walls.extend_from_slice(structure.walls());
        }
        walls
    }

    pub fn resize(&mut self, size: Vec2) {
        if size != self.size {
            info!("Arena resized to {}x{}", size.x, size.y);
            self.size = size;
        }
    }

    /// Apply a discrete command. Returns whether world state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Toggle3D => self.app.drawing_in_3d = !self.app.drawing_in_3d,
            Command::ToggleMovingStructures => {
                self.app.moving_structures = !self.app.moving_structures
            }
            Command::ToggleRotatingStructures => {
                self.app.rotating_structures = !self.app.rotating_structures
            }
            Command::RandomiseRenderingOptions => self.rendering = RenderingOptions::random(),
            Command::CopySnapshot | Command::Quit => return false,
        }
        info!("{:?} -> {:?}", command, self.app);
        true
    }

    /// Advance one frame: commands, player, structures, agents, then the player's ray bundle
    pub fn update(&mut self, input: &FrameInput) {
        for &command in &input.commands {
            self.apply(command);
        }

        let target = input.pointer;
        self.player.update(target);

        let arena_width = self.size.x;
        for structure in &mut self.structures {
            structure.update(
                arena_width,
                self.app.moving_structures,
                self.app.rotating_structures,
            );
        }

        let walls = self.all_walls();
        let reach = self.reach();
        for agent in &mut self.agents {
            agent.update(&walls, target, wander_offset(self.settings.agent_wander), reach);
        }

        self.player_rays = self.cast_player_rays(&walls);
        self.frame += 1;
    }

    fn cast_player_rays(&self, walls: &[Wall]) -> Vec<Ray> {
        if self.settings.full_circle {
            create_rays_around(self.settings.player_rays, self.player.pos, self.reach(), walls)
        } else {
            create_rays_at_position(
                self.settings.player_rays,
                self.player.pos,
                self.fov(),
                self.reach(),
                walls,
            )
        }
    }

    /// Per-column nearest hits of the player's bundle
    pub fn distance_buffer(&self) -> DistanceBuffer {
        DistanceBuffer::from_rays(&self.player_rays, self.reach())
    }

    /// What each agent can see of the player
    pub fn agent_sights(&self) -> Vec<AgentSight> {
        let falloff = self.falloff();
        self.agents
            .iter()
            .map(|agent| agent.sight(self.player.pos, falloff))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn still_settings() -> WorldSettings {
        WorldSettings {
            agent_wander: 0.0,
            ..WorldSettings::default()
        }
    }

    #[test]
    fn test_boundary_walls() {
        let world = WorldState::empty(vec2(800.0, 600.0), still_settings());
        let walls = world.boundary_walls();
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[0].a, vec2(0.0, 0.0));
        assert_eq!(walls[0].b, vec2(800.0, 0.0));
        assert_eq!(walls[2].a, vec2(0.0, 600.0));
        assert!(walls.iter().all(|w| w.color == palette::BOUNDARY));
    }

    #[test]
    fn test_all_walls_lists_boundary_first() {
        let mut world = WorldState::empty(vec2(800.0, 600.0), still_settings());
        world.structures.push(Structure::polygon(vec2(200.0, 200.0), 50.0, 5, palette::PALETTE[0]));
        let walls = world.all_walls();
        assert_eq!(walls.len(), 9);
        assert_eq!(walls[4].color, palette::PALETTE[0]);
    }

    #[test]
    fn test_apply_toggles() {
        let mut world = WorldState::empty(vec2(100.0, 100.0), still_settings());
        assert!(!world.app.drawing_in_3d);
        assert!(world.apply(Command::Toggle3D));
        assert!(world.app.drawing_in_3d);

        let moving = world.app.moving_structures;
        world.apply(Command::ToggleMovingStructures);
        assert_eq!(world.app.moving_structures, !moving);

        assert!(!world.apply(Command::Quit));
    }

    #[test]
    fn test_update_recasts_bundle() {
        let mut world = WorldState::empty(vec2(800.0, 600.0), still_settings());
        let input = FrameInput {
            pointer: vec2(100.0, 300.0),
            commands: Vec::new(),
        };
        world.update(&input);

        assert_eq!(world.frame(), 1);
        assert_eq!(world.player.pos, vec2(100.0, 300.0));
        assert_eq!(world.player_rays.len(), 100);
        assert!(world.player_rays.iter().all(|r| r.origin() == vec2(100.0, 300.0)));
    }

    #[test]
    fn test_resize() {
        let mut world = WorldState::empty(vec2(800.0, 600.0), still_settings());
        world.resize(vec2(1024.0, 768.0));
        assert_eq!(world.reach(), 1024.0);
        assert_eq!(world.falloff(), 1024.0);
    }
}
