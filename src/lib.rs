pub mod agent;
pub mod bundle;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod palette;
pub mod player;
pub mod projection;
pub mod ray;
pub mod render;
pub mod snapshot;
pub mod structure;
pub mod wall;
pub mod world;

pub use agent::{Agent, AgentSight};
pub use bundle::{create_rays_at_position, distribute_between, FieldOfView};
pub use config::Config;
pub use error::ArenaError;
pub use geometry::segment_intersection;
pub use projection::{DistanceBuffer, DistantPoint};
pub use ray::{Hit, IntersectionPoint, Ray, RayHeading};
pub use wall::Wall;
pub use world::{WorldSettings, WorldState};
