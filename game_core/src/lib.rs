pub mod components;
pub mod config;
pub mod controller;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;

/// Helper to create a paddle entity at its start position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(
        side,
        config.paddle_spawn(side),
        config.court_height,
    ),))
}

/// Helper to create the ball entity at court center with the initial velocity
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        config.ball_spawn(),
        config.ball_velocity,
        config.ball_radius,
    ),))
}
