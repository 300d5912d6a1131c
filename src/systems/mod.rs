pub mod collision;
pub mod components;
pub mod control;
pub mod input;
pub mod obstacle;
pub mod physics;
pub mod render;
pub mod scoring;
pub mod state;

pub use collision::{collides, collision_system};
pub use components::*;
pub use control::control_system;
pub use input::{input_system, translate_inputs, Bindings, RawInput};
pub use obstacle::{
    advance_frame_system, obstacle_movement_system, place_obstacle, prune_obstacle_system,
    spawn_obstacle_system,
};
pub use physics::avatar_physics_system;
pub use render::render_system;
pub use scoring::scoring_system;
pub use state::session_reset_system;
