//! A flappy-bird style arcade game on SDL2, with gameplay state kept in a
//! `bevy_ecs` world driven by a fixed 60 Hz schedule.

pub mod app;
pub mod asset;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod systems;
pub mod texture;
