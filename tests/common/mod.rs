#![allow(dead_code)]

use bevy_ecs::event::EventRegistry;
use bevy_ecs::prelude::*;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use flappy::events::{GameEvent, ResetRequest};
use flappy::systems::{
    AvatarBundle, Bindings, FrameCount, GlobalState, Obstacle, ObstacleBundle, ObstacleRng,
    Position, Score, SessionState, Viewport,
};

/// Build a world with the gameplay resources registered and a single avatar
/// spawned, matching what `Game::new` sets up minus the SDL side.
pub fn create_test_world() -> (World, Entity) {
    let mut world = World::new();

    EventRegistry::register_event::<GameEvent>(&mut world);
    EventRegistry::register_event::<ResetRequest>(&mut world);

    world.insert_resource(Viewport::new(900.0, 600.0));
    world.insert_resource(SessionState::default());
    world.insert_resource(Score::default());
    world.insert_resource(FrameCount::default());
    world.insert_resource(GlobalState::default());
    world.insert_resource(Bindings::default());
    world.insert_resource(ObstacleRng(SmallRng::seed_from_u64(7)));

    let avatar = world.spawn(AvatarBundle::default()).id();
    (world, avatar)
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.send_event(event);
}

pub fn spawn_obstacle_at(world: &mut World, x: f32, top: f32, bottom: f32, speed: f32) -> Entity {
    world
        .spawn(ObstacleBundle {
            obstacle: Obstacle {
                top,
                bottom,
                width: 50.0,
                speed,
                passed: false,
            },
            position: Position(Vec2::new(x, 0.0)),
        })
        .id()
}
