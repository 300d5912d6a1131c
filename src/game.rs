//! World construction and the per-tick schedule.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoScheduleConfigs;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info};

use crate::error::GameResult;
use crate::events::{GameEvent, ResetRequest};
use crate::systems::components::{
    AvatarBundle, FrameCount, GlobalState, ObstacleRng, Score, SessionState, Viewport,
};
use crate::systems::{
    advance_frame_system, avatar_physics_system, collision_system, control_system, input_system,
    obstacle_movement_system, prune_obstacle_system, render_system, scoring_system,
    session_reset_system, spawn_obstacle_system, Bindings,
};
use crate::texture::sprite::SpriteSet;
use crate::texture::text::GlyphAtlas;

/// Phases of a single tick, run strictly in order. `Update` is gated on the
/// session being live; the other phases run every tick so input keeps
/// flowing and the game-over overlay keeps drawing.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameSet {
    Input,
    Update,
    Respond,
    Draw,
}

pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: TextureCreator<WindowContext>,
        event_pump: EventPump,
    ) -> GameResult<Game> {
        let mut world = World::new();

        let (width, height) = canvas.window().size();
        let viewport = Viewport::new(width as f32, height as f32);
        info!(width, height, "Creating game world");

        let sprites = SpriteSet::load(&texture_creator)?;
        let glyphs = GlyphAtlas::load(&texture_creator)?;

        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<ResetRequest>(&mut world);

        world.insert_resource(viewport);
        world.insert_resource(SessionState::default());
        world.insert_resource(Score::default());
        world.insert_resource(FrameCount::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(ObstacleRng(SmallRng::from_os_rng()));

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(texture_creator);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(sprites);
        world.insert_non_send_resource(glyphs);

        world.spawn(AvatarBundle::default());
        debug!("Spawned avatar");

        let mut schedule = Schedule::default();
        Self::configure_schedule(&mut schedule);

        Ok(Game { world, schedule })
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.add_systems((
            (input_system, control_system).chain().in_set(GameSet::Input),
            (
                spawn_obstacle_system,
                obstacle_movement_system,
                avatar_physics_system,
                collision_system,
                scoring_system,
                prune_obstacle_system,
                advance_frame_system,
            )
                .chain()
                .in_set(GameSet::Update),
            session_reset_system.in_set(GameSet::Respond),
            render_system.in_set(GameSet::Draw),
        ));

        schedule.configure_sets(
            (
                GameSet::Input,
                GameSet::Update.run_if(|session: Res<SessionState>| session.playing()),
                GameSet::Respond,
                GameSet::Draw,
            )
                .chain(),
        );
    }

    /// Run one tick. Returns whether the process should exit.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);
        self.world.resource::<GlobalState>().exit
    }
}
