mod audio;
mod effects;
mod game;
mod input;
#[cfg(feature = "mesh")]
mod mesh_input;
mod overlay;
mod scene;

use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use gateball_core::config::GateballConfig;
use gateball_sim::GateballRound;

fn main() {
    // `--variant=classic|bounded|mesh` picks a preset; otherwise config
    // file/env/defaults apply.
    let variant = std::env::args().find_map(|a| a.strip_prefix("--variant=").map(String::from));
    let config = match variant.as_deref() {
        Some(name) => GateballConfig::preset(name).unwrap_or_else(|| {
            eprintln!("unknown variant '{name}', using config");
            GateballConfig::load()
        }),
        None => GateballConfig::load(),
    };

    // The MESH variant waits for a shake before ticking.
    let start_paused = cfg!(feature = "mesh") && variant.as_deref() == Some("mesh");

    let shadow_map_size = config.shadow_map_size as usize;
    let tick_rate = f64::from(config.tick_rate);
    let round = GateballRound::new(config);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gateball".into(),
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .insert_resource(DirectionalLightShadowMap {
        size: shadow_map_size,
    })
    .insert_resource(Time::<Fixed>::from_hz(tick_rate))
    .insert_resource(game::Round(round))
    .insert_resource(game::Paused(start_paused))
    .init_resource::<game::PendingEvents>()
    .add_systems(
        Startup,
        (scene::setup_scene, overlay::setup_overlay, audio::setup_goal_chime),
    )
    .add_systems(FixedUpdate, game::tick_round)
    .add_systems(
        Update,
        (
            input::keyboard_input,
            scene::sync_ball_transform,
            scene::sync_goal_transform,
            effects::goal_sequence,
            effects::confetti_update,
            overlay::message_fade,
        ),
    );

    #[cfg(feature = "mesh")]
    app.add_systems(Startup, mesh_input::setup_block_session)
        .add_systems(Update, mesh_input::poll_block_events);

    app.run();
}
