use std::f32::consts::TAU;

use bevy::prelude::*;

use gateball_core::events::TickEvent;

use crate::audio::GoalChime;
use crate::game::{PendingEvents, Round};

/// Particles per confetti burst.
const CONFETTI_COUNT: usize = 100;
/// Total angular spread of the burst cone, degrees.
const CONFETTI_SPREAD_DEGREES: f32 = 70.0;
const CONFETTI_GRAVITY: f32 = 15.0;

const CONFETTI_COLORS: [(f32, f32, f32); 5] = [
    (1.0, 0.84, 0.0),
    (0.9, 0.2, 0.3),
    (0.2, 0.6, 1.0),
    (0.3, 0.9, 0.4),
    (1.0, 1.0, 1.0),
];

/// Marker for confetti particles.
#[derive(Component)]
pub struct ConfettiParticle {
    pub velocity: Vec3,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

/// React to simulation events: on a goal, flash-by-proxy (the overlay reads
/// the round's message opacity), play the chime, and burst confetti over the
/// ring. The ball itself has already been reset by the simulation.
pub fn goal_sequence(
    mut commands: Commands,
    mut pending: ResMut<PendingEvents>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    chime: Res<GoalChime>,
    round: Res<Round>,
) {
    for event in pending.0.drain(..) {
        match event {
            TickEvent::GoalScored {
                distance,
                total_goals,
            } => {
                info!(distance, total_goals, "goal");
                commands.spawn((
                    AudioPlayer::new(chime.0.clone()),
                    PlaybackSettings::DESPAWN,
                ));
                let goal = round.0.goal();
                spawn_confetti_burst(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    Vec3::new(goal.x, goal.y + 3.0, goal.z),
                );
            },
            TickEvent::OutOfBounds { x, z } => {
                debug!(x, z, "ball out of bounds, reset");
            },
        }
    }
}

/// Spawn a burst of confetti flakes at the given position.
pub fn spawn_confetti_burst(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let flake_mesh = meshes.add(Cuboid::new(0.5, 0.5, 0.05));

    for _ in 0..CONFETTI_COUNT {
        let yaw = fastrand::f32() * TAU;
        let tilt = (fastrand::f32() - 0.5) * CONFETTI_SPREAD_DEGREES.to_radians();
        let speed = 8.0 + fastrand::f32() * 8.0;
        let velocity = Vec3::new(
            tilt.sin() * yaw.cos() * speed,
            tilt.cos() * speed,
            tilt.sin() * yaw.sin() * speed,
        );
        let lifetime = 1.2 + fastrand::f32() * 0.8;

        let (r, g, b) = CONFETTI_COLORS[fastrand::usize(0..CONFETTI_COLORS.len())];
        let color = Color::srgb(r, g, b);
        let material = materials.add(StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * 2.0,
            unlit: true,
            ..default()
        });

        commands.spawn((
            ConfettiParticle {
                velocity,
                lifetime,
                max_lifetime: lifetime,
            },
            Mesh3d(flake_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position).with_rotation(Quat::from_rotation_y(yaw)),
        ));
    }
}

/// Update confetti: fall under gravity, tumble, shrink, despawn when spent.
pub fn confetti_update(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ConfettiParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform) in &mut query {
        particle.velocity.y -= CONFETTI_GRAVITY * dt;
        transform.translation += particle.velocity * dt;
        transform.rotate_local_x(4.0 * dt);

        particle.lifetime -= dt;
        if particle.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        let progress = particle.lifetime / particle.max_lifetime;
        transform.scale = Vec3::splat(progress.max(0.01));
    }
}
