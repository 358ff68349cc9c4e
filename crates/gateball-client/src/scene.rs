use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use bevy::prelude::*;

use crate::game::Round;

/// Field plane dimensions.
pub const FIELD_WIDTH: f32 = 250.0;
pub const FIELD_DEPTH: f32 = 80.0;

const BALL_RADIUS: f32 = 2.0;
const GOAL_RING_RADIUS: f32 = 2.0;
const GOAL_TUBE_RADIUS: f32 = 0.5;

/// Marker for the ball mesh.
#[derive(Component)]
pub struct BallMesh;

/// Marker for the goal ring mesh.
#[derive(Component)]
pub struct GoalMesh;

/// Spawn camera, lights, field, ball, and goal.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    round: Res<Round>,
) {
    // Camera raised behind the field, pitched down 45 degrees.
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 60.0, 60.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_4)),
    ));

    // Soft fill light plus one shadow-casting sun.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 100.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // The court: a green plane.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FIELD_WIDTH, FIELD_DEPTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(34, 139, 34),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    // The ball, resting on its spawn point.
    let spawn = round.0.ball().position;
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        })),
        Transform::from_xyz(spawn.x, spawn.y, spawn.z),
        BallMesh,
    ));

    // The goal: an upright gold ring at this round's sampled position.
    let goal = round.0.goal();
    commands.spawn((
        Mesh3d(meshes.add(Torus::new(
            GOAL_RING_RADIUS - GOAL_TUBE_RADIUS,
            GOAL_RING_RADIUS + GOAL_TUBE_RADIUS,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(255, 215, 0),
            perceptual_roughness: 0.3,
            metallic: 0.8,
            ..default()
        })),
        Transform::from_xyz(goal.x, goal.y, goal.z).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        GoalMesh,
    ));
}

/// Keep the ball mesh on the simulated position.
pub fn sync_ball_transform(round: Res<Round>, mut query: Query<&mut Transform, With<BallMesh>>) {
    let position = round.0.ball().position;
    for mut transform in &mut query {
        transform.translation = Vec3::new(position.x, position.y, position.z);
    }
}

/// Keep the goal mesh on the sampled goal (it only moves on a restart).
pub fn sync_goal_transform(round: Res<Round>, mut query: Query<&mut Transform, With<GoalMesh>>) {
    let goal = round.0.goal();
    for mut transform in &mut query {
        transform.translation = Vec3::new(goal.x, goal.y, goal.z);
    }
}
