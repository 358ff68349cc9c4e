use bevy::prelude::*;

use gateball_core::events::TickEvent;
use gateball_sim::GateballRound;

/// The simulation state behind the scene.
#[derive(Resource)]
pub struct Round(pub GateballRound);

/// True while the simulation waits for its start signal. Only the MESH
/// variant starts paused — a shake of the block wakes it.
#[derive(Resource)]
pub struct Paused(pub bool);

/// Events produced by fixed-update ticks, drained by the effect systems on
/// the following frame.
#[derive(Resource, Default)]
pub struct PendingEvents(pub Vec<TickEvent>);

/// Advance the simulation by one fixed-timestep tick.
pub fn tick_round(mut round: ResMut<Round>, paused: Res<Paused>, mut pending: ResMut<PendingEvents>) {
    if paused.0 {
        return;
    }
    let events = round.0.tick();
    pending.0.extend(events);
}
