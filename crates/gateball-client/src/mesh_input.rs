use bevy::prelude::*;
use tokio::sync::mpsc;

use gateball_mesh::BlockEvent;

use crate::game::Paused;

/// Channel of decoded block events, filled by the BLE thread.
#[derive(Resource)]
pub struct BlockEvents(pub mpsc::UnboundedReceiver<BlockEvent>);

/// Start the BLE session on its own thread with a private tokio runtime; the
/// Bevy side only ever polls the channel.
pub fn setup_block_session(mut commands: Commands) {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|e| panic!("failed to build BLE runtime: {e}"));
        runtime.block_on(async move {
            if let Err(e) = gateball_mesh::session::run(tx).await {
                error!(error = %e, "mesh session failed");
            }
        });
    });

    commands.insert_resource(BlockEvents(rx));
}

/// Drain block events. A shake wakes the simulation; it sets no velocity.
pub fn poll_block_events(mut events: ResMut<BlockEvents>, mut paused: ResMut<Paused>) {
    while let Ok(event) = events.0.try_recv() {
        match event {
            BlockEvent::Shaken(accel) => {
                info!(x = accel.x, y = accel.y, z = accel.z, "block shaken");
                if paused.0 {
                    info!("starting simulation");
                    paused.0 = false;
                }
            },
            other => debug!(?other, "block event"),
        }
    }
}
