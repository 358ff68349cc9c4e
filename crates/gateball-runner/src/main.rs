use std::time::Duration;

use tracing_subscriber::EnvFilter;

use gateball_core::config::GateballConfig;
use gateball_runner::{SessionBroadcast, SessionCommand, SessionConfig, spawn_session};
use gateball_sim::RoundSnapshot;

/// Headless gateball session: runs the fixed-timestep loop without a
/// renderer, aims the ball at the sampled goal, and logs what happens.
/// With the `mesh` feature, a shake of the BLE block starts the loop instead.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let variant = std::env::args()
        .find_map(|a| a.strip_prefix("--variant=").map(String::from))
        .unwrap_or_else(|| "classic".to_string());

    let seconds = std::env::args()
        .find_map(|a| a.strip_prefix("--seconds=").map(String::from))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10);

    let config = GateballConfig::preset(&variant).unwrap_or_else(|| {
        tracing::warn!(variant, "unknown variant, loading config instead");
        GateballConfig::load()
    });

    let use_block = cfg!(feature = "mesh") && variant == "mesh";

    tracing::info!(variant, seconds, "starting headless session");

    let (cmd_tx, mut broadcast_rx, handle) = spawn_session(SessionConfig {
        config,
        start_paused: use_block,
    });

    #[cfg(feature = "mesh")]
    if use_block {
        let cmd_tx = cmd_tx.clone();
        tokio::spawn(async move {
            let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
            tokio::spawn(async move {
                if let Err(e) = gateball_mesh::session::run(event_tx).await {
                    tracing::error!(error = %e, "mesh session failed");
                }
            });
            while let Some(event) = event_rx.recv().await {
                if let gateball_mesh::BlockEvent::Shaken(accel) = event {
                    tracing::info!(x = accel.x, y = accel.y, z = accel.z, "block shaken");
                    let _ = cmd_tx.send(SessionCommand::Shake);
                }
            }
        });
    }

    let deadline = tokio::time::Instant::now() + Duration::from_secs(seconds);
    let mut aimed = false;

    loop {
        tokio::select! {
            msg = broadcast_rx.recv() => {
                match msg {
                    Some(SessionBroadcast::State(bytes)) => {
                        let Ok(state) = rmp_serde::from_slice::<RoundSnapshot>(&bytes) else {
                            continue;
                        };
                        // Aim at the goal whenever the ball is (nearly) at
                        // rest; friction will bleed the stroke off again.
                        if state.ball.velocity.magnitude() < 0.05 {
                            let dx = state.goal.x - state.ball.position.x;
                            let dz = state.goal.z - state.ball.position.z;
                            let dist = (dx * dx + dz * dz).sqrt().max(1e-3);
                            let _ = cmd_tx.send(SessionCommand::SetVelocity {
                                vx: dx / dist * 2.0,
                                vz: dz / dist * 2.0,
                            });
                            if !aimed {
                                tracing::info!(
                                    goal_x = state.goal.x,
                                    goal_z = state.goal.z,
                                    "aimed at goal"
                                );
                            }
                            aimed = true;
                        }
                    },
                    Some(SessionBroadcast::Event(event)) => {
                        tracing::info!(?event, "tick event");
                        // Re-aim after any reset so the demo keeps scoring.
                        aimed = false;
                    },
                    Some(SessionBroadcast::Ended) | None => break,
                }
            }
            _ = tokio::time::sleep_until(deadline) => {
                let _ = cmd_tx.send(SessionCommand::Stop);
                break;
            }
        }
    }

    let _ = handle.await;
    tracing::info!("session over");
}
