use std::time::Duration;

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use gateball_core::config::GateballConfig;
use gateball_core::events::TickEvent;
use gateball_core::input::VelocityCommand;
use gateball_sim::GateballRound;

/// Commands sent into the session tick loop.
#[derive(Debug)]
pub enum SessionCommand {
    /// Overwrite both velocity components.
    SetVelocity { vx: f32, vz: f32 },
    /// A raw key code, mapped through the round's input scheme.
    Key(String),
    /// Wake the simulation. The BLE block's shake handler sends this — it
    /// starts ticking but sets no velocity.
    Shake,
    /// Reset the ball and place a fresh goal.
    Restart,
    /// End the session.
    Stop,
}

/// Broadcasts sent from the session tick loop.
#[derive(Debug, Clone)]
pub enum SessionBroadcast {
    /// Msgpack-encoded `RoundSnapshot`, one per tick. `Bytes` so multiple
    /// consumers can clone without copying.
    State(Bytes),
    /// A simulation event (goal, out-of-bounds).
    Event(TickEvent),
    /// The loop has exited.
    Ended,
}

/// Configuration for a spawned session.
pub struct SessionConfig {
    pub config: GateballConfig,
    /// Start without ticking until the first `Shake` arrives (BLE variant).
    pub start_paused: bool,
}

impl SessionConfig {
    pub fn new(config: GateballConfig) -> Self {
        Self {
            config,
            start_paused: false,
        }
    }
}

/// Spawn a session tick loop as a tokio task.
/// Returns the command sender and broadcast receiver.
pub fn spawn_session(
    session: SessionConfig,
) -> (
    mpsc::UnboundedSender<SessionCommand>,
    mpsc::UnboundedReceiver<SessionBroadcast>,
    JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        let mut round = GateballRound::new(session.config);
        run_session_loop(&mut round, session.start_paused, cmd_rx, broadcast_tx).await;
    });

    (cmd_tx, broadcast_rx, handle)
}

/// The session tick loop: a fixed-timestep interval drives the simulation,
/// commands are applied between ticks, state and events go out after each
/// tick. Missed ticks are skipped rather than bursted.
async fn run_session_loop(
    round: &mut GateballRound,
    start_paused: bool,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcast_tx: mpsc::UnboundedSender<SessionBroadcast>,
) {
    let tick_interval = Duration::from_secs_f32(round.config().tick_dt());
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut running = !start_paused;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if !running {
                    continue;
                }

                let events = round.tick();
                let _ = broadcast_tx.send(SessionBroadcast::State(Bytes::from(
                    round.encode_snapshot(),
                )));
                for event in events {
                    let _ = broadcast_tx.send(SessionBroadcast::Event(event));
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::SetVelocity { vx, vz }) => {
                        round.apply(VelocityCommand::Set { vx, vz });
                    },
                    Some(SessionCommand::Key(code)) => {
                        round.apply_key(&code);
                    },
                    Some(SessionCommand::Shake) => {
                        if !running {
                            tracing::info!("shake received, starting simulation");
                        }
                        running = true;
                    },
                    Some(SessionCommand::Restart) => {
                        let mut rng = rand::rng();
                        round.restart(&mut rng);
                    },
                    Some(SessionCommand::Stop) | None => {
                        break;
                    },
                }
            }
        }
    }

    let _ = broadcast_tx.send(SessionBroadcast::Ended);
}
