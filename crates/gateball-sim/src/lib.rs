pub mod fanfare;
pub mod field;
pub mod physics;

use rand::Rng;
use serde::{Deserialize, Serialize};

use gateball_core::config::GateballConfig;
use gateball_core::events::TickEvent;
use gateball_core::input::{VelocityCommand, map_key};
use gateball_core::vec3::Vec3;

pub use fanfare::GoalFanfare;
pub use field::{Field, sample_goal};
pub use physics::{BallState, StepReport};

/// Serializable snapshot of a round, broadcast to front ends each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub ball: BallState,
    pub goal: Vec3,
    pub goals_scored: u32,
    pub ticks: u64,
    pub message_opacity: f32,
}

/// One gateball round: field, ball, fanfare, and tally, advanced by `tick()`.
///
/// The round is pure state — no renderer, no clock, no I/O — so every
/// behavior is unit testable and a front end can drive it at whatever rate
/// its scheduler provides.
pub struct GateballRound {
    config: GateballConfig,
    field: Field,
    ball: BallState,
    fanfare: GoalFanfare,
    goals_scored: u32,
    ticks: u64,
}

impl GateballRound {
    /// Create a round, sampling the goal from the thread RNG.
    pub fn new(config: GateballConfig) -> Self {
        let mut rng = rand::rng();
        Self::with_rng(config, &mut rng)
    }

    /// Create a round with a caller-supplied RNG, for deterministic tests.
    pub fn with_rng(config: GateballConfig, rng: &mut impl Rng) -> Self {
        let field = Field::new(&config, rng);
        let ball = BallState::new(field.spawn());
        let fanfare = GoalFanfare::new(config.message_hold_ms);
        Self {
            config,
            field,
            ball,
            fanfare,
            goals_scored: 0,
            ticks: 0,
        }
    }

    /// Apply a velocity command (overwrite semantics, last command wins).
    pub fn apply(&mut self, command: VelocityCommand) {
        self.ball.apply(command);
    }

    /// Apply a raw key code through the configured input scheme. Keys outside
    /// the active scheme are ignored.
    pub fn apply_key(&mut self, code: &str) {
        if let Some(command) = map_key(self.config.input_scheme, code, self.config.arrow_speed) {
            self.ball.apply(command);
        }
    }

    /// Advance the round by one tick, returning what happened.
    pub fn tick(&mut self) -> Vec<TickEvent> {
        self.ticks += 1;
        self.fanfare.update(self.config.tick_dt());

        let report = self
            .ball
            .step(&self.field, self.config.friction, self.config.bounds_check);

        let mut events = Vec::new();
        if let Some((x, z)) = report.out_of_bounds {
            tracing::debug!(x, z, "ball left the field, resetting");
            events.push(TickEvent::OutOfBounds { x, z });
        }
        if let Some(distance) = report.goal {
            self.goals_scored += 1;
            self.fanfare.trigger();
            tracing::info!(distance, total = self.goals_scored, "goal captured");
            events.push(TickEvent::GoalScored {
                distance,
                total_goals: self.goals_scored,
            });
        }
        events
    }

    /// Reset the ball to spawn and place a fresh goal.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.field.resample_goal(&self.config, rng);
        self.ball.reset(self.field.spawn());
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            ball: self.ball,
            goal: self.field.goal(),
            goals_scored: self.goals_scored,
            ticks: self.ticks,
            message_opacity: self.fanfare.opacity(),
        }
    }

    /// Msgpack-encode the snapshot for broadcast.
    pub fn encode_snapshot(&self) -> Vec<u8> {
        rmp_serde::to_vec(&self.snapshot()).expect("round snapshot serialization must succeed")
    }

    pub fn config(&self) -> &GateballConfig {
        &self.config
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn goal(&self) -> Vec3 {
        self.field.goal()
    }

    pub fn message_opacity(&self) -> f32 {
        self.fanfare.opacity()
    }

    pub fn goals_scored(&self) -> u32 {
        self.goals_scored
    }
}
