use serde::{Deserialize, Serialize};

use gateball_core::input::VelocityCommand;
use gateball_core::vec3::{Vec3, Velocity};

use crate::field::Field;

/// What a single physics step observed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// The ball left the field and was reset (bounds-checking variants only).
    pub out_of_bounds: Option<(f32, f32)>,
    /// The ball entered the capture radius; holds the capture distance.
    pub goal: Option<f32>,
}

/// Ball state: position plus the XZ velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Velocity,
}

impl BallState {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Velocity::ZERO,
        }
    }

    /// Apply an input command. Commands overwrite the targeted components;
    /// the last command wins.
    pub fn apply(&mut self, command: VelocityCommand) {
        match command {
            VelocityCommand::SetX(vx) => self.velocity.x = vx,
            VelocityCommand::SetZ(vz) => self.velocity.z = vz,
            VelocityCommand::Set { vx, vz } => {
                self.velocity.x = vx;
                self.velocity.z = vz;
            },
        }
    }

    /// Advance the ball by one tick.
    ///
    /// Order matters and is observable: integrate first, then decay, so a
    /// tick moves the ball by the pre-decay velocity and friction only
    /// affects future ticks. There is no velocity floor — decay is
    /// asymptotic and never snaps to zero.
    pub fn step(&mut self, field: &Field, friction: f32, bounds_check: bool) -> StepReport {
        let mut report = StepReport::default();

        self.position.x += self.velocity.x;
        self.position.z += self.velocity.z;

        self.velocity.x *= friction;
        self.velocity.z *= friction;

        if bounds_check && !field.contains(&self.position) {
            report.out_of_bounds = Some((self.position.x, self.position.z));
            self.reset(field.spawn());
        }

        // Checked after a possible bounds reset: a goal sampled next to the
        // spawn can capture on the reset position.
        if field.captures(&self.position) {
            report.goal = Some(self.position.distance_to(&field.goal()));
            self.reset(field.spawn());
        }

        report
    }

    /// Put the ball back on the spawn point with zero velocity.
    pub fn reset(&mut self, spawn: Vec3) {
        self.position = spawn;
        self.velocity = Velocity::ZERO;
    }
}
