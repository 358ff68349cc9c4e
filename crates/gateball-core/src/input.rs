use serde::{Deserialize, Serialize};

/// Keyboard scheme driving the ball. The two schemes are mutually exclusive;
/// a key belonging to the inactive scheme is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputScheme {
    /// Arrow keys overwrite one velocity axis with ±arrow_speed.
    #[default]
    Arrows,
    /// Letter keys z/x/c/a/s/d/q/w/e overwrite both components with one of
    /// eight fixed unit vectors, or the zero vector ('s' stops the ball).
    EightWay,
}

/// A velocity overwrite produced by a key press. Last command wins; there is
/// no accumulation queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VelocityCommand {
    /// Overwrite only the X component.
    SetX(f32),
    /// Overwrite only the Z component.
    SetZ(f32),
    /// Overwrite both components.
    Set { vx: f32, vz: f32 },
}

/// Map a key code (KeyboardEvent.code style: "ArrowUp", "KeyQ") to a velocity
/// command under the given scheme. Unbound keys map to `None`.
pub fn map_key(scheme: InputScheme, code: &str, arrow_speed: f32) -> Option<VelocityCommand> {
    match scheme {
        InputScheme::Arrows => match code {
            "ArrowUp" => Some(VelocityCommand::SetZ(-arrow_speed)),
            "ArrowDown" => Some(VelocityCommand::SetZ(arrow_speed)),
            "ArrowLeft" => Some(VelocityCommand::SetX(-arrow_speed)),
            "ArrowRight" => Some(VelocityCommand::SetX(arrow_speed)),
            _ => None,
        },
        InputScheme::EightWay => {
            let (vx, vz) = match code {
                "KeyZ" => (-1.0, 1.0),
                "KeyX" => (0.0, 1.0),
                "KeyC" => (1.0, 1.0),
                "KeyA" => (-1.0, 0.0),
                "KeyS" => (0.0, 0.0),
                "KeyD" => (1.0, 0.0),
                "KeyQ" => (-1.0, -1.0),
                "KeyW" => (0.0, -1.0),
                "KeyE" => (1.0, -1.0),
                _ => return None,
            };
            Some(VelocityCommand::Set { vx, vz })
        },
    }
}
