pub mod config;
pub mod events;
pub mod input;
pub mod vec3;

pub use config::GateballConfig;
pub use events::TickEvent;
pub use input::{InputScheme, VelocityCommand, map_key};
pub use vec3::{Vec3, Velocity};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::GateballConfig;

    /// A config with bounds checking on and a tight goal range, convenient
    /// for exercising resets deterministically.
    pub fn bounded_test_config() -> GateballConfig {
        GateballConfig {
            tick_rate: 10.0,
            ..GateballConfig::bounded()
        }
    }

    /// The classic variant at a low tick rate so time-based assertions stay
    /// cheap in tests.
    pub fn classic_test_config() -> GateballConfig {
        GateballConfig {
            tick_rate: 10.0,
            ..GateballConfig::classic()
        }
    }
}
