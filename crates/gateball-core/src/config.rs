use serde::{Deserialize, Serialize};

use crate::input::InputScheme;

/// Data-driven configuration for a gateball round.
///
/// The game's variants differ only in these constants; each variant is a
/// named preset over one struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateballConfig {
    /// Velocity decay multiplier applied once per tick.
    pub friction: f32,
    /// Field half-extent along X. Ball positions beyond this are out of bounds.
    pub field_half_width: f32,
    /// Field half-extent along Z.
    pub field_half_depth: f32,
    /// Whether leaving the field resets the ball. Off in the classic variant.
    pub bounds_check: bool,
    /// Goal sampling half-range along X (goal.x drawn from [-range, +range]).
    pub goal_range_x: f32,
    /// Goal sampling half-range along Z.
    pub goal_range_z: f32,
    /// Ball-to-goal distance below which the goal is captured.
    pub capture_radius: f32,
    /// Resting height of the ball (spawn y).
    pub spawn_height: f32,
    /// Height of the goal ring center.
    pub goal_height: f32,
    /// Speed set on a single axis by an arrow key press.
    pub arrow_speed: f32,
    /// How long the goal message stays up before fading, in milliseconds.
    pub message_hold_ms: u64,
    /// Simulation tick rate in Hz.
    pub tick_rate: f32,
    /// Which keyboard scheme drives the ball.
    pub input_scheme: InputScheme,
    /// Directional-light shadow map resolution (pixels per side).
    pub shadow_map_size: u32,
}

impl Default for GateballConfig {
    fn default() -> Self {
        Self {
            friction: 0.98,
            field_half_width: 125.0,
            field_half_depth: 40.0,
            bounds_check: false,
            goal_range_x: 100.0,
            goal_range_z: 35.0,
            capture_radius: 3.0,
            spawn_height: 2.0,
            goal_height: 1.0,
            arrow_speed: 0.5,
            message_hold_ms: 3000,
            tick_rate: 60.0,
            input_scheme: InputScheme::Arrows,
            shadow_map_size: 1024,
        }
    }
}

impl GateballConfig {
    /// The arrow-key variant: soft friction, no bounds enforcement.
    pub fn classic() -> Self {
        Self::default()
    }

    /// The eight-way-key variant: harder friction, out-of-bounds resets,
    /// higher-resolution shadows.
    pub fn bounded() -> Self {
        Self {
            friction: 0.96,
            bounds_check: true,
            input_scheme: InputScheme::EightWay,
            shadow_map_size: 2048,
            ..Self::default()
        }
    }

    /// The BLE-block variant: same constants as `bounded()`, driven by a
    /// MESH block instead of (or alongside) the keyboard.
    pub fn mesh() -> Self {
        Self::bounded()
    }

    /// Look up a variant preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "bounded" => Some(Self::bounded()),
            "mesh" => Some(Self::mesh()),
            _ => None,
        }
    }

    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("GATEBALL_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/gateball.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }

    /// Seconds per simulation tick.
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_script() {
        let config = GateballConfig::classic();
        assert_eq!(config.friction, 0.98);
        assert!(!config.bounds_check);
        assert_eq!(config.input_scheme, InputScheme::Arrows);
        assert_eq!(config.shadow_map_size, 1024);
    }

    #[test]
    fn bounded_preset_enforces_field() {
        let config = GateballConfig::bounded();
        assert_eq!(config.friction, 0.96);
        assert!(config.bounds_check);
        assert_eq!(config.input_scheme, InputScheme::EightWay);
        assert_eq!(config.shadow_map_size, 2048);
    }

    #[test]
    fn mesh_preset_shares_bounded_constants() {
        let mesh = GateballConfig::mesh();
        let bounded = GateballConfig::bounded();
        assert_eq!(mesh.friction, bounded.friction);
        assert_eq!(mesh.bounds_check, bounded.bounds_check);
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(GateballConfig::preset("turbo").is_none());
        assert!(GateballConfig::preset("bounded").is_some());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GateballConfig = toml::from_str("friction = 0.5").unwrap();
        assert_eq!(config.friction, 0.5);
        assert_eq!(config.goal_range_x, 100.0);
        assert_eq!(config.capture_radius, 3.0);
    }

    #[test]
    fn toml_roundtrip() {
        let config = GateballConfig::bounded();
        let text = toml::to_string(&config).unwrap();
        let back: GateballConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.friction, config.friction);
        assert_eq!(back.input_scheme, config.input_scheme);
    }
}
