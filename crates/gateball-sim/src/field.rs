use rand::Rng;

use gateball_core::config::GateballConfig;
use gateball_core::vec3::Vec3;

/// The playable field: bounds rectangle, spawn point, and this round's goal.
#[derive(Debug, Clone)]
pub struct Field {
    half_width: f32,
    half_depth: f32,
    spawn: Vec3,
    goal: Vec3,
    capture_radius: f32,
}

impl Field {
    /// Build a field from config, sampling the goal position with `rng`.
    pub fn new(config: &GateballConfig, rng: &mut impl Rng) -> Self {
        Self {
            half_width: config.field_half_width,
            half_depth: config.field_half_depth,
            spawn: Vec3::new(0.0, config.spawn_height, 0.0),
            goal: sample_goal(config, rng),
            capture_radius: config.capture_radius,
        }
    }

    /// Whether a position is inside the field rectangle (XZ only).
    pub fn contains(&self, position: &Vec3) -> bool {
        position.x.abs() <= self.half_width && position.z.abs() <= self.half_depth
    }

    /// Whether a position is within capture distance of the goal.
    pub fn captures(&self, position: &Vec3) -> bool {
        position.distance_to(&self.goal) < self.capture_radius
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn goal(&self) -> Vec3 {
        self.goal
    }

    /// Place a fresh goal for a new round.
    pub fn resample_goal(&mut self, config: &GateballConfig, rng: &mut impl Rng) {
        self.goal = sample_goal(config, rng);
    }
}

/// Sample a goal position: x and z drawn independently and uniformly from the
/// configured half-ranges, y fixed at the ring height.
pub fn sample_goal(config: &GateballConfig, rng: &mut impl Rng) -> Vec3 {
    let x = rng.random_range(-config.goal_range_x..=config.goal_range_x);
    let z = rng.random_range(-config.goal_range_z..=config.goal_range_z);
    Vec3::new(x, config.goal_height, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn goal_sampling_stays_in_range() {
        let config = GateballConfig::classic();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let goal = sample_goal(&config, &mut rng);
            assert!(goal.x >= -100.0 && goal.x <= 100.0, "goal.x = {}", goal.x);
            assert!(goal.z >= -35.0 && goal.z <= 35.0, "goal.z = {}", goal.z);
            assert_eq!(goal.y, config.goal_height);
        }
    }

    #[test]
    fn goal_is_always_inside_the_bounded_field() {
        // The sampling range is strictly smaller than the bounds rectangle,
        // so a capturable goal can never sit in the reset zone.
        let config = GateballConfig::bounded();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let goal = sample_goal(&config, &mut rng);
            let field = Field::new(&config, &mut rng);
            assert!(field.contains(&goal));
        }
    }

    #[test]
    fn contains_is_inclusive_at_the_edge() {
        let config = GateballConfig::bounded();
        let mut rng = StdRng::seed_from_u64(3);
        let field = Field::new(&config, &mut rng);
        assert!(field.contains(&Vec3::new(125.0, 2.0, 40.0)));
        assert!(!field.contains(&Vec3::new(125.1, 2.0, 0.0)));
        assert!(!field.contains(&Vec3::new(0.0, 2.0, -40.1)));
    }

    #[test]
    fn captures_is_strict() {
        // Degenerate ranges pin the goal to (0, 1, 0) so the radius check is
        // exact.
        let config = GateballConfig {
            goal_range_x: 0.0,
            goal_range_z: 0.0,
            ..GateballConfig::classic()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let field = Field::new(&config, &mut rng);
        assert_eq!(field.goal(), Vec3::new(0.0, 1.0, 0.0));
        // Exactly at the radius, at goal height: not captured.
        assert!(!field.captures(&Vec3::new(3.0, 1.0, 0.0)));
        assert!(field.captures(&Vec3::new(2.99, 1.0, 0.0)));
    }

    #[test]
    fn resample_moves_the_goal() {
        let config = GateballConfig::classic();
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = Field::new(&config, &mut rng);
        let first = field.goal();
        field.resample_goal(&config, &mut rng);
        // Astronomically unlikely to collide with a continuous distribution.
        assert_ne!(first, field.goal());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn goal_in_range_for_any_seed(seed in 0u64..10_000) {
                let config = GateballConfig::classic();
                let mut rng = StdRng::seed_from_u64(seed);
                let goal = sample_goal(&config, &mut rng);
                prop_assert!(goal.x >= -config.goal_range_x && goal.x <= config.goal_range_x);
                prop_assert!(goal.z >= -config.goal_range_z && goal.z <= config.goal_range_z);
            }

            #[test]
            fn goal_respects_shrunken_ranges(
                seed in 0u64..1000,
                range_x in 0.5f32..100.0,
                range_z in 0.5f32..35.0,
            ) {
                let config = GateballConfig {
                    goal_range_x: range_x,
                    goal_range_z: range_z,
                    ..GateballConfig::classic()
                };
                let mut rng = StdRng::seed_from_u64(seed);
                let goal = sample_goal(&config, &mut rng);
                prop_assert!(goal.x.abs() <= range_x);
                prop_assert!(goal.z.abs() <= range_z);
            }
        }
    }
}
