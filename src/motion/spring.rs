use crate::config::spring as tuning;

/// Substep used by the integrator regardless of frame rate.
const SUBSTEP_SECS: f64 = 1.0 / 120.0;

/// Damped spring that pulls a value toward a moving target.
///
/// With the default stiffness/damping pair the spring is overdamped, so it
/// settles without visible overshoot.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    rest_delta: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(tuning::STIFFNESS, tuning::DAMPING, tuning::REST_DELTA)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, rest_delta: f64) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
            rest_delta,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Moves value and target together, dropping any motion.
    #[cfg(test)]
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() < self.rest_delta && (self.target - self.value).abs() < self.rest_delta
    }

    /// Advances by `dt_secs`, capped so a backgrounded tab does not jump.
    /// Returns the new value.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let mut remaining = dt_secs.clamp(0.0, tuning::MAX_STEP_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn converges_to_the_target_without_overshoot() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let mut last = 0.0;
        for _ in 0..600 {
            let v = spring.step(FRAME);
            assert!(v <= 1.0 + 1e-3, "overshot to {v}");
            assert!(v + 1e-9 >= last, "moved backwards from {last} to {v}");
            last = v;
        }
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn follows_a_retargeted_value_downward() {
        let mut spring = Spring::default();
        spring.jump_to(0.8);
        spring.set_target(0.2);
        for _ in 0..600 {
            let v = spring.step(FRAME);
            assert!(v >= 0.2 - 1e-3);
        }
        assert_eq!(spring.value(), 0.2);
    }

    #[test]
    fn huge_frame_gaps_are_capped() {
        let mut spring = Spring::default();
        spring.set_target(1.0);
        let v = spring.step(10.0);
        assert!(v < 1.0);
        assert!(v > 0.0);
    }

    #[test]
    fn at_rest_spring_stays_put() {
        let mut spring = Spring::default();
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(FRAME), 0.0);
    }
}
