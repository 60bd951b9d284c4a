/// Fixed timestep accumulator.
/// Turns variable animation-frame deltas into a whole number of fixed physics steps.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    /// Total simulated time handed out as fixed steps, in seconds.
    elapsed: f64,
}

/// At most this many fixed steps run per frame; a stalled tab catches up
/// slowly instead of spiralling.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        // Negative deltas come from clock adjustments on the host; ignore them.
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.elapsed += steps as f64 * self.dt as f64;
        steps
    }

    /// Interpolation alpha between the last step and the next (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Simulated seconds covered by all steps so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
        let a = ts.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {}", a);
    }

    #[test]
    fn long_frame_is_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), MAX_STEPS_PER_FRAME);
        assert!((ts.elapsed() - MAX_STEPS_PER_FRAME as f64 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn negative_delta_runs_nothing() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-0.5), 0);
        assert_eq!(ts.elapsed(), 0.0);
    }
}
