use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinState {
    Idle,
    Running { progress: f64, target: usize },
    Complete { index: usize },
}

/// Drives a wheel spin from explicit ticks. The landing slice is drawn up
/// front from the supplied rng; progress only decides how far the
/// highlight has travelled.
#[derive(Debug, Clone)]
pub struct Spinner {
    state: SpinState,
    slice_count: usize,
    duration: Duration,
    turns: u32,
}

impl Spinner {
    pub fn new(slice_count: usize, duration: Duration, turns: u32) -> Self {
        Self {
            state: SpinState::Idle,
            slice_count: slice_count.max(1),
            duration,
            turns,
        }
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SpinState::Running { .. })
    }

    /// Starts (or restarts) a spin and returns the slice it will land on.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> usize {
        let target = rng.random_range(0..self.slice_count);
        self.state = SpinState::Running {
            progress: 0.0,
            target,
        };
        target
    }

    /// Advances a running spin. Yields the landed slice on the tick that
    /// completes it and `None` otherwise.
    pub fn tick(&mut self, elapsed: Duration) -> Option<usize> {
        let SpinState::Running { progress, target } = self.state else {
            return None;
        };

        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let progress = (progress + step).min(1.0);

        if progress >= 1.0 {
            self.state = SpinState::Complete { index: target };
            Some(target)
        } else {
            self.state = SpinState::Running { progress, target };
            None
        }
    }

    /// Slice currently under the highlight.
    pub fn highlighted(&self) -> Option<usize> {
        match self.state {
            SpinState::Idle => None,
            SpinState::Complete { index } => Some(index),
            SpinState::Running { progress, target } => {
                let total = self.turns as usize * self.slice_count + target;
                let step = (ease_out_cubic(progress) * total as f64).floor() as usize;
                Some(step.min(total) % self.slice_count)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = SpinState::Idle;
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}
