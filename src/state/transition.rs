//! Step slide animation state

use super::wizard::Step;
use std::time::{Duration, Instant};

/// Direction the incoming step slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Moving forward: content enters from the right
    FromRight,
    /// Moving back: content enters from the left
    FromLeft,
}

impl SlideDirection {
    /// Forward (or staying) slides from the right
    pub fn between(previous: Step, current: Step) -> Self {
        if current.index() >= previous.index() {
            Self::FromRight
        } else {
            Self::FromLeft
        }
    }
}

/// Horizontal slide played when the wizard changes step
#[derive(Debug)]
pub struct StepTransition {
    pub start_time: Instant,
    pub duration: Duration,
    pub direction: SlideDirection,
    /// Eased progress from 0.0 to 1.0
    pub progress: f32,
}

impl StepTransition {
    pub fn new(previous: Step, current: Step, duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
            direction: SlideDirection::between(previous, current),
            progress: 0.0,
        }
    }

    /// Update progress from elapsed time
    pub fn update(&mut self) {
        self.progress = Self::eased(self.start_time.elapsed(), self.duration);
    }

    fn eased(elapsed: Duration, duration: Duration) -> f32 {
        if duration.is_zero() || elapsed >= duration {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / duration.as_secs_f32();
        simple_easing::cubic_in_out(linear)
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Signed horizontal offset for content of the given width.
    /// Starts at half the width and settles at zero.
    pub fn offset(&self, width: u16) -> i32 {
        let remaining = (1.0 - self.progress.clamp(0.0, 1.0)) * (width as f32 / 2.0);
        match self.direction {
            SlideDirection::FromRight => remaining.round() as i32,
            SlideDirection::FromLeft => -(remaining.round() as i32),
        }
    }
}
