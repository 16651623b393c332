//! Fade-in animation state for the form

use std::time::{Duration, Instant};

/// Animation phase of the fade-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Opacity is rising
    FadingIn,
    /// Fully opaque, nothing left to animate
    Complete,
}

/// Fade-in animation state
#[derive(Debug)]
pub struct FadeState {
    /// When the fade started
    pub start_time: Instant,
    /// Total fade duration
    pub duration: Duration,
    pub phase: FadePhase,
    /// Current opacity, 0.0 (invisible) to 1.0 (fully drawn)
    pub opacity: f32,
}

impl FadeState {
    /// Duration used when the config does not set one
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
            phase: FadePhase::FadingIn,
            opacity: 0.0,
        }
    }

    /// Update opacity based on elapsed time
    pub fn update(&mut self) {
        if self.is_complete() {
            return;
        }
        self.update_at(self.start_time.elapsed());
    }

    fn update_at(&mut self, elapsed: Duration) {
        if self.duration.is_zero() || elapsed >= self.duration {
            self.skip();
            return;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Cubic ease-out: fast at first, settling gently
        self.opacity = simple_easing::cubic_out(progress);
    }

    /// Jump to the end (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = FadePhase::Complete;
        self.opacity = 1.0;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == FadePhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_transparent() {
        let state = FadeState::new(FadeState::DEFAULT_DURATION);
        assert_eq!(state.phase, FadePhase::FadingIn);
        assert_eq!(state.opacity, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_completes() {
        let mut state = FadeState::new(FadeState::DEFAULT_DURATION);
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.opacity, 1.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut state = FadeState::new(Duration::ZERO);
        state.update();
        assert!(state.is_complete());
    }

    #[test]
    fn test_opacity_rises_with_time() {
        let mut state = FadeState::new(Duration::from_millis(1000));
        state.update_at(Duration::from_millis(100));
        let early = state.opacity;
        state.update_at(Duration::from_millis(500));
        let later = state.opacity;
        assert!(early > 0.0);
        assert!(later > early);
        assert!(later < 1.0);
        assert_eq!(state.phase, FadePhase::FadingIn);
    }

    #[test]
    fn test_completes_after_duration() {
        let mut state = FadeState::new(Duration::from_millis(200));
        state.update_at(Duration::from_millis(250));
        assert!(state.is_complete());
        assert_eq!(state.opacity, 1.0);
    }
}
