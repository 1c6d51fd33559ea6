//! Staggered slide-in of section items, in mount order

use std::time::{Duration, Instant};

/// Reveal animation state for the current section
#[derive(Debug, Clone)]
pub struct RevealState {
    /// When the current section was entered
    pub start_time: Instant,
    /// When false every item is shown at rest
    pub enabled: bool,
}

impl RevealState {
    /// Delay between consecutive items (100ms)
    const STAGGER: Duration = Duration::from_millis(100);
    /// Slide duration of a single item (500ms)
    const SLIDE_DURATION: Duration = Duration::from_millis(500);
    /// Columns an item travels while sliding in
    pub const SLIDE_DISTANCE: u16 = 4;

    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled,
        }
    }

    /// Start over (a new section was mounted)
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
    }

    /// Eased progress (0.0 to 1.0) of item `index` after `elapsed`
    pub fn progress_at(&self, index: usize, elapsed: Duration) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let delay = Self::STAGGER * index as u32;
        if elapsed < delay {
            return 0.0;
        }
        let progress = (elapsed - delay).as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress.min(1.0))
    }

    pub fn progress(&self, index: usize) -> f32 {
        self.progress_at(index, self.start_time.elapsed())
    }

    /// Left indent of item `index` right now
    pub fn offset(&self, index: usize) -> u16 {
        let remaining = 1.0 - self.progress(index);
        (remaining * Self::SLIDE_DISTANCE as f32).round() as u16
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.progress(index) > 0.0
    }

    /// True while any of the first `items` items is still moving
    pub fn is_animating(&self, items: usize) -> bool {
        self.is_animating_at(items, self.start_time.elapsed())
    }

    fn is_animating_at(&self, items: usize, elapsed: Duration) -> bool {
        if !self.enabled || items == 0 {
            return false;
        }
        let last = Self::STAGGER * (items as u32 - 1) + Self::SLIDE_DURATION;
        elapsed < last
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_always_complete() {
        let state = RevealState::new(false);
        assert_eq!(state.progress_at(5, Duration::ZERO), 1.0);
        assert_eq!(state.offset(5), 0);
        assert!(!state.is_animating(10));
    }

    #[test]
    fn test_first_item_starts_immediately() {
        let state = RevealState::new(true);
        assert_eq!(state.progress_at(0, Duration::ZERO), 0.0);
        assert!(state.progress_at(0, Duration::from_millis(100)) > 0.0);
    }

    #[test]
    fn test_later_items_wait_for_their_delay() {
        let state = RevealState::new(true);
        assert_eq!(state.progress_at(3, Duration::from_millis(250)), 0.0);
        assert!(state.progress_at(3, Duration::from_millis(350)) > 0.0);
    }

    #[test]
    fn test_progress_reaches_one() {
        let state = RevealState::new(true);
        assert_eq!(state.progress_at(2, Duration::from_millis(700)), 1.0);
        assert_eq!(state.progress_at(2, Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let state = RevealState::new(true);
        let mut last = 0.0;
        for ms in (0..=600).step_by(50) {
            let p = state.progress_at(1, Duration::from_millis(ms));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_animating_until_last_item_lands() {
        let state = RevealState::new(true);
        assert!(state.is_animating_at(4, Duration::from_millis(700)));
        assert!(!state.is_animating_at(4, Duration::from_millis(800)));
        assert!(!state.is_animating_at(0, Duration::ZERO));
    }

    #[test]
    fn test_fresh_state_hides_late_items() {
        let state = RevealState::new(true);
        assert!(!state.is_visible(20));
        assert_eq!(state.offset(20), RevealState::SLIDE_DISTANCE);
    }
}
