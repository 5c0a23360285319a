//! Hover animation manager using iced_anim
//!
//! Only one row can be hovered at a time, so only the active row and the row
//! fading out are tracked.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover animation duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Exclusive hover state with fade-in and fade-out transitions
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    /// Currently hovered key
    active_key: Option<K>,
    /// Fade-in of the active key
    active_anim: Animated<f32>,
    /// Previously hovered key
    fading_key: Option<K>,
    /// Fade-out of the previous key
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Hover `key` exclusively; `None` unhovers everything
    pub fn set_hovered_exclusive(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // The old active key starts fading from wherever it got to
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Interpolated hover value for a key (0.0 to 1.0)
    pub fn get_progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Forget the fading key once its fade-out has finished
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && self.fading_anim.value() == self.fading_anim.target()
        {
            self.fading_key = None;
        }
    }

    /// Drop all hover state, e.g. when the rows are replaced
    pub fn clear(&mut self) {
        self.active_key = None;
        self.fading_key = None;
        self.active_anim = Animated::transition(0.0, hover_easing());
        self.fading_anim = Animated::transition(0.0, hover_easing());
    }

    #[cfg(test)]
    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    /// Advance both transitions; call on every animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
        self.cleanup_completed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new();
        assert_eq!(anims.get_progress(&1), 0.0);

        anims.set_hovered_exclusive(Some(1));
        assert!(anims.is_active(&1));
        assert!(anims.is_animating());

        anims.set_hovered_exclusive(Some(2));
        assert!(anims.is_active(&2));
        assert!(!anims.is_active(&1));
    }

    #[test]
    fn test_unhover_and_clear() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(3));
        anims.set_hovered_exclusive(None);
        assert!(!anims.is_active(&3));

        anims.clear();
        assert_eq!(anims.get_progress(&3), 0.0);
        assert!(!anims.is_animating());
    }

    #[test]
    fn test_progress_range() {
        let mut anims: HoverAnimations<usize> = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(1));
        anims.tick(Instant::now() + Duration::from_millis(100));
        let progress = anims.get_progress(&1);
        assert!((0.0..=1.0).contains(&progress));
    }
}
