use crate::layout::LayoutEngine;
use std::time::{Duration, Instant};

/// Duration of interactive transitions
pub const TRANSITION_DURATION: Duration = Duration::from_millis(100);

/// Host animation collaborator.
///
/// Receives a duration and a block of layout mutations. The block is applied
/// right away; implementations decide how the change is presented over time.
pub trait Animator {
    fn animate(
        &mut self,
        duration: Duration,
        layout: &mut dyn LayoutEngine,
        changes: &mut dyn FnMut(&mut dyn LayoutEngine),
    );

    /// Fraction of the latest transaction already presented, in `0.0..=1.0`
    fn progress(&self) -> f32 {
        1.0
    }

    fn is_running(&self) -> bool {
        self.progress() < 1.0
    }
}

/// Applies every transaction instantly
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn animate(
        &mut self,
        _duration: Duration,
        layout: &mut dyn LayoutEngine,
        changes: &mut dyn FnMut(&mut dyn LayoutEngine),
    ) {
        changes(layout);
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    started_at: Instant,
    duration: Duration,
}

/// Wall-clock animator for a redraw loop; the host keeps drawing while
/// [`Animator::is_running`] holds
#[derive(Debug, Clone, Default)]
pub struct TickAnimator {
    current: Option<Transition>,
}

impl TickAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    fn progress_at(&self, now: Instant) -> f32 {
        let Some(transition) = self.current else {
            return 1.0;
        };
        if transition.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(transition.started_at);
        (elapsed.as_secs_f32() / transition.duration.as_secs_f32()).min(1.0)
    }
}

impl Animator for TickAnimator {
    fn animate(
        &mut self,
        duration: Duration,
        layout: &mut dyn LayoutEngine,
        changes: &mut dyn FnMut(&mut dyn LayoutEngine),
    ) {
        changes(layout);
        self.current = Some(Transition {
            started_at: Instant::now(),
            duration,
        });
    }

    fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }
}

/// Linear interpolation between two values
#[must_use]
pub fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Anchor, ConstraintLayout, Element, LayoutEngine};

    #[test]
    fn test_immediate_animator_applies_block() {
        let mut layout = ConstraintLayout::new();
        let mut animator = ImmediateAnimator;
        animator.animate(TRANSITION_DURATION, &mut layout, &mut |layout: &mut dyn LayoutEngine| {
            layout.remake_constraints(Element::TextEntry, &[Anchor::Top(20.0)]);
        });
        assert_eq!(layout.anchors(Element::TextEntry), &[Anchor::Top(20.0)]);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_tick_animator_runs_for_duration() {
        let mut layout = ConstraintLayout::new();
        let mut animator = TickAnimator::new();
        assert!(!animator.is_running());

        animator.animate(Duration::from_secs(60), &mut layout, &mut |_: &mut dyn LayoutEngine| {});
        assert!(animator.is_running());
        let later = Instant::now() + Duration::from_secs(61);
        assert!((animator.progress_at(later) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut layout = ConstraintLayout::new();
        let mut animator = TickAnimator::new();
        animator.animate(Duration::ZERO, &mut layout, &mut |_: &mut dyn LayoutEngine| {});
        assert!(!animator.is_running());
    }

    #[test]
    fn test_lerp_clamps_progress() {
        assert!((lerp(0.0, -12.0, 0.5) + 6.0).abs() < 0.001);
        assert!((lerp(0.0, -12.0, 2.0) + 12.0).abs() < 0.001);
    }
}
