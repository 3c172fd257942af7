//! Gesture state machine for the swipe-card stack. Continuous visual
//! feedback is derived from every move; the accept/reject decision is
//! classified only at release, on the horizontal offset alone.

/// Horizontal offset past which a release commits a decision.
pub const COMMIT_THRESHOLD_PX: f64 = 10.0;
/// Horizontal offset past which the overlay shows its accept/reject label.
pub const LABEL_THRESHOLD_PX: f64 = 50.0;
/// Offset at which the overlay would reach full opacity (before capping).
pub const OVERLAY_FULL_PX: f64 = 150.0;
pub const OVERLAY_MAX_OPACITY: f64 = 0.8;
pub const COMMIT_DURATION_MS: f64 = 300.0;
pub const CANCEL_DURATION_MS: f64 = 250.0;
/// Cards rendered in the stack; only the top one is interactive.
pub const VISIBLE_CARDS: usize = 3;

const ROTATION_PER_PX_DEG: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Accept,
    Reject,
}

/// Ephemeral state of the active drag: start point plus cumulative
/// offset. Reset to neutral after every release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start_x: f64,
    pub start_y: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ReleaseAnimation {
    from_x: f64,
    from_y: f64,
    to_x: f64,
    to_y: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    decision: Option<SwipeDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging(DragState),
    Releasing(ReleaseAnimation),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No animation in flight.
    Idle,
    Running,
    /// Animation finished; the engine is back to neutral. Carries the
    /// decision for a committed release, `None` for a snap-back.
    Done(Option<SwipeDirection>),
}

/// Classify a horizontal release offset. `None` means snap back.
pub fn classify(dx: f64) -> Option<SwipeDirection> {
    if dx > COMMIT_THRESHOLD_PX {
        Some(SwipeDirection::Accept)
    } else if dx < -COMMIT_THRESHOLD_PX {
        Some(SwipeDirection::Reject)
    } else {
        None
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// `Idle -> Dragging -> Releasing -> Idle`. One gesture in flight at a
/// time: starts are ignored while releasing, stray moves and releases
/// outside `Dragging` are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeEngine {
    phase: Phase,
}

impl Default for SwipeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeEngine {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_releasing(&self) -> bool {
        matches!(self.phase, Phase::Releasing(_))
    }

    /// Begin a drag at the given pointer position. Returns whether the
    /// gesture was accepted (only from `Idle`).
    pub fn start(&mut self, x: f64, y: f64) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }
        self.phase = Phase::Dragging(DragState {
            start_x: x,
            start_y: y,
            dx: 0.0,
            dy: 0.0,
        });
        true
    }

    /// Update the cumulative offset. Idempotent overwrite; ignored
    /// outside `Dragging`.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Phase::Dragging(ref mut drag) = self.phase {
            drag.dx = x - drag.start_x;
            drag.dy = y - drag.start_y;
        }
    }

    /// End the drag: classify on dx only and begin the release
    /// animation (fly-out on commit, snap-back on cancel). Returns the
    /// classification, or `None` when there was no drag to end.
    pub fn release(&mut self, viewport_width: f64) -> Option<Option<SwipeDirection>> {
        let Phase::Dragging(drag) = self.phase else {
            return None;
        };
        let decision = classify(drag.dx);
        let (to_x, to_y, duration_ms) = match decision {
            Some(SwipeDirection::Accept) => (viewport_width, drag.dy, COMMIT_DURATION_MS),
            Some(SwipeDirection::Reject) => (-viewport_width, drag.dy, COMMIT_DURATION_MS),
            None => (0.0, 0.0, CANCEL_DURATION_MS),
        };
        self.phase = Phase::Releasing(ReleaseAnimation {
            from_x: drag.dx,
            from_y: drag.dy,
            to_x,
            to_y,
            duration_ms,
            elapsed_ms: 0.0,
            decision,
        });
        Some(decision)
    }

    /// Abort the gesture without classifying (pointer cancel).
    pub fn abort(&mut self) {
        if matches!(self.phase, Phase::Dragging(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// Advance the release animation by one frame.
    pub fn tick(&mut self, dt_ms: f64) -> TickOutcome {
        let Phase::Releasing(ref mut animation) = self.phase else {
            return TickOutcome::Idle;
        };
        animation.elapsed_ms += dt_ms.max(0.0);
        if animation.elapsed_ms < animation.duration_ms {
            return TickOutcome::Running;
        }
        let decision = animation.decision;
        self.phase = Phase::Idle;
        TickOutcome::Done(decision)
    }

    /// Current card offset: the raw drag delta while dragging, the
    /// eased interpolation while releasing, neutral otherwise.
    pub fn offset(&self) -> (f64, f64) {
        match self.phase {
            Phase::Idle => (0.0, 0.0),
            Phase::Dragging(drag) => (drag.dx, drag.dy),
            Phase::Releasing(animation) => {
                let t = if animation.duration_ms > 0.0 {
                    animation.elapsed_ms / animation.duration_ms
                } else {
                    1.0
                };
                let eased = ease_out_cubic(t);
                (
                    animation.from_x + (animation.to_x - animation.from_x) * eased,
                    animation.from_y + (animation.to_y - animation.from_y) * eased,
                )
            }
        }
    }

    pub fn rotation_deg(&self) -> f64 {
        self.offset().0 * ROTATION_PER_PX_DEG
    }

    /// Overlay state for the top card: label direction (only past the
    /// label threshold) and opacity scaling with |dx|.
    pub fn overlay(&self) -> Overlay {
        let (dx, _) = self.offset();
        let opacity = (dx.abs() / OVERLAY_FULL_PX).min(OVERLAY_MAX_OPACITY);
        let label = if dx > LABEL_THRESHOLD_PX {
            Some(SwipeDirection::Accept)
        } else if dx < -LABEL_THRESHOLD_PX {
            Some(SwipeDirection::Reject)
        } else {
            None
        };
        Overlay { label, opacity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub label: Option<SwipeDirection>,
    pub opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 400.0;

    fn dragged(dx: f64, dy: f64) -> SwipeEngine {
        let mut engine = SwipeEngine::new();
        assert!(engine.start(100.0, 200.0));
        engine.drag_to(100.0 + dx, 200.0 + dy);
        engine
    }

    fn run_to_completion(engine: &mut SwipeEngine) -> Option<SwipeDirection> {
        for _ in 0..100 {
            match engine.tick(16.0) {
                TickOutcome::Running => continue,
                TickOutcome::Done(decision) => return decision,
                TickOutcome::Idle => panic!("tick before release"),
            }
        }
        panic!("animation never finished");
    }

    #[test]
    fn classification_uses_horizontal_offset_only() {
        for dy in [-300.0, 0.0, 300.0] {
            let mut engine = dragged(10.1, dy);
            assert_eq!(
                engine.release(VIEWPORT),
                Some(Some(SwipeDirection::Accept))
            );
            let mut engine = dragged(-10.1, dy);
            assert_eq!(
                engine.release(VIEWPORT),
                Some(Some(SwipeDirection::Reject))
            );
            let mut engine = dragged(10.0, dy);
            assert_eq!(engine.release(VIEWPORT), Some(None));
            let mut engine = dragged(-10.0, dy);
            assert_eq!(engine.release(VIEWPORT), Some(None));
        }
    }

    #[test]
    fn stray_release_and_move_are_no_ops() {
        let mut engine = SwipeEngine::new();
        assert_eq!(engine.release(VIEWPORT), None);
        engine.drag_to(500.0, 500.0);
        assert_eq!(engine.offset(), (0.0, 0.0));
        assert_eq!(engine.tick(16.0), TickOutcome::Idle);
    }

    #[test]
    fn starts_are_ignored_while_releasing() {
        let mut engine = dragged(60.0, 0.0);
        engine.release(VIEWPORT);
        assert!(!engine.start(0.0, 0.0));
        assert!(engine.is_releasing());
        run_to_completion(&mut engine);
        assert!(engine.start(0.0, 0.0));
    }

    #[test]
    fn commit_animation_emits_exactly_one_decision_and_resets() {
        let mut engine = dragged(120.0, -40.0);
        engine.release(VIEWPORT);
        let decision = run_to_completion(&mut engine);
        assert_eq!(decision, Some(SwipeDirection::Accept));
        assert_eq!(engine.offset(), (0.0, 0.0));
        // Once idle, further ticks report no animation.
        assert_eq!(engine.tick(16.0), TickOutcome::Idle);
    }

    #[test]
    fn cancel_animation_snaps_back_without_a_decision() {
        let mut engine = dragged(5.0, 80.0);
        engine.release(VIEWPORT);
        let decision = run_to_completion(&mut engine);
        assert_eq!(decision, None);
        assert_eq!(engine.offset(), (0.0, 0.0));
    }

    #[test]
    fn commit_interpolates_toward_the_viewport_edge() {
        let mut engine = dragged(-80.0, 10.0);
        engine.release(VIEWPORT);
        engine.tick(150.0);
        let (dx, _) = engine.offset();
        assert!(dx < -80.0);
        engine.tick(COMMIT_DURATION_MS);
        assert!(matches!(engine.tick(0.0), TickOutcome::Idle));
    }

    #[test]
    fn ease_out_cubic_hits_its_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn overlay_opacity_scales_and_caps() {
        let engine = dragged(75.0, 0.0);
        let overlay = engine.overlay();
        assert_eq!(overlay.label, Some(SwipeDirection::Accept));
        assert!((overlay.opacity - 0.5).abs() < 1e-9);

        let engine = dragged(-400.0, 0.0);
        let overlay = engine.overlay();
        assert_eq!(overlay.label, Some(SwipeDirection::Reject));
        assert_eq!(overlay.opacity, OVERLAY_MAX_OPACITY);

        // Between the commit and label thresholds there is feedback but
        // no label yet.
        let engine = dragged(30.0, 0.0);
        let overlay = engine.overlay();
        assert_eq!(overlay.label, None);
        assert!(overlay.opacity > 0.0);
    }

    #[test]
    fn abort_resets_without_animating() {
        let mut engine = dragged(200.0, 0.0);
        engine.abort();
        assert_eq!(engine.offset(), (0.0, 0.0));
        assert!(engine.start(0.0, 0.0));
    }
}
