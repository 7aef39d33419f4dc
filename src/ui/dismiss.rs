// SPDX-License-Identifier: MPL-2.0
//! Per-toast dismissal state machine.
//!
//! Each displayed unit owns one controller driving its lifecycle:
//!
//! ```text
//! Entering → Running ⇄ Paused → Closing → Removed
//! ```
//!
//! The controller is tick-driven and takes explicit `Instant`s, so tests
//! are deterministic and no background timer exists. The only live "timer"
//! is a single `Option<Instant>` deadline slot shared by auto-dismiss and
//! removal timing; every transition clears it before re-arming, so at most
//! one deadline is outstanding per toast at any time.
//!
//! Pausing discards the pending deadline without remaining-time
//! bookkeeping; resuming arms a fresh full-duration deadline. This full
//! restart is intentional and must not be "fixed" into a countdown resume.

use crate::config::{ENTER_TRANSITION_MS, REMOVE_DELAY_MS};
use crate::message::DisplayUnit;
use std::time::{Duration, Instant};

/// Lifecycle phase of one displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entrance transition in progress; auto-dismiss is already armed.
    Entering,
    /// Fully visible with the auto-dismiss deadline armed (or disarmed
    /// forever when the duration is zero).
    Running,
    /// Pointer is over the toast; no deadline is armed.
    Paused,
    /// Exit transition in progress; removal deadline armed.
    Closing,
    /// Detached. Terminal.
    Removed,
}

/// State machine owning the visibility and removal timing of one toast.
#[derive(Debug, Clone)]
pub struct DismissController {
    duration: Duration,
    remove_delay: Duration,
    enter_transition: Duration,
    phase: Phase,
    phase_started: Instant,
    deadline: Option<Instant>,
}

impl DismissController {
    /// Attaches a controller for a freshly displayed unit.
    ///
    /// The auto-dismiss deadline is armed immediately (the entrance
    /// transition does not delay it); a zero duration arms nothing and the
    /// toast stays until closed manually.
    #[must_use]
    pub fn attach(unit: &DisplayUnit, now: Instant) -> Self {
        Self::with_remove_delay(unit, Duration::from_millis(REMOVE_DELAY_MS), now)
    }

    /// Like [`DismissController::attach`] with a custom removal delay.
    #[must_use]
    pub fn with_remove_delay(unit: &DisplayUnit, remove_delay: Duration, now: Instant) -> Self {
        let duration = Duration::from_millis(unit.duration_ms());
        let deadline = (!duration.is_zero()).then(|| now + duration);
        Self {
            duration,
            remove_delay,
            enter_transition: Duration::from_millis(ENTER_TRANSITION_MS),
            phase: Phase::Entering,
            phase_started: now,
            deadline,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Advances the machine to `now`. Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let previous = self.phase;
        match self.phase {
            Phase::Entering => {
                if self.deadline_reached(now) {
                    // Duration shorter than the entrance transition.
                    self.begin_close(now);
                } else if now.duration_since(self.phase_started) >= self.enter_transition {
                    self.transition_to(Phase::Running, now);
                }
            }
            Phase::Running => {
                if self.deadline_reached(now) {
                    self.begin_close(now);
                }
            }
            Phase::Closing => {
                if self.deadline_reached(now) {
                    self.deadline = None;
                    self.transition_to(Phase::Removed, now);
                }
            }
            Phase::Paused | Phase::Removed => {}
        }
        self.phase != previous
    }

    /// Pointer entered the toast: cancel the pending deadline and pause.
    pub fn pointer_enter(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Entering | Phase::Running) {
            self.deadline = None;
            self.transition_to(Phase::Paused, now);
        }
    }

    /// Pointer left the toast: restart a full-duration deadline.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.phase == Phase::Paused {
            self.deadline = (!self.duration.is_zero()).then(|| now + self.duration);
            self.transition_to(Phase::Running, now);
        }
    }

    /// Manual close. Accepted in any non-terminal state.
    pub fn close(&mut self, now: Instant) {
        if !matches!(self.phase, Phase::Closing | Phase::Removed) {
            self.begin_close(now);
        }
    }

    /// External teardown: the element is already gone, so the deadline must
    /// not survive it.
    pub fn detach(&mut self) {
        self.deadline = None;
        self.phase = Phase::Removed;
    }

    /// Display opacity at `now`, following the entrance/exit transitions.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Entering => self.phase_progress(now, self.enter_transition),
            Phase::Running | Phase::Paused => 1.0,
            Phase::Closing => 1.0 - self.phase_progress(now, self.remove_delay),
            Phase::Removed => 0.0,
        }
    }

    fn phase_progress(&self, now: Instant, length: Duration) -> f32 {
        if length.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.phase_started).as_secs_f32();
        (elapsed / length.as_secs_f32()).min(1.0)
    }

    fn deadline_reached(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    fn begin_close(&mut self, now: Instant) {
        self.deadline = Some(now + self.remove_delay);
        self.transition_to(Phase::Closing, now);
    }

    fn transition_to(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_started = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{render, Kind, RenderOptions};

    fn unit_with_duration(duration_ms: u64) -> DisplayUnit {
        render(
            Kind::Info,
            "hello".into(),
            RenderOptions::default().duration(duration_ms),
        )
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn enters_then_runs() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);
        assert_eq!(controller.phase(), Phase::Entering);

        controller.tick(at(t0, 100));
        assert_eq!(controller.phase(), Phase::Entering);

        assert!(controller.tick(at(t0, 300)));
        assert_eq!(controller.phase(), Phase::Running);
    }

    #[test]
    fn removes_at_duration_plus_delay_never_earlier() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(2000), t0);

        controller.tick(at(t0, 1999));
        assert_eq!(controller.phase(), Phase::Running);

        controller.tick(at(t0, 2000));
        assert_eq!(controller.phase(), Phase::Closing);

        controller.tick(at(t0, 2499));
        assert_eq!(controller.phase(), Phase::Closing);

        controller.tick(at(t0, 2500));
        assert_eq!(controller.phase(), Phase::Removed);
    }

    #[test]
    fn resume_restarts_a_full_timer() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);

        // Pause right after attach, resume much later.
        controller.pointer_enter(at(t0, 50));
        assert_eq!(controller.phase(), Phase::Paused);
        controller.pointer_leave(at(t0, 9000));
        assert_eq!(controller.phase(), Phase::Running);

        // The original attach+5000 deadline is gone; close fires a full
        // 5000 ms after the resume, not relative to attach.
        controller.tick(at(t0, 13_999));
        assert_eq!(controller.phase(), Phase::Running);
        controller.tick(at(t0, 14_000));
        assert_eq!(controller.phase(), Phase::Closing);
    }

    #[test]
    fn pause_while_paused_never_expires() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(1000), t0);
        controller.pointer_enter(at(t0, 10));

        controller.tick(at(t0, 60_000));
        assert_eq!(controller.phase(), Phase::Paused);
    }

    #[test]
    fn manual_close_cancels_pending_deadline() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);

        controller.close(at(t0, 100));
        assert_eq!(controller.phase(), Phase::Closing);

        // Removal follows the fixed delay, not the configured duration.
        controller.tick(at(t0, 599));
        assert_eq!(controller.phase(), Phase::Closing);
        controller.tick(at(t0, 600));
        assert_eq!(controller.phase(), Phase::Removed);
    }

    #[test]
    fn close_while_paused_is_accepted() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);
        controller.pointer_enter(at(t0, 10));

        controller.close(at(t0, 20));
        assert_eq!(controller.phase(), Phase::Closing);
    }

    #[test]
    fn close_while_closing_does_not_rearm() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);
        controller.close(at(t0, 100));

        // A second close must not push the removal deadline out.
        controller.close(at(t0, 550));
        controller.tick(at(t0, 600));
        assert_eq!(controller.phase(), Phase::Removed);
    }

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(0), t0);

        controller.tick(at(t0, 300));
        assert_eq!(controller.phase(), Phase::Running);
        controller.tick(at(t0, 3_600_000));
        assert_eq!(controller.phase(), Phase::Running);

        // Manual close still works.
        controller.close(at(t0, 3_600_001));
        controller.tick(at(t0, 3_600_501));
        assert!(controller.is_removed());
    }

    #[test]
    fn zero_duration_resume_stays_disarmed() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(0), t0);
        controller.pointer_enter(at(t0, 10));
        controller.pointer_leave(at(t0, 20));

        controller.tick(at(t0, 60_000));
        assert_eq!(controller.phase(), Phase::Running);
    }

    #[test]
    fn duration_shorter_than_entrance_still_closes() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(100), t0);

        controller.tick(at(t0, 100));
        assert_eq!(controller.phase(), Phase::Closing);
        controller.tick(at(t0, 600));
        assert!(controller.is_removed());
    }

    #[test]
    fn pointer_events_are_ignored_while_closing() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(5000), t0);
        controller.close(at(t0, 100));

        controller.pointer_enter(at(t0, 200));
        assert_eq!(controller.phase(), Phase::Closing);
        controller.pointer_leave(at(t0, 300));
        assert_eq!(controller.phase(), Phase::Closing);

        controller.tick(at(t0, 600));
        assert!(controller.is_removed());
    }

    #[test]
    fn detach_cancels_deadline_and_terminates() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(1000), t0);

        controller.detach();
        assert!(controller.is_removed());

        // A later tick past every deadline must not resurrect anything.
        assert!(!controller.tick(at(t0, 10_000)));
        assert!(controller.is_removed());
    }

    #[test]
    fn opacity_follows_transitions() {
        let t0 = Instant::now();
        let mut controller = DismissController::attach(&unit_with_duration(2000), t0);

        assert_eq!(controller.opacity(t0), 0.0);
        let mid_enter = controller.opacity(at(t0, 150));
        assert!(mid_enter > 0.0 && mid_enter < 1.0);

        controller.tick(at(t0, 300));
        assert_eq!(controller.opacity(at(t0, 1000)), 1.0);

        controller.tick(at(t0, 2000));
        let mid_exit = controller.opacity(at(t0, 2250));
        assert!(mid_exit > 0.0 && mid_exit < 1.0);

        controller.tick(at(t0, 2500));
        assert_eq!(controller.opacity(at(t0, 2500)), 0.0);
    }
}
