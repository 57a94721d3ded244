// Copyright 2025 the Chronicle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot redraw coalescing.

/// One pending redraw request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    /// `true` while the request came from an in-flight gesture; the
    /// renderer applies interaction-grade detail reduction.
    pub interacting: bool,
}

/// Coalesces transform and dataset changes into at most one pending
/// redraw.
///
/// The scheduler is a two-state machine, idle or scheduled. Scheduling
/// while a request is pending replaces it — the newest request wins, and
/// no backlog can build up regardless of input rate. The host drains the
/// slot from its frame callback via [`FrameScheduler::take`].
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    pending: Option<FrameRequest>,
}

impl FrameScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Requests a redraw, superseding any pending request.
    pub fn schedule(&mut self, interacting: bool) {
        self.pending = Some(FrameRequest { interacting });
    }

    /// Takes the pending request, returning the scheduler to idle.
    pub fn take(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    /// Cancels any pending request without running it.
    ///
    /// Teardown calls this synchronously so no frame outlives its
    /// instance.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a request is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let mut scheduler = FrameScheduler::new();
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn newest_request_wins() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule(true);
        scheduler.schedule(true);
        scheduler.schedule(false);

        assert_eq!(scheduler.take(), Some(FrameRequest { interacting: false }));
        // The slot held exactly one request.
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn take_returns_to_idle() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule(true);
        assert!(scheduler.has_pending());
        let _ = scheduler.take();
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn cancel_drops_the_pending_request() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule(false);
        scheduler.cancel();
        assert_eq!(scheduler.take(), None);
    }
}
