//! Display-refresh scheduling.

use std::collections::BTreeSet;

/// Handle for one pending animation frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One-shot frame requests, consumed once per display tick.
///
/// A callback that wants to keep animating requests a new frame while it
/// runs, so a cancelled request simply stops the loop.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: BTreeSet<FrameRequest>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a callback on the next display tick.
    pub fn request(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.insert(request);
        request
    }

    /// Cancel a pending request. Returns `false` if it already ran or was
    /// cancelled.
    pub fn cancel(&mut self, request: FrameRequest) -> bool {
        self.pending.remove(&request)
    }

    pub fn is_pending(&self, request: FrameRequest) -> bool {
        self.pending.contains(&request)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take every request due on this tick, oldest first.
    ///
    /// Requests made while handling these land on the next tick.
    pub fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_unique_and_ordered() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert_ne!(a, b);
        assert!(a.id() < b.id());
        assert_eq!(frames.take_due(), vec![a, b]);
    }

    #[test]
    fn take_due_consumes_requests() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        assert!(frames.is_pending(a));
        assert_eq!(frames.take_due(), vec![a]);
        assert!(!frames.is_pending(a));
        assert!(frames.take_due().is_empty());
    }

    #[test]
    fn cancel_removes_pending_request() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert!(frames.cancel(a));
        assert!(!frames.cancel(a));
        assert_eq!(frames.pending_count(), 1);
        assert_eq!(frames.take_due(), vec![b]);
    }

    #[test]
    fn ids_keep_increasing_after_a_tick() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        frames.take_due();
        let b = frames.request();
        assert!(b > a);
    }
}
