/*
 * Frame Scheduler Module
 *
 * The frame loop never waits on real frame timing directly. It asks a
 * FrameScheduler for the next frame and cancels it on teardown; the host
 * decides when a requested frame is due and hands the handle back.
 */

/// Identifies one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Request that a frame be delivered on the next tick.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A single-slot scheduler: at most one frame is outstanding at a time.
///
/// The host polls [`FrameSlot::take_due`] once per display refresh; tests call
/// it directly to drive ticks by hand.
#[derive(Debug, Default)]
pub struct FrameSlot {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the outstanding frame, if any. The slot is empty afterwards.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl FrameScheduler for FrameSlot {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let mut slot = FrameSlot::new();
        let a = slot.request_frame();
        let b = slot.request_frame();
        assert_ne!(a, b);
        assert_eq!(slot.take_due(), Some(b));
        assert_eq!(slot.take_due(), None);
    }

    #[test]
    fn cancel_only_removes_matching_handle() {
        let mut slot = FrameSlot::new();
        let old = slot.request_frame();
        let current = slot.request_frame();

        slot.cancel_frame(old);
        assert_eq!(slot.pending(), Some(current));

        slot.cancel_frame(current);
        assert_eq!(slot.pending(), None);
    }
}
