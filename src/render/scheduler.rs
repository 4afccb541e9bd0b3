//! Render request coalescing.
//!
//! Every mutation in the engine calls [`RenderScheduler::request`]. Only the
//! first request after a frame is drawn actually asks the host for a display
//! refresh; the rest collapse into it. The pending flag is cleared right
//! before the frame draws, so anything requested while drawing lands in the
//! next frame instead of being lost.
//!
//! The engine is single-threaded, so the shared state is an `Rc` of `Cell`s
//! handed to each manager that needs to request frames.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

type FrameRequester = Box<dyn Fn()>;

#[derive(Default)]
struct SchedulerState {
    pending: Cell<bool>,
    scheduled_frames: Cell<u64>,
    frame_requester: RefCell<Option<FrameRequester>>,
}

/// Cloneable handle to the diagram's single render-pending flag.
#[derive(Clone, Default)]
pub struct RenderScheduler {
    inner: Rc<SchedulerState>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook called once per scheduled frame, e.g. `window.request_redraw()`.
    pub fn set_frame_requester(&self, requester: impl Fn() + 'static) {
        *self.inner.frame_requester.borrow_mut() = Some(Box::new(requester));
    }

    /// Ask for a redraw. Returns `false` when a frame was already pending.
    pub fn request(&self) -> bool {
        if self.inner.pending.get() {
            return false;
        }
        self.inner.pending.set(true);
        self.inner
            .scheduled_frames
            .set(self.inner.scheduled_frames.get() + 1);
        trace!(frames = self.inner.scheduled_frames.get(), "Frame scheduled");

        if let Some(requester) = self.inner.frame_requester.borrow().as_ref() {
            requester();
        }
        true
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Number of frames scheduled since creation.
    pub fn scheduled_frames(&self) -> u64 {
        self.inner.scheduled_frames.get()
    }

    /// Clear the pending flag at the start of a frame. Returns whether a frame
    /// was pending.
    pub(crate) fn begin_frame(&self) -> bool {
        self.inner.pending.replace(false)
    }
}

impl fmt::Debug for RenderScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScheduler")
            .field("pending", &self.inner.pending.get())
            .field("scheduled_frames", &self.inner.scheduled_frames.get())
            .finish()
    }
}
