/// Bookkeeping for a refresh-driven loop: whether it runs, and which callback
/// handle is pending with the host.
///
/// The host owns the actual scheduling primitive. Call `arm` with the handle it
/// returns, `begin_tick` at the top of every callback, and cancel whatever
/// `stop` hands back.
#[derive(Debug)]
pub struct LoopGate<H> {
    running: bool,
    pending: Option<H>,
    ticks: u64,
}

impl<H> Default for LoopGate<H> {
    fn default() -> Self {
        Self {
            running: false,
            pending: None,
            ticks: 0,
        }
    }
}

impl<H: Copy> LoopGate<H> {
    /// Returns true when the loop was idle and the caller should schedule the
    /// first callback.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// The pending callback fired. Returns false once the loop has been stopped,
    /// in which case the callback must neither tick nor reschedule.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        if self.running {
            self.ticks += 1;
        }
        self.running
    }

    /// Stop the loop. Safe to call any number of times; returns the handle
    /// still pending with the host, if any.
    pub fn stop(&mut self) -> Option<H> {
        self.running = false;
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
