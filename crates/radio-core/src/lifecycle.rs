//! Render-loop lifecycle bookkeeping.
//!
//! The frontend runs one `requestAnimationFrame` loop while audio plays, and
//! stopping is delayed by a short fade timeout. A shared handle alone cannot
//! express "that fade belongs to an older loop", so every loop start is
//! stamped with a monotonically incrementing generation and the delayed stop
//! action only takes effect if its captured generation is still the one
//! allowed to run. A rapid stop -> start -> stop sequence therefore never
//! cancels the wrong loop and never leaves two loops running.
//!
//! This type is pure state; the wasm side consults it before scheduling or
//! cancelling the actual browser callbacks, which keeps the race logic
//! testable on the host.

/// Loop instance identifier. Generation 0 is "no loop has ever started".
pub type Generation = u64;

#[derive(Debug, Default)]
pub struct RenderLoop {
    generation: Generation,
    live: Option<Generation>,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the loop: invalidates every older generation and
    /// returns the new one. The caller must cancel any previously scheduled
    /// frame callback before scheduling the first frame of this generation.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.live = Some(self.generation);
        self.generation
    }

    /// Most recently started generation, live or not. A delayed stop action
    /// captures this at schedule time.
    pub fn current(&self) -> Generation {
        self.generation
    }

    /// Whether a frame callback stamped with `gen` may paint and reschedule.
    pub fn is_live(&self, gen: Generation) -> bool {
        self.live == Some(gen)
    }

    /// A fade timeout scheduled against `gen` has fired. Returns `true` when
    /// the cancellation and idle repaint should actually happen; a stale or
    /// repeated fade is a no-op.
    pub fn fade_fired(&mut self, gen: Generation) -> bool {
        if gen == self.generation && self.live.is_some() {
            self.live = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_monotonic() {
        let mut rl = RenderLoop::new();
        let a = rl.begin();
        let b = rl.begin();
        assert!(b > a);
        assert!(!rl.is_live(a));
        assert!(rl.is_live(b));
    }

    #[test]
    fn stale_fade_is_noop() {
        let mut rl = RenderLoop::new();
        let g1 = rl.begin();
        // stop scheduled against g1, but a restart supersedes it
        let g2 = rl.begin();
        assert!(!rl.fade_fired(g1));
        assert!(rl.is_live(g2), "superseding loop must keep running");
    }

    #[test]
    fn matching_fade_cancels_exactly_once() {
        let mut rl = RenderLoop::new();
        let g1 = rl.begin();
        assert!(rl.fade_fired(g1));
        assert!(!rl.is_live(g1));
        assert!(!rl.fade_fired(g1), "second delivery must be a no-op");
    }
}
