//! Edge-latched activation input
//!
//! The host flips `held` from pointer/key events. A jump latches the signal so
//! a held button cannot jump again until it is released.

/// Level-triggered activate button with a release latch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSignal {
    held: bool,
    wait_for_release: bool,
}

impl InputSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Button went down
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Button went up; clears the latch
    pub fn release(&mut self) {
        self.held = false;
        self.wait_for_release = false;
    }

    #[inline]
    pub fn held(&self) -> bool {
        self.held
    }

    /// Held and not yet used by a jump
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.held && !self.wait_for_release
    }

    /// Block further activations until the next release
    pub fn latch(&mut self) {
        self.wait_for_release = true;
    }

    /// Returns true once per press, latching the signal
    pub fn consume_edge(&mut self) -> bool {
        if self.is_fresh() {
            self.latch();
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
    fn test_consume_edge_once_per_press() {
        let mut input = InputSignal::new();
        assert!(!input.consume_edge());

        input.press();
        assert!(input.consume_edge());
        assert!(!input.consume_edge());
        assert!(input.held());

        input.release();
        input.press();
        assert!(input.consume_edge());
    }

    #[test]
    fn test_latch_without_press() {
        let mut input = InputSignal::new();
        input.latch();
        input.press();
        assert!(!input.is_fresh());
        input.release();
        input.press();
        assert!(input.is_fresh());
    }
}
