//! Switches for the behaviours where chip8 interpreters disagree.
//!
//! The defaults describe the behaviour most programs expect, every switch
//! turns on the alternative some interpreters implement instead.

/// Runtime configuration of the machine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// Every sprite pixel wraps around the screen edges,
    /// instead of only the sprite origin wrapping and the
    /// rest being clipped.
    pub wrap_sprites: bool,
    /// `7XNN` writes the carry of the addition into `VF`.
    pub add_sets_flag: bool,
    /// `FX0A` stores the lowest pressed key into `VX` once it unblocks.
    pub capture_awaited_key: bool,
}

impl Quirks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_sprites(mut self, enabled: bool) -> Self {
        self.wrap_sprites = enabled;
        self
    }

    pub fn with_add_sets_flag(mut self, enabled: bool) -> Self {
        self.add_sets_flag = enabled;
        self
    }

    pub fn with_capture_awaited_key(mut self, enabled: bool) -> Self {
        self.capture_awaited_key = enabled;
        self
    }
}
