use crate::definitions::{display, keyboard};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all from the pixels, one slice entry per row
    fn display(&mut self, pixels: &[[bool; display::WIDTH]]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// Returns the current state of all the keys
    fn get_keyboard(&self) -> [bool; keyboard::SIZE];
}

/// Represents the internal keyboard of the chip.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press.
///
/// The machine only ever reads it, the driver writes it between cycles.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Flips the given key, keys outside of the keypad are ignored.
    pub fn toggle_key(&mut self, key: usize) {
        match self.keys.get_mut(key) {
            Some(state) => *state = !*state,
            None => log::warn!("Ignoring toggle of the unknown key {:#X}.", key),
        }
    }

    /// Sets the given key, keys outside of the keypad are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = to,
            None => log::warn!("Ignoring the unknown key {:#X}.", key),
        }
    }

    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keys.copy_from_slice(keys);
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }

    /// Returns the state of the given key, `None` if there is no such key.
    pub fn is_pressed(&self, key: usize) -> Option<bool> {
        self.keys.get(key).copied()
    }

    /// The lowest key that is currently pressed.
    pub fn first_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|&key| key)
    }
}
