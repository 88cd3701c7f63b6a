use num_traits::Unsigned;

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number it was given.
///
/// The machine has no clock of its own, so the timer
/// is ticked once per executed instruction and the
/// driver decides how fast that happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer<T = u8> {
    /// will store the value of the timer
    value: T,
}

impl<T> Default for Timer<T>
where
    T: Unsigned + Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T> Timer<T>
where
    T: Unsigned + Copy + PartialOrd,
{
    /// Will create a new timer with the given value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> T {
        self.value
    }

    /// Returns true as long as the timer did not reach zero.
    pub fn is_active(&self) -> bool {
        self.value > T::zero()
    }

    /// Decrements the timer by one, it will never go below zero.
    pub fn tick(&mut self) {
        if self.is_active() {
            self.value = self.value - T::one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_down_to_zero() {
        let mut timer: Timer = Timer::new(3);
        assert!(timer.is_active());

        for expected in (0..3).rev() {
            timer.tick();
            assert_eq!(timer.get_value(), expected);
        }
        assert!(!timer.is_active());

        // floor at zero
        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_timer_set_value() {
        let mut timer: Timer = Timer::default();
        assert_eq!(timer.get_value(), 0);

        timer.set_value(u8::MAX);
        timer.tick();
        assert_eq!(timer.get_value(), u8::MAX - 1);
    }

    #[test]
    fn test_timer_wider_type() {
        let mut timer = Timer::new(0x100u16);
        timer.tick();
        assert_eq!(timer.get_value(), 0xFF);
    }
}
