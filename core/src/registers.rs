/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register; add, subtract, shift and draw overwrite it
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
/// - 2 8-bit timers (delay & sound) that count down to 0 at 60Hz
///
/// The stack pointer lives alongside the slots it indexes, see `Stack`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts both timers down by one, stopping at 0
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_timers_decrements() {
        let mut registers = Registers::new();
        registers.delay_timer = 0x3;
        registers.sound_timer = 0x1;
        registers.tick_timers();
        assert_eq!(registers.delay_timer, 0x2);
        assert_eq!(registers.sound_timer, 0x0);
    }

    #[test]
    fn test_tick_timers_clamps_at_zero() {
        let mut registers = Registers::new();
        registers.tick_timers();
        assert_eq!(registers.delay_timer, 0x0);
        assert_eq!(registers.sound_timer, 0x0);
    }
}
