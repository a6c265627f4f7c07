use log::{debug, log_enabled, trace, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{KEY_COUNT, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::keyboard::Keyboard;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::screen::Screen;
use crate::stack::Stack;

/// Whether the CPU can fetch its next instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecState {
    Running,
    /// Fx0A is waiting for a key press to land in the given register
    WaitingForKey(u8),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns one emulation session:
///  - `memory`, `registers`, `stack`, `screen`
///  - `keyboard` with the host key type `K` it was configured with
///  - the random source used by RND
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - stepping the CPU or executing a single opcode
/// - advancing its timers
/// - inspecting its screen for rendering by some display
pub struct Chip8<K> {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    pub(crate) stack: Stack,
    pub(crate) keyboard: Keyboard<K>,
    pub(crate) screen: Screen,
    pub(crate) rng: StdRng,
    pub(crate) exec_state: ExecState,
    pub(crate) draw_flag: bool,
}

impl<K: Copy + PartialEq> Chip8<K> {
    pub fn new(config: Config<K>) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A session whose RND sequence is reproducible
    pub fn with_seed(config: Config<K>, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config<K>, rng: StdRng) -> Self {
        Chip8 {
            memory: Memory::with_font(&config.font),
            registers: Registers::new(),
            stack: Stack::new(),
            keyboard: Keyboard::new(config.keymap),
            screen: Screen::new(),
            rng,
            exec_state: ExecState::Running,
            draw_flag: false,
        }
    }

    /// Copies a ROM to 0x200 and points the program counter at it.
    ///
    /// # Arguments
    /// * `rom` the program image; it must fit between 0x200 and the end of memory
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        let start = PROGRAM_START as usize;
        let max = self.memory.size() - start;
        if rom.len() > max {
            return Err(Error::LoadTooLarge {
                size: rom.len(),
                max,
            });
        }

        self.memory.write(start, rom)?;
        self.registers.pc = PROGRAM_START;
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), start);
        Ok(())
    }

    /// Advances the CPU by a single cycle
    /// - does nothing while awaiting a keypress
    /// - fetches the opcode at the pc, moves the pc past it, and executes it
    pub fn step(&mut self) -> Result<()> {
        if self.is_waiting_for_key() {
            return Ok(());
        }

        let pc = self.registers.pc;
        let op = self.memory.get_word(pc as usize)?;
        self.registers.pc = pc.wrapping_add(2);
        self.execute(op)
    }

    /// Decodes and applies a single opcode; the pc must already point past it.
    pub fn execute(&mut self, op: u16) -> Result<()> {
        let instruction = Instruction::decode(op)?;
        if log_enabled!(Level::Trace) {
            trace!("{}", self.describe(op, &instruction));
        }
        self.apply(instruction)
    }

    /// One trace line: the address the opcode was fetched from, the opcode, its mnemonic,
    /// and the registers it will see
    fn describe(&self, op: u16, instruction: &Instruction) -> String {
        format!(
            "{:04X}: {:04X} {:<16} i={:04X} v={:02X?}",
            self.registers.pc.wrapping_sub(2),
            op,
            instruction.to_string(),
            self.registers.i,
            self.registers.v
        )
    }

    /// Counts the delay and sound timers down; the driver calls this at 60Hz
    pub fn tick_timers(&mut self) {
        self.registers.tick_timers();
    }

    /// Presses the virtual key bound to a host key, returning it if there is one
    pub fn press(&mut self, physical: K) -> Result<Option<u8>> {
        match self.keyboard.map_physical_to_virtual(physical) {
            Some(key) => self.key_down(key).map(|_| Some(key)),
            None => Ok(None),
        }
    }

    /// Releases the virtual key bound to a host key, returning it if there is one
    pub fn release(&mut self, physical: K) -> Result<Option<u8>> {
        match self.keyboard.map_physical_to_virtual(physical) {
            Some(key) => self.key_up(key).map(|_| Some(key)),
            None => Ok(None),
        }
    }

    /// Set the pressed status of a virtual key
    /// - if Fx0A is waiting and the key was up, the key is written to its register and the CPU resumes
    pub fn key_down(&mut self, key: u8) -> Result<()> {
        let was_down = self.keyboard.is_down(key)?;
        self.keyboard.key_down(key)?;
        if was_down {
            return Ok(());
        }
        if let ExecState::WaitingForKey(x) = self.exec_state {
            debug!("key {:X} resumes execution, stored in V{:X}", key, x);
            self.registers.v[x as usize] = key;
            self.exec_state = ExecState::Running;
        }
        Ok(())
    }

    /// Unset the pressed status of a virtual key
    pub fn key_up(&mut self, key: u8) -> Result<()> {
        self.keyboard.key_up(key)
    }

    pub fn set_mapping(&mut self, mapping: [K; KEY_COUNT]) {
        self.keyboard.set_mapping(mapping);
    }

    /// Returns true if the screen changed since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.draw_flag, false)
    }

    /// The driver should play a tone while this holds
    pub fn sound_active(&self) -> bool {
        self.registers.sound_timer > 0
    }

    pub fn is_waiting_for_key(&self) -> bool {
        matches!(self.exec_state, ExecState::WaitingForKey(_))
    }

    pub fn exec_state(&self) -> ExecState {
        self.exec_state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn keyboard(&self) -> &Keyboard<K> {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FONT, MEMORY_SIZE};

    fn chip8() -> Chip8<char> {
        let keymap = [
            'x', '1', '2', '3', 'q', 'w', 'e', 'a', 's', 'd', 'z', 'c', '4', 'r', 'f', 'v',
        ];
        Chip8::with_seed(Config::new(keymap), 0x8)
    }

    #[test]
    fn test_starts_zeroed_with_font() {
        let chip8 = chip8();
        assert_eq!(chip8.memory.read(0x0, 80), Ok(&FONT[..]));
        assert_eq!(chip8.memory.get(80), Ok(0x0));
        assert_eq!(chip8.registers, Registers::new());
        assert_eq!(chip8.stack.sp(), 0);
        assert_eq!(chip8.exec_state, ExecState::Running);
    }

    #[test]
    fn test_loads_rom() {
        let mut chip8 = chip8();
        chip8.load(&[0x00, 0xE0, 0x12, 0x00]).unwrap();
        assert_eq!(chip8.registers.pc, 0x200);
        assert_eq!(chip8.memory.get_word(0x202), Ok(0x1200));
    }

    #[test]
    fn test_loads_rom_that_exactly_fits() {
        let mut chip8 = chip8();
        let rom = vec![0xAB; MEMORY_SIZE - 0x200];
        assert_eq!(chip8.load(&rom), Ok(()));
        assert_eq!(chip8.memory.get(MEMORY_SIZE - 1), Ok(0xAB));
    }

    #[test]
    fn test_refuses_rom_too_large() {
        let mut chip8 = chip8();
        let rom = vec![0xAB; MEMORY_SIZE - 0x200 + 1];
        assert_eq!(
            chip8.load(&rom),
            Err(Error::LoadTooLarge {
                size: MEMORY_SIZE - 0x200 + 1,
                max: MEMORY_SIZE - 0x200
            })
        );
        assert_eq!(chip8.memory.get(0x200), Ok(0x0));
        assert_eq!(chip8.registers.pc, 0x0);
    }

    #[test]
    fn test_step_fetches_and_advances() {
        let mut chip8 = chip8();
        chip8.load(&[0x61, 0x22]).unwrap();
        chip8.step().unwrap();
        assert_eq!(chip8.registers.pc, 0x202);
        assert_eq!(chip8.registers.v[0x1], 0x22);
    }

    #[test]
    fn test_step_fails_past_end_of_memory() {
        let mut chip8 = chip8();
        chip8.registers.pc = (MEMORY_SIZE - 1) as u16;
        assert_eq!(
            chip8.step(),
            Err(Error::OutOfBounds {
                address: MEMORY_SIZE
            })
        );
    }

    #[test]
    fn test_doesnt_step_while_waiting_for_key() {
        let mut chip8 = chip8();
        chip8.load(&[0x61, 0x22]).unwrap();
        chip8.exec_state = ExecState::WaitingForKey(0x1);
        chip8.step().unwrap();
        assert_eq!(chip8.registers.pc, 0x200);
        assert_eq!(chip8.registers.v[0x1], 0x0);
    }

    #[test]
    fn test_key_down_resumes_waiting_cpu() {
        let mut chip8 = chip8();
        chip8.exec_state = ExecState::WaitingForKey(0x1);
        chip8.key_down(0xE).unwrap();
        assert_eq!(chip8.exec_state, ExecState::Running);
        assert_eq!(chip8.registers.v[0x1], 0xE);
    }

    #[test]
    fn test_held_key_doesnt_resume_waiting_cpu() {
        let mut chip8 = chip8();
        chip8.key_down(0x5).unwrap();
        chip8.execute(0xF30A).unwrap();

        chip8.key_down(0x5).unwrap();
        assert_eq!(chip8.exec_state, ExecState::WaitingForKey(0x3));
        assert_eq!(chip8.registers.v[0x3], 0x0);

        chip8.key_up(0x5).unwrap();
        chip8.key_down(0x5).unwrap();
        assert_eq!(chip8.exec_state, ExecState::Running);
        assert_eq!(chip8.registers.v[0x3], 0x5);
    }

    #[test]
    fn test_describe_shows_fetch_address() {
        let mut chip8 = chip8();
        chip8.load(&[0x61, 0x22]).unwrap();
        chip8.registers.pc = 0x202;
        let instruction = Instruction::decode(0x6122).unwrap();
        let line = chip8.describe(0x6122, &instruction);
        assert!(line.starts_with("0200: 6122 LD V1, 0x22"), "{}", line);
    }

    #[test]
    fn test_press_maps_host_keys() {
        let mut chip8 = chip8();
        assert_eq!(chip8.press('f'), Ok(Some(0xE)));
        assert_eq!(chip8.keyboard.is_down(0xE), Ok(true));
        assert_eq!(chip8.release('f'), Ok(Some(0xE)));
        assert_eq!(chip8.keyboard.is_down(0xE), Ok(false));
        assert_eq!(chip8.press('p'), Ok(None));
    }

    #[test]
    fn test_timers_keep_ticking_while_waiting() {
        let mut chip8 = chip8();
        chip8.registers.delay_timer = 0x2;
        chip8.registers.sound_timer = 0x1;
        chip8.exec_state = ExecState::WaitingForKey(0x0);
        assert!(chip8.sound_active());
        chip8.tick_timers();
        assert_eq!(chip8.registers.delay_timer, 0x1);
        assert!(!chip8.sound_active());
    }

    #[test]
    fn test_take_redraw_clears_flag() {
        let mut chip8 = chip8();
        assert!(!chip8.take_redraw());
        chip8.execute(0x00E0).unwrap();
        assert!(chip8.take_redraw());
        assert!(!chip8.take_redraw());
    }
}
