use log::debug;
use rand::Rng;

use crate::chip8::{Chip8, ExecState};
use crate::constants::GLYPH_HEIGHT;
use crate::error::Result;
use crate::instruction::Instruction;

const VF: usize = 0xF;

/// Vx + Vy; flag = carry
fn add(a: u8, b: u8) -> (u8, bool) {
    a.overflowing_add(b)
}

/// Vx - Vy; flag = Vx > Vy
fn sub(a: u8, b: u8) -> (u8, bool) {
    (a.wrapping_sub(b), a > b)
}

/// Vx / 2; flag = the bit shifted out
fn shr(a: u8) -> (u8, bool) {
    (a >> 1, a & 0x1 == 0x1)
}

/// Vx * 2; flag = the bit shifted out
fn shl(a: u8) -> (u8, bool) {
    (a << 1, a & 0x80 != 0)
}

/// Hundreds, tens and units of a byte
fn bcd(a: u8) -> [u8; 3] {
    [a / 100, a / 10 % 10, a % 10]
}

impl<K: Copy + PartialEq> Chip8<K> {
    /// Applies a decoded instruction to the session.
    ///
    /// Every bounds check an instruction needs happens before its first write,
    /// so a failed instruction leaves the session as it found it.
    pub(crate) fn apply(&mut self, instruction: Instruction) -> Result<()> {
        use Instruction::*;

        match instruction {
            Clear => {
                self.screen.clear();
                self.draw_flag = true;
            }
            Return => self.registers.pc = self.stack.pop()?,
            Jump { nnn } => self.registers.pc = nnn,
            Call { nnn } => {
                self.stack.push(self.registers.pc)?;
                self.registers.pc = nnn;
            }
            SkipEqByte { x, kk } => self.skip_if(self.v(x) == kk),
            SkipNeByte { x, kk } => self.skip_if(self.v(x) != kk),
            SkipEqReg { x, y } => self.skip_if(self.v(x) == self.v(y)),
            SkipNeReg { x, y } => self.skip_if(self.v(x) != self.v(y)),
            LoadByte { x, kk } => self.set_v(x, kk),
            AddByte { x, kk } => self.set_v(x, self.v(x).wrapping_add(kk)),
            Move { x, y } => self.set_v(x, self.v(y)),
            Or { x, y } => self.set_v(x, self.v(x) | self.v(y)),
            And { x, y } => self.set_v(x, self.v(x) & self.v(y)),
            Xor { x, y } => self.set_v(x, self.v(x) ^ self.v(y)),
            AddReg { x, y } => self.set_with_flag(x, add(self.v(x), self.v(y))),
            Sub { x, y } => self.set_with_flag(x, sub(self.v(x), self.v(y))),
            SubN { x, y } => self.set_with_flag(x, sub(self.v(y), self.v(x))),
            ShiftRight { x } => self.set_with_flag(x, shr(self.v(x))),
            ShiftLeft { x } => self.set_with_flag(x, shl(self.v(x))),
            LoadI { nnn } => self.registers.i = nnn,
            JumpV0 { nnn } => self.registers.pc = nnn + u16::from(self.v(0x0)),
            Random { x, kk } => {
                let byte: u8 = self.rng.gen();
                self.set_v(x, byte & kk);
            }
            Draw { x, y, n } => self.draw(x, y, n)?,
            SkipPressed { x } => {
                let down = self.keyboard.is_down(self.v(x))?;
                self.skip_if(down);
            }
            SkipNotPressed { x } => {
                let down = self.keyboard.is_down(self.v(x))?;
                self.skip_if(!down);
            }
            LoadDelay { x } => self.set_v(x, self.registers.delay_timer),
            WaitKey { x } => {
                debug!("waiting for a key press to store in V{:X}", x);
                self.exec_state = ExecState::WaitingForKey(x);
            }
            SetDelay { x } => self.registers.delay_timer = self.v(x),
            SetSound { x } => self.registers.sound_timer = self.v(x),
            AddI { x } => {
                self.registers.i = self.registers.i.wrapping_add(u16::from(self.v(x)));
            }
            LoadGlyph { x } => self.registers.i = u16::from(self.v(x)) * GLYPH_HEIGHT,
            Bcd { x } => {
                let (i, digits) = (self.i(), bcd(self.v(x)));
                self.memory.write(i, &digits)?;
            }
            Store { x } => {
                let (i, x) = (self.i(), x as usize);
                self.memory.write(i, &self.registers.v[..=x])?;
            }
            Read { x } => {
                let (i, x) = (self.i(), x as usize);
                let bytes = self.memory.read(i, x + 1)?;
                self.registers.v[..=x].copy_from_slice(bytes);
            }
        }
        Ok(())
    }

    /// draw_sprite(x=Vx y=Vy size=n)
    /// XORs the sprite at memory I..I+n onto the screen, VF = collision
    fn draw(&mut self, x: u8, y: u8, n: u8) -> Result<()> {
        let (x, y, rows) = (self.v(x) as usize, self.v(y) as usize, n as usize);
        let i = self.i();
        let sprite = self.memory.read(i, rows)?;
        let collision = self.screen.draw_sprite(x, y, sprite, rows);
        self.registers.v[VF] = collision as u8;
        self.draw_flag = true;
        Ok(())
    }

    fn v(&self, x: u8) -> u8 {
        self.registers.v[x as usize]
    }

    fn set_v(&mut self, x: u8, value: u8) {
        self.registers.v[x as usize] = value;
    }

    fn i(&self) -> usize {
        self.registers.i as usize
    }

    /// VF is written before Vx, so when x is F the result wins
    fn set_with_flag(&mut self, x: u8, (value, flag): (u8, bool)) {
        self.registers.v[VF] = flag as u8;
        self.set_v(x, value);
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.registers.pc = self.registers.pc.wrapping_add(2);
        }
    }
}
