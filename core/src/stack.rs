use crate::constants::STACK_DEPTH;
use crate::error::{Error, Result};

/// # Stack
/// Return addresses for up to 16 nested subroutine calls.
///
/// `sp` is the index of the next free slot, so it ranges over `0..=STACK_DEPTH`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    slots: [u16; STACK_DEPTH],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        let slot = self.slots.get_mut(self.sp).ok_or(Error::StackOverflow)?;
        *slot = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        let sp = self.sp.checked_sub(1).ok_or(Error::StackUnderflow)?;
        self.sp = sp;
        Ok(self.slots[sp])
    }

    /// Current stack pointer
    pub fn sp(&self) -> usize {
        self.sp
    }
}
