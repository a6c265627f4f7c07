use thiserror::Error;

/// Faults raised by the virtual machine.
///
/// None of these are retryable; they mean either a malformed ROM or a driver bug.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    /// The display's counterpart to `OutOfBounds`, reported with pixel coordinates
    /// instead of an address
    #[error("pixel ({x}, {y}) is outside the display")]
    ScreenOutOfBounds { x: usize, y: usize },

    #[error("stack overflow: more than 16 nested calls")]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    LoadTooLarge { size: usize, max: usize },

    #[error("{0:#04X} is not a key on the hex keypad")]
    InvalidKey(u8),

    #[error("unknown opcode {0:#06X}")]
    UnknownOpcode(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
