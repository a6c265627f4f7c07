pub use chip8::{Chip8, ExecState};
pub use config::Config;
pub use constants::{CLOCK_SPEED, TIMER_HZ};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use keyboard::Keyboard;
pub use memory::Memory;
pub use registers::Registers;
pub use screen::Screen;
pub use stack::Stack;

mod chip8;
mod config;
pub mod constants;
mod error;
mod instruction;
mod keyboard;
mod memory;
mod opcode;
mod operations;
mod registers;
mod screen;
mod stack;
