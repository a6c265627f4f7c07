use crate::constants::MEMORY_SIZE;
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte-addressed memory.
///
/// - `0x000..0x200` is reserved for the interpreter; the font lives at `0x000`
/// - `0x200..` is where ROMs are loaded
///
/// Every access is bounds-checked; multi-byte writes check the whole range
/// before touching anything so a failed write leaves memory unchanged.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: [0; MEMORY_SIZE],
        }
    }

    /// Memory with `font` copied to the start of the interpreter area
    pub fn with_font(font: &[u8; 80]) -> Self {
        let mut memory = Self::new();
        memory.bytes[..font.len()].copy_from_slice(font);
        memory
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn get(&self, addr: usize) -> Result<u8> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Error::OutOfBounds { address: addr })
    }

    pub fn set(&mut self, addr: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(addr)
            .ok_or(Error::OutOfBounds { address: addr })?;
        *byte = value;
        Ok(())
    }

    /// Reads a big-endian word; opcodes are stored as two consecutive bytes.
    pub fn get_word(&self, addr: usize) -> Result<u16> {
        let left = u16::from(self.get(addr)?);
        let right = u16::from(self.get(addr + 1)?);
        Ok(left << 8 | right)
    }

    /// Borrows `len` bytes starting at `addr`
    pub fn read(&self, addr: usize, len: usize) -> Result<&[u8]> {
        self.check_range(addr, len)?;
        Ok(&self.bytes[addr..addr + len])
    }

    /// Copies `data` into memory starting at `addr`
    pub fn write(&mut self, addr: usize, data: &[u8]) -> Result<()> {
        self.check_range(addr, data.len())?;
        self.bytes[addr..addr + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn check_range(&self, addr: usize, len: usize) -> Result<()> {
        match addr.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            // report the first address that doesn't exist
            _ => Err(Error::OutOfBounds {
                address: addr.max(self.bytes.len()),
            }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_every_address() {
        let mut memory = Memory::new();
        for addr in 0..MEMORY_SIZE {
            let value = (addr % 251) as u8;
            memory.set(addr, value).unwrap();
            assert_eq!(memory.get(addr), Ok(value));
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let memory = Memory::new();
        assert_eq!(
            memory.get(MEMORY_SIZE),
            Err(Error::OutOfBounds {
                address: MEMORY_SIZE
            })
        );
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut memory = Memory::new();
        assert!(memory.set(0x1000, 0xFF).is_err());
    }

    #[test]
    fn test_get_word_is_big_endian() {
        let mut memory = Memory::new();
        memory.write(0x200, &[0xAA, 0xBB]).unwrap();
        assert_eq!(memory.get_word(0x200), Ok(0xAABB));
    }

    #[test]
    fn test_get_word_last_byte_out_of_bounds() {
        let memory = Memory::new();
        assert_eq!(
            memory.get_word(MEMORY_SIZE - 1),
            Err(Error::OutOfBounds {
                address: MEMORY_SIZE
            })
        );
    }

    #[test]
    fn test_read_range() {
        let mut memory = Memory::new();
        memory.write(0x300, &[0x1, 0x2, 0x3]).unwrap();
        assert_eq!(memory.read(0x300, 3), Ok(&[0x1, 0x2, 0x3][..]));
    }

    #[test]
    fn test_failed_write_changes_nothing() {
        let mut memory = Memory::new();
        assert!(memory.write(MEMORY_SIZE - 2, &[0x1, 0x2, 0x3]).is_err());
        assert_eq!(memory.read(MEMORY_SIZE - 2, 2), Ok(&[0x0, 0x0][..]));
    }

    #[test]
    fn test_read_to_end_is_allowed() {
        let memory = Memory::new();
        assert_eq!(memory.read(MEMORY_SIZE - 4, 4).map(|s| s.len()), Ok(4));
        assert!(memory.read(MEMORY_SIZE - 4, 5).is_err());
    }
}
