use crate::constants::KEY_COUNT;
use crate::error::{Error, Result};

/// # Keyboard
/// Chip-8 input is generated with a hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Tracks the pressed status of the 16 virtual keys 0x0..0xF, and the host
/// key `K` bound to each of them.
#[derive(Clone, Debug)]
pub struct Keyboard<K> {
    pressed: [bool; KEY_COUNT],
    mapping: [K; KEY_COUNT],
}

impl<K: Copy + PartialEq> Keyboard<K> {
    pub fn new(mapping: [K; KEY_COUNT]) -> Self {
        Keyboard {
            pressed: [false; KEY_COUNT],
            mapping,
        }
    }

    /// Replaces the host key bound to each virtual key
    pub fn set_mapping(&mut self, mapping: [K; KEY_COUNT]) {
        self.mapping = mapping;
    }

    /// Finds the virtual key bound to a host key.
    /// If a host key is bound more than once the lowest virtual key wins.
    pub fn map_physical_to_virtual(&self, physical: K) -> Option<u8> {
        self.mapping
            .iter()
            .position(|&key| key == physical)
            .map(|index| index as u8)
    }

    pub fn key_down(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = true;
        Ok(())
    }

    pub fn key_up(&mut self, key: u8) -> Result<()> {
        *self.slot(key)? = false;
        Ok(())
    }

    pub fn is_down(&self, key: u8) -> Result<bool> {
        self.pressed
            .get(key as usize)
            .copied()
            .ok_or(Error::InvalidKey(key))
    }

    fn slot(&mut self, key: u8) -> Result<&mut bool> {
        self.pressed
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey(key))
    }
}
