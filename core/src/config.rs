use crate::constants::{FONT, KEY_COUNT};

/// # Config
/// Immutable data a session is constructed from.
///
/// - `font` the glyphs copied to the start of memory
/// - `keymap` the host key for each virtual key, indexed 0x0..0xF
#[derive(Clone, Debug)]
pub struct Config<K> {
    pub font: [u8; 80],
    pub keymap: [K; KEY_COUNT],
}

impl<K> Config<K> {
    /// A config with the built-in font
    pub fn new(keymap: [K; KEY_COUNT]) -> Self {
        Config { font: FONT, keymap }
    }
}
