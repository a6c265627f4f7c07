use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::{Error, Result};

/// # Screen
/// The Chip-8 display is composed of 64x32 black/white pixels, indexed as [y][x].
///
/// Sprites are XORed onto it and wrap around both edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    pub fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    pub fn set(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_bounds(x, y)?;
        self.pixels[y][x] = true;
        Ok(())
    }

    pub fn is_set(&self, x: usize, y: usize) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(self.pixels[y][x])
    }

    /// XORs `rows` bytes of `sprite` onto the screen at (x, y), most significant bit leftmost.
    ///
    /// Returns true if any pixel was erased (set before being toggled).
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8], rows: usize) -> bool {
        let mut collision = false;
        let (x, y) = (x % DISPLAY_WIDTH, y % DISPLAY_HEIGHT);

        for (row, &byte) in sprite.iter().take(rows).enumerate() {
            let py = (y + row) % DISPLAY_HEIGHT;
            for col in 0..8usize {
                if byte & (0x80u8 >> col) == 0 {
                    continue;
                }
                let px = (x + col) % DISPLAY_WIDTH;
                let pixel = &mut self.pixels[py][px];
                collision |= *pixel;
                *pixel ^= true;
            }
        }

        collision
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            Ok(())
        } else {
            Err(Error::ScreenOutOfBounds { x, y })
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
