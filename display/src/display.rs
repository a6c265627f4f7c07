use sdl2::pixels::PixelFormatEnum;

use chip8_core::Screen;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Each frame is read cell by cell from the core `Screen` and streamed into an RGB24 texture
/// that SDL scales up to the window.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `screen` the screen whose dimensions the window takes
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, screen: &Screen, scale: u32) -> Result<Self, String> {
        let (width, height) = (screen.width(), screen.height());
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window("Chip-8", width as u32 * scale, height as u32 * scale)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width,
            height,
        })
    }

    /// Formats a Chip-8 Screen as an SDL2 RGB24 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    /// Each lit pixel becomes three 255s, each unlit one three 0s.
    fn screen_to_sdl_texture(screen: &Screen) -> Result<Vec<u8>, String> {
        let mut texture = Vec::with_capacity(screen.width() * screen.height() * 3);
        for y in 0..screen.height() {
            for x in 0..screen.width() {
                let lit = screen.is_set(x, y).map_err(|e| e.to_string())?;
                let intensity = if lit { 255 } else { 0 };
                texture.extend_from_slice(&[intensity; 3]);
            }
        }
        Ok(texture)
    }

    /// Formats the Chip-8 Screen as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, screen: &Screen) -> Result<(), String> {
        let pixels = Display::screen_to_sdl_texture(screen)?;
        let row_len = self.width * 3;

        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, row) in pixels.chunks(row_len).enumerate() {
                buffer[y * pitch..y * pitch + row_len].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
