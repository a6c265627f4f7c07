use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Config, TIMER_HZ};
use display::Display;

use crate::beeper::Beeper;
use crate::keymap::KEYMAP;

/// Host-side settings for one session
pub struct Options {
    /// Instructions executed per second
    pub ips: u64,
    /// Window pixels per Chip-8 pixel
    pub scale: u32,
    pub mute: bool,
}

pub fn run(rom: PathBuf, options: Options) -> anyhow::Result<()> {
    let mut chip8: Chip8<Keycode> = Chip8::new(Config::new(KEYMAP));

    // Load ROM
    let image = fs::read(&rom).with_context(|| format!("unable to read {}", rom.display()))?;
    chip8
        .load(&image)
        .with_context(|| format!("unable to load {}", rom.display()))?;
    info!("loaded {} ({} bytes)", rom.display(), image.len());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut display = Display::new(&sdl, chip8.screen(), options.scale).map_err(|e| anyhow!(e))?;
    let mut beeper = if options.mute {
        Beeper::muted()
    } else {
        Beeper::new(&sdl).map_err(|e| anyhow!(e))?
    };
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let cycle_time = Duration::from_nanos(1_000_000_000 / options.ips.max(1));
    let timer_period = Duration::from_nanos(1_000_000_000 / TIMER_HZ);
    let mut last_cycle = Instant::now();
    let mut last_tick = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    display.render(chip8.screen()).map_err(|e| anyhow!(e))?;

    'event: loop {
        // If the screen changed, render the current frame
        if chip8.take_redraw() {
            display.render(chip8.screen()).map_err(|e| anyhow!(e))?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } => fast_forward = true,
                Event::KeyUp {
                    keycode: Some(Keycode::Space),
                    ..
                } => fast_forward = false,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(kc) = chip8.press(key)? {
                        debug!("key {:X} down", kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    chip8.release(key)?;
                }
                _ => continue,
            };
        }

        // Update state
        let pc = chip8.registers().pc;
        chip8
            .step()
            .with_context(|| format!("fault executing the instruction at {:#05X}", pc))?;

        while last_tick.elapsed() >= timer_period {
            chip8.tick_timers();
            last_tick += timer_period;
        }
        beeper.set(chip8.sound_active());

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("session ended");
    Ok(())
}
