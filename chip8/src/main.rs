use std::path::PathBuf;

use clap::Parser;
use log::error;

use chip8_core::CLOCK_SPEED;

mod beeper;
mod keymap;
mod run;

const DEFAULT_IPS: u64 = 1_000_000_000 / CLOCK_SPEED;

/// Run a Chip-8 ROM in an SDL window.
///
/// Hold Space to ignore the clock speed, press Escape to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = DEFAULT_IPS)]
    ips: u64,

    /// Size of each Chip-8 pixel on screen
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Don't open an audio device
    #[arg(short, long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = run::Options {
        ips: args.ips,
        scale: args.scale,
        mute: args.mute,
    };

    run::run(args.rom, options).map_err(|e| {
        error!("{:#}", e);
        e
    })
}
