use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.2;

pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a single tone while the sound timer is running.
/// A muted beeper never opens an audio device.
pub struct Beeper {
    device: Option<AudioDevice<SquareWave>>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;

        Ok(Beeper {
            device: Some(device),
            playing: false,
        })
    }

    pub fn muted() -> Self {
        Beeper {
            device: None,
            playing: false,
        }
    }

    /// Starts or stops the tone; does nothing if it's already in that state
    pub fn set(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if let Some(device) = &self.device {
            if active {
                device.resume();
            } else {
                device.pause();
            }
        }
        self.playing = active;
    }
}
