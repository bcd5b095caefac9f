use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

type Sound = Buffered<Decoder<BufReader<File>>>;

/// Audio manager for playing sound effects
pub struct AudioManager {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    fire_sound: Option<Sound>,
    hit_sound: Option<Sound>,
}

impl AudioManager {
    /// Opens the default output device and pre-loads `fire.wav` and `hit.wav`
    /// from `dir`. A missing sound file only silences that effect.
    pub fn new(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            fire_sound: load_sound(&dir.join("fire.wav")),
            hit_sound: load_sound(&dir.join("hit.wav")),
        })
    }

    pub fn play_fire_sound(&self) {
        self.play(self.fire_sound.as_ref(), 0.05);
    }

    pub fn play_hit_sound(&self) {
        self.play(self.hit_sound.as_ref(), 0.1);
    }

    fn play(&self, sound: Option<&Sound>, volume: f32) {
        // Playback errors are ignored, a missed effect shouldn't stop the game
        if let Some(sound) = sound
            && let Ok(sink) = Sink::try_new(&self.stream_handle)
        {
            sink.set_volume(volume);
            sink.append(sound.clone());
            sink.detach();
        }
    }
}

fn load_sound(path: &Path) -> Option<Sound> {
    let loaded = File::open(path)
        .map_err(|err| err.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|err| err.to_string()));

    match loaded {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            log::warn!("Sound {} unavailable: {}", path.display(), err);
            None
        }
    }
}
