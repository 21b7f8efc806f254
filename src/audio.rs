use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{EFFECTS_VOLUME, MUSIC_VOLUME};
use crate::events::SoundEffect;

const MUSIC_FILE: &str = "song.mp3";

type Clip = Buffered<Decoder<BufReader<File>>>;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}

fn load_clip(path: &Path) -> Result<Clip, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoder.buffered())
}

struct Output {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

/// Plays background music and sound effects. Anything that fails to load
/// is skipped, and with no output device every call is a no-op.
pub struct AudioManager {
    output: Option<Output>,
    music: Option<Clip>,
    effects: HashMap<SoundEffect, Clip>,
}

impl AudioManager {
    /// Open the default output device and pre-load every clip from
    /// `asset_dir`
    pub fn new(asset_dir: &Path) -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        let mut effects = HashMap::new();
        for effect in SoundEffect::ALL {
            match load_clip(&asset_dir.join(effect.get_file_name())) {
                Ok(clip) => {
                    effects.insert(effect, clip);
                }
                Err(err) => warn!("sound effect unavailable: {err}"),
            }
        }

        let music = load_clip(&asset_dir.join(MUSIC_FILE))
            .inspect_err(|err| warn!("music unavailable: {err}"))
            .ok();

        info!(
            "audio ready: {} of {} effects loaded, music {}",
            effects.len(),
            SoundEffect::ALL.len(),
            if music.is_some() { "loaded" } else { "missing" }
        );

        Ok(Self {
            output: Some(Output {
                _stream: stream,
                stream_handle,
            }),
            music,
            effects,
        })
    }

    /// An audio manager that never makes a sound
    pub fn silent() -> Self {
        Self {
            output: None,
            music: None,
            effects: HashMap::new(),
        }
    }

    /// Falls back to [`AudioManager::silent`] when the device or assets are
    /// unavailable
    pub fn new_or_silent(asset_dir: &Path, muted: bool) -> Self {
        if muted {
            info!("audio muted");
            return Self::silent();
        }
        Self::new(asset_dir).unwrap_or_else(|err| {
            warn!("continuing without audio: {err}");
            Self::silent()
        })
    }

    pub fn is_silent(&self) -> bool {
        self.output.is_none()
    }

    pub fn play_music(&self) {
        if let Some(music) = &self.music {
            self.play_clip(music, MUSIC_VOLUME);
        }
    }

    pub fn play_effect(&self, effect: SoundEffect) {
        self.play_effect_volume(effect, EFFECTS_VOLUME);
    }

    pub fn play_effect_volume(&self, effect: SoundEffect, volume: f32) {
        if let Some(clip) = self.effects.get(&effect) {
            self.play_clip(clip, volume);
        }
    }

    fn play_clip(&self, clip: &Clip, volume: f32) {
        let Some(output) = &self.output else {
            return;
        };
        // Playback errors never stop the game
        match Sink::try_new(&output.stream_handle) {
            Ok(sink) => {
                sink.set_volume(volume);
                // Cloning a buffered source only clones references
                sink.append(clip.clone());
                sink.detach();
            }
            Err(err) => warn!("cannot play sound: {err}"),
        }
    }
}
