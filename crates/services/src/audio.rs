use std::fmt;

use thiserror::Error;

/// Short feedback clips the session loop can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Played after a correct answer.
    Clap,
    /// Played after an incorrect answer.
    Aww,
}

impl SoundId {
    /// Asset name the platform backend resolves to a clip.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundId::Clap => "clap",
            SoundId::Aww => "aww",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Errors a playback backend may report.
///
/// Callers log these and move on; playback failure never reaches the
/// session state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("missing audio asset: {0}")]
    MissingAsset(String),
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Playback port implemented by the platform layer.
pub trait AudioPlayer: Send + Sync {
    /// Play the given clip, fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns `AudioError` if the asset cannot be located or played.
    fn play(&self, sound: SoundId) -> Result<(), AudioError>;
}

/// Player that drops every sound, for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&self, _sound: SoundId) -> Result<(), AudioError> {
        Ok(())
    }
}
