pub mod elevenlabs;

use std::{fmt::Display, future::Future};

use crate::AudioArtifact;

/// Converts text to speech and persists the audio.
///
/// Implementations do not truncate; callers are responsible for staying within
/// the provider's character budget.
pub trait SpeechSynthesizer {
    type Error: Display;

    fn synthesize(&self, text: &str)
        -> impl Future<Output = Result<AudioArtifact, Self::Error>> + Send;
}
