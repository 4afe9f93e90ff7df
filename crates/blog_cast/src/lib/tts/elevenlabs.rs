use std::path::{Path, PathBuf};

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client,
};
use serde::Serialize;

use crate::{tts::SpeechSynthesizer, AudioArtifact};

/// ElevenLabs text-to-speech client writing MPEG audio to a fixed output path.
#[derive(Clone)]
pub struct ElevenLabsClient {
    client: Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
    output_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
    pub voice_settings: VoiceSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ElevenLabs API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ElevenLabsClient {
    pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
    pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
    pub const DEFAULT_MODEL_ID: &str = "eleven_flash_v2_5";
    pub const DEFAULT_OUTPUT_PATH: &str = "podcast.mp3";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
            voice_id: Self::DEFAULT_VOICE_ID.into(),
            model_id: Self::DEFAULT_MODEL_ID.into(),
            voice_settings: VoiceSettings::default(),
            output_path: PathBuf::from(Self::DEFAULT_OUTPUT_PATH),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_voice_settings(mut self, voice_settings: VoiceSettings) -> Self {
        self.voice_settings = voice_settings;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Requests speech for `text` and returns the raw MPEG bytes.
    pub async fn send_speech_request(&self, text: &str) -> Result<Vec<u8>, ElevenLabsError> {
        let body = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };

        let resp = self
            .client
            .post(format!(
                "{}/v1/text-to-speech/{}",
                self.base_url, self.voice_id
            ))
            .header("xi-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if resp.status() != reqwest::StatusCode::OK {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

/// Writes `bytes` next to `path` first and renames over it, so the output is
/// either the complete new audio or untouched.
async fn write_replacing(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let written = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };

    if written.is_err() {
        let _ = tokio::fs::remove_file(&partial).await;
    }
    written
}

impl SpeechSynthesizer for ElevenLabsClient {
    type Error = ElevenLabsError;

    #[tracing::instrument(skip_all, fields(voice_id = %self.voice_id, chars = text.chars().count()))]
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, Self::Error> {
        let audio = self
            .send_speech_request(text)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))?;

        write_replacing(&self.output_path, &audio).await?;
        tracing::info!(path = %self.output_path.display(), bytes = audio.len(), "Audio written");

        Ok(AudioArtifact {
            path: self.output_path.clone(),
            size_bytes: audio.len(),
        })
    }
}
