use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use blog_cast::{tts::SpeechSynthesizer, AudioArtifact};

#[derive(Clone)]
pub struct MockSynthesizer {
    pub audio: Vec<u8>,
    pub output_path: PathBuf,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSynthesizer {
    pub fn new(output_path: impl Into<PathBuf>, audio: &[u8]) -> Self {
        Self {
            audio: audio.to_vec(),
            output_path: output_path.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio: Vec::new(),
            output_path: PathBuf::from("/nonexistent/podcast.mp3"),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    type Error = anyhow::Error;

    async fn synthesize(&self, text: &str) -> anyhow::Result<AudioArtifact> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        std::fs::write(&self.output_path, &self.audio)?;
        Ok(AudioArtifact {
            path: self.output_path.clone(),
            size_bytes: self.audio.len(),
        })
    }
}
