//! # Pipeline types
//!
//! Values that live for a single pipeline invocation: the validated source url,
//! the extracted article, the spoken summary and the synthesized audio.

use std::{
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use url::Url;

use crate::error::Error;

/// A blog page address that has been checked before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl(Url);

impl SourceUrl {
    /// Parses and validates a user supplied url.
    ///
    /// # Returns
    /// * `Ok(SourceUrl)` for absolute `http`/`https` urls with a host.
    /// * `Err(Error::Validation)` for empty input, unparseable text or any other scheme.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::Validation("URL is empty".into()));
        }

        let url = Url::parse(raw).map_err(|e| Error::Validation(format!("{raw}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Validation(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::Validation(format!("{raw}: missing host")));
        }

        Ok(SourceUrl(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for SourceUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Main article text (markdown) as returned by the content extraction service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContent {
    pub markdown: String,
    pub title: Option<String>,
}

impl RawContent {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.markdown.trim().is_empty()
    }
}

/// Podcast ready narration of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Summary(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// Returns at most the first `max_chars` characters, never splitting a code point.
    pub fn truncated(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.0[..byte_idx],
            None => &self.0,
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Writes the summary text to `path`, replacing any previous file.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        tokio::fs::write(path, self.0.as_bytes()).await?;
        Ok(())
    }
}

impl Deref for Summary {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for Summary {
    fn from(value: String) -> Self {
        Summary(value)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// MPEG audio persisted to disk by a speech synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub path: PathBuf,
    pub size_bytes: usize,
}

/// Outcome of a full url -> summary -> audio run, as shown to a user.
#[derive(Debug)]
pub enum PipelineResult {
    Success {
        summary: Summary,
        audio: AudioArtifact,
    },
    Failure {
        message: String,
    },
}

impl PipelineResult {
    pub const SUCCESS_MESSAGE: &str = "Podcast generated successfully";

    pub fn is_success(&self) -> bool {
        matches!(self, PipelineResult::Success { .. })
    }

    /// The full summary text, empty on failure.
    pub fn summary(&self) -> &str {
        match self {
            PipelineResult::Success { summary, .. } => summary.as_str(),
            PipelineResult::Failure { .. } => "",
        }
    }

    pub fn audio_path(&self) -> Option<&Path> {
        match self {
            PipelineResult::Success { audio, .. } => Some(audio.path.as_path()),
            PipelineResult::Failure { .. } => None,
        }
    }

    pub fn status_message(&self) -> String {
        match self {
            PipelineResult::Success { .. } => Self::SUCCESS_MESSAGE.to_string(),
            PipelineResult::Failure { message } => format!("Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_accepts_http_and_https() {
        for raw in [
            "https://example.com/post",
            "http://blog.example.org/2024/01/hello-world?ref=feed",
            "  https://example.com/post  ",
        ] {
            let url = SourceUrl::parse(raw);
            assert!(url.is_ok(), "{raw} should be valid: {:?}", url.err());
        }
    }

    #[test]
    fn test_source_url_rejects_bad_input() {
        for raw in [
            "",
            "   ",
            "example.com/post",
            "not a url",
            "ftp://example.com/file",
            "file:///etc/passwd",
            "mailto:someone@example.com",
        ] {
            let result = SourceUrl::parse(raw);
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "{raw:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_raw_content_blank_is_empty() {
        assert!(RawContent::new("  \n\t ").is_empty());
        assert!(!RawContent::new("# Title\nBody").is_empty());
    }

    #[test]
    fn test_summary_truncation() {
        let summary = Summary::new("a".repeat(1500));
        assert_eq!(summary.truncated(1200).len(), 1200);

        let short = Summary::new("short text");
        assert_eq!(short.truncated(1200), "short text");
    }

    #[test]
    fn test_summary_truncation_respects_char_boundaries() {
        let summary = Summary::new("héllo wörld");
        assert_eq!(summary.truncated(4), "héll");
        assert_eq!(summary.truncated(0), "");
    }

    #[test]
    fn test_summary_word_count() {
        assert_eq!(Summary::new("one two  three\nfour").word_count(), 4);
        assert_eq!(Summary::default().word_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_save_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog_summary.txt");
        std::fs::write(&path, "an older summary that is longer").unwrap();

        Summary::new("Welcome to the show.").save(&path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Welcome to the show.");
    }

    #[tokio::test]
    async fn test_summary_save_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("blog_summary.txt");

        let err = Summary::new("text").save(&path).await.unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_pipeline_result_failure_view() {
        let result = PipelineResult::Failure {
            message: "Content extraction failed: timeout".into(),
        };
        assert!(!result.is_success());
        assert_eq!(result.summary(), "");
        assert!(result.audio_path().is_none());
        assert_eq!(
            result.status_message(),
            "Error: Content extraction failed: timeout"
        );
    }

    #[test]
    fn test_pipeline_result_success_view() {
        let result = PipelineResult::Success {
            summary: Summary::new("narration"),
            audio: AudioArtifact {
                path: PathBuf::from("podcast.mp3"),
                size_bytes: 3,
            },
        };
        assert!(result.is_success());
        assert_eq!(result.summary(), "narration");
        assert_eq!(result.audio_path(), Some(Path::new("podcast.mp3")));
        assert_eq!(result.status_message(), PipelineResult::SUCCESS_MESSAGE);
    }
}
