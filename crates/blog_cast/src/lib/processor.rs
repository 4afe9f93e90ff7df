pub mod builder;

use crate::{
    error::Error, scraper::ContentFetcher, tts::SpeechSynthesizer, AudioArtifact,
    PipelineResult, PodcastSummarizer, SourceUrl, Summary, TextGenerator,
};

/// Character budget sent to the speech synthesizer
pub const DEFAULT_MAX_AUDIO_CHARS: usize = 1200;

/// Fetches a blog post and summarizes it. Never narrates.
pub struct BlogSummarizer<F, G>
where
    F: ContentFetcher,
    G: TextGenerator,
{
    fetcher: F,
    summarizer: PodcastSummarizer<G>,
}

impl<F, G> BlogSummarizer<F, G>
where
    F: ContentFetcher,
    G: TextGenerator,
{
    /// Fetches the page behind `url` and summarizes it.
    ///
    /// Stages run strictly in order and the first failure aborts the run:
    /// an invalid url never reaches the fetcher, and a failed or empty fetch
    /// never reaches the generator.
    #[tracing::instrument(skip(self))]
    pub async fn summarize_url(&self, url: &str) -> Result<Summary, Error> {
        let url = SourceUrl::parse(url)?;

        let content = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| Error::Extraction(e.to_string()))?;

        if content.is_empty() {
            return Err(Error::Extraction(format!("no article content found at {url}")));
        }

        self.summarizer.summarize(content).await
    }
}

// The blog url -> narrated podcast pipeline
pub struct PodcastProcessor<F, G, S>
where
    F: ContentFetcher,
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    blog: BlogSummarizer<F, G>,
    synthesizer: S,
    max_audio_chars: usize,
}

impl<F, G, S> PodcastProcessor<F, G, S>
where
    F: ContentFetcher,
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    pub fn max_audio_chars(&self) -> usize {
        self.max_audio_chars
    }

    /// See [`BlogSummarizer::summarize_url`].
    pub async fn summarize_url(&self, url: &str) -> Result<Summary, Error> {
        self.blog.summarize_url(url).await
    }

    /// Synthesizes the first `max_audio_chars` characters of `summary`.
    #[tracing::instrument(skip_all, fields(words = summary.word_count()))]
    pub async fn narrate(&self, summary: &Summary) -> Result<AudioArtifact, Error> {
        let text = summary.truncated(self.max_audio_chars);

        self.synthesizer
            .synthesize(text)
            .await
            .map_err(|e| Error::Synthesis(e.to_string()))
    }

    /// Runs the whole pipeline and folds any error into a user facing result.
    pub async fn run(&self, url: &str) -> PipelineResult {
        let outcome = async {
            let summary = self.summarize_url(url).await?;
            let audio = self.narrate(&summary).await?;
            Ok::<_, Error>((summary, audio))
        }
        .await;

        match outcome {
            Ok((summary, audio)) => {
                tracing::info!(path = %audio.path.display(), "Podcast generated");
                PipelineResult::Success { summary, audio }
            }
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Pipeline failed");
                PipelineResult::Failure {
                    message: e.to_string(),
                }
            }
        }
    }
}
