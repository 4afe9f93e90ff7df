use std::ops::RangeInclusive;

use crate::{
    llm::summarizer::DEFAULT_WORD_RANGE, processor::DEFAULT_MAX_AUDIO_CHARS,
    processor::BlogSummarizer, scraper::ContentFetcher, tts::SpeechSynthesizer, PodcastProcessor,
    PodcastSummarizer, TextGenerator,
};

pub struct PodcastProcessorBuilder<F = (), G = (), S = ()> {
    fetcher: F,
    generator: G,
    synthesizer: S,
    max_audio_chars: usize,
    word_range: RangeInclusive<usize>,
}

impl PodcastProcessorBuilder {
    pub fn new() -> Self {
        Self {
            fetcher: (),
            generator: (),
            synthesizer: (),
            max_audio_chars: DEFAULT_MAX_AUDIO_CHARS,
            word_range: DEFAULT_WORD_RANGE,
        }
    }
}

impl Default for PodcastProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, G, S> PodcastProcessorBuilder<F, G, S> {
    pub fn fetcher<F2: ContentFetcher>(self, fetcher: F2) -> PodcastProcessorBuilder<F2, G, S> {
        PodcastProcessorBuilder {
            fetcher,
            generator: self.generator,
            synthesizer: self.synthesizer,
            max_audio_chars: self.max_audio_chars,
            word_range: self.word_range,
        }
    }

    pub fn generator<G2: TextGenerator>(self, generator: G2) -> PodcastProcessorBuilder<F, G2, S> {
        PodcastProcessorBuilder {
            fetcher: self.fetcher,
            generator,
            synthesizer: self.synthesizer,
            max_audio_chars: self.max_audio_chars,
            word_range: self.word_range,
        }
    }

    pub fn synthesizer<S2: SpeechSynthesizer>(
        self,
        synthesizer: S2,
    ) -> PodcastProcessorBuilder<F, G, S2> {
        PodcastProcessorBuilder {
            fetcher: self.fetcher,
            generator: self.generator,
            synthesizer,
            max_audio_chars: self.max_audio_chars,
            word_range: self.word_range,
        }
    }

    pub fn max_audio_chars(mut self, max_audio_chars: usize) -> Self {
        self.max_audio_chars = max_audio_chars;
        self
    }

    pub fn word_range(mut self, word_range: RangeInclusive<usize>) -> Self {
        self.word_range = word_range;
        self
    }
}

impl<F, G, S> PodcastProcessorBuilder<F, G, S>
where
    F: ContentFetcher,
    G: TextGenerator,
{
    /// Builds the fetch and summarize stages only; no synthesizer is needed.
    pub fn build_summarizer(self) -> BlogSummarizer<F, G> {
        BlogSummarizer {
            fetcher: self.fetcher,
            summarizer: PodcastSummarizer::new(self.generator).with_word_range(self.word_range),
        }
    }
}

impl<F, G, S> PodcastProcessorBuilder<F, G, S>
where
    F: ContentFetcher,
    G: TextGenerator,
    S: SpeechSynthesizer,
{
    pub fn build(self) -> PodcastProcessor<F, G, S> {
        PodcastProcessor {
            blog: BlogSummarizer {
                fetcher: self.fetcher,
                summarizer: PodcastSummarizer::new(self.generator).with_word_range(self.word_range),
            },
            synthesizer: self.synthesizer,
            max_audio_chars: self.max_audio_chars,
        }
    }
}
