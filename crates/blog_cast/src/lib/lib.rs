mod config;
mod error;
mod llm;
mod processor;
pub mod scraper;
pub mod tracing;
pub mod tts;
pub mod types;

pub use config::ApiKeys;
pub use error::Error;
pub use llm::openai;
pub use llm::{
    generator::TextGenerator,
    summarizer::{review_summary, PodcastSummarizer, DEFAULT_WORD_RANGE},
};
pub use processor::{
    builder::PodcastProcessorBuilder, BlogSummarizer, PodcastProcessor, DEFAULT_MAX_AUDIO_CHARS,
};
pub use types::{AudioArtifact, PipelineResult, RawContent, SourceUrl, Summary};
