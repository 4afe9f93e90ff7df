use std::{borrow::Cow, ops::RangeInclusive, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{error::Error, llm::generator::TextGenerator, RawContent, Summary};

// links and images, allowing one level of balanced parens in the target
static MARKDOWN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\((?:[^()]|\([^()]*\))*\)").unwrap());

static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)(?:[^\s()\[\]<>]|\([^\s()]*\))+").unwrap()
});

// sentence punctuation a bare url match may swallow
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

static META_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:this|the)\s+(?:blog|blog\s+post|article|summary|post)\b").unwrap()
});

static EXTRA_SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

static SPACE_BEFORE_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+([.,;:!?)])").unwrap());

/// Requested narration length in words
pub const DEFAULT_WORD_RANGE: RangeInclusive<usize> = 500..=700;

/// Turns extracted article text into a podcast narration via a [`TextGenerator`].
pub struct PodcastSummarizer<G: TextGenerator> {
    generator: G,
    word_range: RangeInclusive<usize>,
}

impl<G: TextGenerator> PodcastSummarizer<G> {
    const INSTRUCTION: &str = "Create a comprehensive summary of the content below for an AI generated podcast episode. \
        Write a concise summary of {min} to {max} words with the key points, insights and important details. \
        The summary will be read aloud by a text to speech model, so make it suitable for podcast format, focusing on clarity and engagement. \
        Do not say that this is a blog summary or an article summary, and do not mention any links or URLs.";

    pub fn new(generator: G) -> Self {
        Self {
            generator,
            word_range: DEFAULT_WORD_RANGE,
        }
    }

    pub fn with_word_range(mut self, word_range: RangeInclusive<usize>) -> Self {
        self.word_range = word_range;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn instruction(&self) -> String {
        Self::INSTRUCTION
            .replace("{min}", &self.word_range.start().to_string())
            .replace("{max}", &self.word_range.end().to_string())
    }

    /// Generates the narration for `content`, calling the generator exactly once.
    #[tracing::instrument(skip_all, fields(model = %self.generator.model()))]
    pub async fn summarize(&self, content: RawContent) -> Result<Summary, Error> {
        let context = match content.title {
            Some(ref title) if !title.trim().is_empty() => {
                format!("# {}\n\n{}", title.trim(), content.markdown)
            }
            _ => content.markdown,
        };

        let text = self
            .generator
            .generate(&context, &self.instruction())
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        let summary = review_summary(&text)
            .map(Summary::new)
            .ok_or_else(|| Error::Generation("model returned empty text".into()))?;

        let words = summary.word_count();
        if !self.word_range.contains(&words) {
            tracing::warn!(
                words,
                min = self.word_range.start(),
                max = self.word_range.end(),
                "Summary length outside requested range"
            );
        }

        if let Some(m) = META_REFERENCE_RE.find(&summary) {
            tracing::warn!(phrase = m.as_str(), "Summary refers to itself or its source");
        }

        tracing::info!(words, "Summary generated");
        Ok(summary)
    }
}

/// Cleans generated text for narration: markdown links and images keep only
/// their label, bare urls are dropped (trailing sentence punctuation stays) and
/// the result is trimmed.
///
/// Returns `None` when nothing speakable is left.
pub fn review_summary(text: &str) -> Option<String> {
    let delinked = MARKDOWN_LINK_RE.replace_all(text, "$1");

    let without_urls = BARE_URL_RE.replace_all(&delinked, |caps: &Captures| {
        let url = &caps[0];
        url[url.trim_end_matches(TRAILING_PUNCTUATION).len()..].to_string()
    });

    // only tidy the gaps left behind by removed urls
    let cleaned = match without_urls {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => {
            let collapsed = EXTRA_SPACES_RE.replace_all(&s, " ");
            SPACE_BEFORE_PUNCTUATION_RE
                .replace_all(&collapsed, "$1")
                .into_owned()
        }
    };

    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
