#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    Validation(String),
    #[error("Content extraction failed: {0}")]
    Extraction(String),
    #[error("Summary generation failed: {0}")]
    Generation(String),
    #[error("Audio synthesis failed: {0}")]
    Synthesis(String),
    #[error("Missing configuration: {0}")]
    Configuration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short, stable name of the failing stage. Used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Extraction(_) => "extraction",
            Error::Generation(_) => "generation",
            Error::Synthesis(_) => "synthesis",
            Error::Configuration(_) => "configuration",
            Error::Io(_) => "io",
        }
    }
}
