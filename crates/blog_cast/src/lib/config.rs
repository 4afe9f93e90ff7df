use crate::error::Error;

/// Credentials for the external services, read once at startup.
///
/// The ElevenLabs key is only needed for narration, so its absence is
/// reported by [`ApiKeys::elevenlabs`] rather than at load time.
#[derive(Clone)]
pub struct ApiKeys {
    pub llm: String,
    pub firecrawl: String,
    pub elevenlabs: Option<String>,
}

impl ApiKeys {
    pub const LLM_KEY_VAR: &str = "GEMINI_API_KEY";
    pub const FIRECRAWL_KEY_VAR: &str = "FIRECRAWL_API_KEY";
    pub const ELEVENLABS_KEY_VAR: &str = "ELEVENLABS_API_KEY";

    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the key set from an arbitrary variable lookup.
    /// Missing and blank values are both reported as `Error::Configuration`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |name: &str| optional(name).ok_or_else(|| missing(name));

        Ok(ApiKeys {
            llm: require(Self::LLM_KEY_VAR)?,
            firecrawl: require(Self::FIRECRAWL_KEY_VAR)?,
            elevenlabs: optional(Self::ELEVENLABS_KEY_VAR),
        })
    }

    pub fn elevenlabs(&self) -> Result<&str, Error> {
        self.elevenlabs
            .as_deref()
            .ok_or_else(|| missing(Self::ELEVENLABS_KEY_VAR))
    }
}

fn missing(name: &str) -> Error {
    Error::Configuration(format!("{name} not set"))
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("llm", &"***")
            .field("firecrawl", &"***")
            .field("elevenlabs", &self.elevenlabs.as_ref().map(|_| "***"))
            .finish()
    }
}
