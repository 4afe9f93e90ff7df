use reqwest::Client;
use serde::Deserialize;

use crate::llm::generator::TextGenerator;

/// Client for any OpenAI compatible chat completions endpoint.
///
/// Defaults to Gemini through Google's OpenAI compatibility layer.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &str = include_str!("./prompts/podcast_persona.txt");

    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
    pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn send_completion_request(
        &self,
        model_name: &str,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model_name,
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub index: u32,
    pub message: CompletionMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl TextGenerator for OpenAIClient {
    type Error = OpenAIError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, context: &str, instruction: &str) -> Result<String, Self::Error> {
        let user_content = format!("{instruction}\n\n---\n\n{context}");

        let response = self
            .send_completion_request(&self.model, user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate completion"))?;

        if let Some(reason) = response.choices.first().and_then(|c| c.finish_reason.as_deref()) {
            if reason != "stop" {
                tracing::warn!(finish_reason = reason, "Completion did not finish cleanly");
            }
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(OpenAIError::EmptyCompletion)
    }
}
