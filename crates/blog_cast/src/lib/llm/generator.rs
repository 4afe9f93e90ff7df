use std::{fmt::Display, future::Future};

/// A text generation capability: conditioning context and an instruction in, free text out.
pub trait TextGenerator {
    type Error: Display;

    /// Identifier of the model answering requests, for logging.
    fn model(&self) -> &str;

    fn generate(
        &self,
        context: &str,
        instruction: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
