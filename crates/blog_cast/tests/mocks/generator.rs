use std::sync::{Arc, Mutex};

use blog_cast::TextGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCall {
    pub context: String,
    pub instruction: String,
}

#[derive(Clone)]
pub struct MockGenerator {
    pub reply: String,
    pub calls: Arc<Mutex<Vec<GenerateCall>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TextGenerator for MockGenerator {
    type Error = anyhow::Error;

    fn model(&self) -> &str {
        "mock-gemini"
    }

    async fn generate(&self, context: &str, instruction: &str) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(GenerateCall {
            context: context.to_string(),
            instruction: instruction.to_string(),
        });
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.reply.clone())
    }
}
