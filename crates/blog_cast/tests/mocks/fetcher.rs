use std::sync::{Arc, Mutex};

use blog_cast::{scraper::ContentFetcher, RawContent, SourceUrl};

#[derive(Clone)]
pub struct MockFetcher {
    pub markdown: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockFetcher {
    pub fn new(markdown: &str) -> Self {
        Self {
            markdown: markdown.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            markdown: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl ContentFetcher for MockFetcher {
    type Error = anyhow::Error;

    async fn fetch(&self, url: &SourceUrl) -> anyhow::Result<RawContent> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(RawContent::new(self.markdown.clone()))
    }
}
