pub mod firecrawl;

use std::{fmt::Display, future::Future};

use crate::{RawContent, SourceUrl};

/// Retrieves the main article text of a page, without navigation, ads or other boilerplate.
pub trait ContentFetcher {
    type Error: Display;

    fn fetch(&self, url: &SourceUrl)
        -> impl Future<Output = Result<RawContent, Self::Error>> + Send;
}
