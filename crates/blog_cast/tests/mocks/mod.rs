pub mod fetcher;
pub mod generator;
pub mod synthesizer;
