use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use blog_cast::{
    openai::OpenAIClient,
    scraper::firecrawl::FirecrawlClient,
    tracing::init_tracing_subscriber,
    tts::elevenlabs::{ElevenLabsClient, VoiceSettings},
    ApiKeys, PodcastProcessorBuilder, DEFAULT_MAX_AUDIO_CHARS,
};

#[derive(Parser)]
#[command(name = "blog-cast", about = "Turn a blog post into a narrated podcast")]
struct Cli {
    #[command(flatten)]
    llm: LlmArgs,

    /// Firecrawl API base url
    #[arg(long, env = "FIRECRAWL_BASE_URL", default_value = FirecrawlClient::DEFAULT_BASE_URL, global = true)]
    firecrawl_base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct LlmArgs {
    /// Chat completions model used for summarization
    #[arg(long, env = "LLM_MODEL", default_value = OpenAIClient::DEFAULT_MODEL, global = true)]
    llm_model: String,

    /// OpenAI compatible chat completions base url
    #[arg(long, env = "LLM_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL, global = true)]
    llm_base_url: String,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a blog post and narrate it to an mp3 file
    Podcast {
        /// Blog post url; prompted for when omitted
        url: Option<String>,

        /// Where the generated audio is written (overwritten on every run)
        #[arg(long, short, default_value = ElevenLabsClient::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Number of summary characters sent for narration
        #[arg(long, default_value_t = DEFAULT_MAX_AUDIO_CHARS)]
        max_audio_chars: usize,

        /// ElevenLabs voice id
        #[arg(long, env = "ELEVENLABS_VOICE_ID", default_value = ElevenLabsClient::DEFAULT_VOICE_ID)]
        voice_id: String,

        /// ElevenLabs model id
        #[arg(long, default_value = ElevenLabsClient::DEFAULT_MODEL_ID)]
        tts_model: String,

        /// ElevenLabs API base url
        #[arg(long, env = "ELEVENLABS_BASE_URL", default_value = ElevenLabsClient::DEFAULT_BASE_URL)]
        elevenlabs_base_url: String,
    },
    /// Summarize a blog post to a text file without generating audio
    Summarize {
        /// Blog post url; prompted for when omitted
        url: Option<String>,

        /// Where the summary text is written
        #[arg(long, default_value = "blog_summary.txt")]
        summary_out: PathBuf,
    },
}

fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter blog URL: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read url from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let keys = ApiKeys::from_env()?;

    let fetcher = FirecrawlClient::new(&keys.firecrawl).with_base_url(&cli.firecrawl_base_url);
    let generator = OpenAIClient::new(&keys.llm)
        .with_base_url(&cli.llm.llm_base_url)
        .with_model(&cli.llm.llm_model);

    match cli.command {
        Command::Podcast {
            url,
            output,
            max_audio_chars,
            voice_id,
            tts_model,
            elevenlabs_base_url,
        } => {
            let elevenlabs_key = keys.elevenlabs()?;
            let url = match url {
                Some(url) => url,
                None => prompt_for_url()?,
            };

            let synthesizer = ElevenLabsClient::new(elevenlabs_key)
                .with_base_url(elevenlabs_base_url)
                .with_voice_id(voice_id)
                .with_model_id(tts_model)
                .with_voice_settings(VoiceSettings::default())
                .with_output_path(output);

            let processor = PodcastProcessorBuilder::new()
                .fetcher(fetcher)
                .generator(generator)
                .synthesizer(synthesizer)
                .max_audio_chars(max_audio_chars)
                .build();

            tracing::info!(%url, "Generating podcast...");
            let result = processor.run(&url).await;

            println!("=== PODCAST SUMMARY ===\n{}\n", result.summary());
            if let Some(path) = result.audio_path() {
                println!("Audio: {}", path.display());
            }
            println!("{}", result.status_message());

            if !result.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Summarize { url, summary_out } => {
            let url = match url {
                Some(url) => url,
                None => prompt_for_url()?,
            };

            let summarizer = PodcastProcessorBuilder::new()
                .fetcher(fetcher)
                .generator(generator)
                .build_summarizer();

            tracing::info!(%url, "Summarizing blog...");
            let summary = summarizer.summarize_url(&url).await?;

            summary
                .save(&summary_out)
                .await
                .with_context(|| format!("Failed to write summary to {}", summary_out.display()))?;

            println!("\n=== BLOG SUMMARY ===\n{summary}");
            tracing::info!(path = %summary_out.display(), "Summary written");
        }
    }

    Ok(ExitCode::SUCCESS)
}
