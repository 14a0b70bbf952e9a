use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use metagen_core::{
    Config, ConfigOverrides, MetadataPipeline, PreparedRequest, Provider, VideoReference,
    format_existing_readable, format_generated_readable,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Parser)]
#[command(name = "metagen")]
#[command(
    about = "Generate an SEO-optimized YouTube title, description and tags from a video title or URL"
)]
struct Cli {
    /// Video title, or a YouTube URL to start from the video's current metadata
    input: String,

    /// AI provider for metadata generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Model name, overriding the provider's default
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the AI provider. Defaults to the provider's environment variable.
    #[arg(long)]
    api_key: Option<String>,

    /// YouTube Data API key. Defaults to YOUTUBE_API_KEY.
    #[arg(long)]
    youtube_api_key: Option<String>,

    /// Preferred transcript language (repeatable, in order of preference)
    #[arg(short, long = "lang")]
    lang: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .expect("spinner template is valid"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn resolution_message(prepared: &PreparedRequest) -> String {
    match (&prepared.reference, &prepared.existing) {
        (VideoReference::Title(_), _) => "Using title as given".to_string(),
        (VideoReference::Id(id), Some(_)) => format!(
            "Fetched video {} ({})",
            style(id).yellow(),
            if prepared.transcript.is_empty() {
                "no transcript".to_string()
            } else {
                format!("transcript: {} chars", prepared.transcript.chars().count())
            }
        ),
        (VideoReference::Id(id), None) => format!(
            "Details unavailable for {}, using input as title",
            style(id).yellow()
        ),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.input.trim().is_empty() {
        fail("Please enter a video title or URL.");
    }

    // Validate credentials before any API call
    let config = Config::resolve(ConfigOverrides {
        provider: cli.provider.into(),
        model: cli.model,
        api_key: cli.api_key,
        youtube_api_key: cli.youtube_api_key,
        transcript_languages: cli.lang,
    })
    .unwrap_or_else(|e| fail(e));

    let pipeline = MetadataPipeline::from_config(&config);
    let span = pipeline.request_span();

    if !cli.json {
        println!(
            "\n{}  {}\n",
            style("metagen").cyan().bold(),
            style("YouTube Metadata Generator").dim()
        );
    }

    let total_start = Instant::now();

    // Step 1: Resolve input, fetch existing details and transcript
    let step_start = Instant::now();
    let spinner = create_spinner("Resolving video...");
    let prepared = match pipeline.prepare(&cli.input).instrument(span.clone()).await {
        Ok(prepared) => prepared,
        Err(e) => {
            spinner.finish_and_clear();
            fail(e);
        }
    };
    let resolved = resolution_message(&prepared);
    spinner.finish_with_message(format!(
        "{} {} {}",
        style("✓").green().bold(),
        resolved,
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    // Step 2: Generate
    let step_start = Instant::now();
    let spinner = create_spinner(&format!(
        "Generating metadata with {} ({})...",
        config.provider.name(),
        config.model_name()
    ));
    let generated = match pipeline.generate(&prepared).instrument(span).await {
        Ok(generated) => generated,
        Err(e) => {
            spinner.finish_and_clear();
            fail(format!(
                "{}\nFailed to generate metadata. Please check your API key or try again.",
                e
            ));
        }
    };
    spinner.finish_with_message(format!(
        "{} Metadata generated ({}) {}",
        style("✓").green().bold(),
        config.provider.name(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    let generation = prepared.into_generation(generated);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&generation)?);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!("{}", style("─".repeat(60)).dim());

    if let Some(existing) = &generation.existing {
        println!("{}", format_existing_readable(existing));
        println!("{}", style("─".repeat(60)).dim());
    }

    println!("{}", format_generated_readable(&generation.generated));

    Ok(())
}
