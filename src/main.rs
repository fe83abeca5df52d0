use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use recap::summarizer::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use recap::{
    Document, MIN_RECOMMENDED_WORDS, ModelInfo, Overrides, ReductionPath, Reducer, RunConfig,
    SummarizerClient, SummaryResult,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{Level, warn};

#[derive(Parser)]
#[command(name = "recap", version, about = "Summarize documents of any length")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the summarization server
    #[arg(long, env = "RECAP_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "RECAP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a file, or stdin when no file (or "-") is given
    Summarize(SummarizeArgs),
    /// Check that the summarization server is up
    Health,
    /// List the known summarization models
    Models,
}

#[derive(Args)]
struct SummarizeArgs {
    input: Option<PathBuf>,

    /// Model the server should use
    #[arg(long, env = "RECAP_MODEL", default_value = "facebook/bart-large-cnn")]
    model: String,

    /// JSON file with "summary" and "reduce" sections
    #[arg(long)]
    options: Option<PathBuf>,

    #[arg(long)]
    min_length: Option<usize>,
    #[arg(long)]
    max_length: Option<usize>,

    /// Word count above which the document is chunked
    #[arg(long)]
    threshold: Option<usize>,
    #[arg(long)]
    chunk_size: Option<usize>,
    #[arg(long)]
    chunk_min_length: Option<usize>,
    #[arg(long)]
    chunk_max_length: Option<usize>,

    /// Chunk requests in flight at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Chunking passes before the final summarize call
    #[arg(long)]
    max_passes: Option<usize>,

    /// Summarize input shorter than the recommended minimum
    #[arg(long)]
    force: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Also write the summary text to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SummarizeArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            min_length: self.min_length,
            max_length: self.max_length,
            long_text_threshold: self.threshold,
            chunk_size: self.chunk_size,
            per_chunk_min_length: self.chunk_min_length,
            per_chunk_max_length: self.chunk_max_length,
            max_concurrency: self.concurrency,
            max_passes: self.max_passes,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    model: &'a str,
    elapsed_secs: f64,
    #[serde(flatten)]
    result: &'a SummaryResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let client = SummarizerClient::with_timeout(&cli.endpoint, Duration::from_secs(cli.timeout_secs))
        .context("Failed to build HTTP client")?;

    match cli.command {
        Command::Summarize(args) => summarize(client, args).await,
        Command::Health => health(&client).await,
        Command::Models => {
            list_models();
            Ok(())
        }
    }
}

async fn summarize(client: SummarizerClient, args: SummarizeArgs) -> Result<()> {
    let mut config = match &args.options {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    config.apply(&args.overrides());

    let text = read_input(args.input.as_ref())?;
    let document = Document::new(&text);
    if !document.meets_minimum() {
        if !args.force {
            eprintln!(
                "✗ Please provide at least {} words for summarization (got {}).",
                MIN_RECOMMENDED_WORDS,
                document.word_count()
            );
            eprintln!("  Pass --force to summarize it anyway.");
            std::process::exit(1);
        }
        warn!(
            words = document.word_count(),
            "summarizing very short input; at least {} words give better summaries",
            MIN_RECOMMENDED_WORDS
        );
    }

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let reducer = Reducer::new(client.with_model(&args.model)).with_options(config.reduce.clone());

    let started = Instant::now();
    let result = match reducer
        .reduce_with_cancel(&document, config.summary, &cancel)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("✗ Summarization failed: {}", e);
            eprintln!(
                "  Try a different model (--model), adjust --max-length or --chunk-size, \
                 or check that the server at {} is running.",
                reducer.summarizer().endpoint()
            );
            std::process::exit(1);
        }
    };
    let elapsed = started.elapsed();

    if let Some(path) = &args.output {
        std::fs::write(path, &result.text)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }

    if args.json {
        let report = Report {
            generated_at: chrono::Utc::now().to_rfc3339(),
            model: &args.model,
            elapsed_secs: elapsed.as_secs_f64(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Summary ===\n");
    println!("{}\n", result.text);
    println!("=== Statistics ===");
    println!("Model:                {}", args.model);
    println!("Original words:       {}", result.original_word_count);
    println!("Summary words:        {}", result.summary_word_count);
    println!("Compression:          {:.1}%", result.compression_percent());
    match result.stats.path {
        ReductionPath::SinglePass => println!("Path:                 single pass"),
        ReductionPath::MultiPass => {
            println!(
                "Path:                 {} pass(es), {} chunks ({} failed)",
                result.stats.passes, result.stats.chunks_total, result.stats.chunks_failed
            );
        }
    }
    println!("Summarizer calls:     {}", result.stats.summarize_calls);
    println!("Elapsed:              {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn health(client: &SummarizerClient) -> Result<()> {
    match client.health_check().await {
        Ok(health) => {
            println!("✓ Server at {} is {}", client.endpoint(), health.status);
            println!("✓ Model: {}", health.model);
            if !health.available_models.is_empty() {
                println!("✓ Available: {}", health.available_models.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Health check failed: {}", e);
            eprintln!("\n  Make sure the summarization server is running at {}", client.endpoint());
            std::process::exit(1);
        }
    }
}

fn list_models() {
    let default = ModelInfo::default();
    for model in ModelInfo::catalog() {
        let marker = if model == default { " (default)" } else { "" };
        println!("{}{}", model.name, marker);
        println!("  Best for: {}", model.description);
        println!("  Strength: {}", model.strength);
    }
}
