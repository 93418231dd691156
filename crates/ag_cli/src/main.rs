use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use ag_core::{ArticleLength, ArticleRequest, ArticleTone, Error, Result};
use ag_format::{copy_payload, render, to_screen_html, ClipboardPayload, DisplayBlock, SystemClipboard};
use ag_inference::{Config, ModelBackend, DEFAULT_LANGUAGE};
use clap::{Parser, ValueEnum};
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate SEO articles and format them for display or the clipboard", long_about = None)]
pub struct Cli {
    #[arg(long, value_enum, default_value = "gemini", env = "AG_MODEL", help = "Model to use for generation")]
    model: ModelBackend,
    /// API key for Gemini. Falls back to the API_KEY environment variable.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, help = "Gemini model name (default: gemini-2.5-flash)")]
    model_name: Option<String>,
    #[arg(long)]
    base_url: Option<String>,
    /// Language the article is written in.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate a new article
    Generate {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long, value_enum, default_value = "informative")]
        tone: ArticleTone,
        #[arg(long, value_enum, default_value = "short")]
        length: ArticleLength,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Format existing article text without calling the model
    Render {
        /// File to read, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(long)]
        keyword: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Serve the web form
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,
    /// Also copy the article to the clipboard (rich text, falling back to plain)
    #[arg(long)]
    copy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Plain,
    /// Inline-styled HTML, as written to the clipboard
    Html,
    /// Class based HTML for on-screen display
    Screen,
    Json,
}

impl Cli {
    fn config(&self) -> Config {
        let env = Config::from_env();
        Config {
            backend: self.model,
            api_key: self.api_key.clone().or(env.api_key),
            model_name: self.model_name.clone(),
            base_url: self.base_url.clone(),
            language: self.language.clone(),
        }
    }
}

fn format_output(blocks: &[DisplayBlock], payload: &ClipboardPayload, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => payload.plain_text.clone(),
        OutputFormat::Html => payload.html.clone(),
        OutputFormat::Screen => to_screen_html(blocks),
        OutputFormat::Json => serde_json::to_string_pretty(blocks)?,
    })
}

/// The process exits right after copying, so the clipboard must outlive it.
fn copy_target() -> SystemClipboard {
    SystemClipboard::for_short_lived_process()
}

fn emit(text: &str, keyword: Option<&str>, output: &OutputArgs) -> Result<()> {
    let blocks = render(text, keyword);
    let payload = ClipboardPayload::from_blocks(&blocks);
    println!("{}", format_output(&blocks, &payload, output.format)?.trim_end());

    if output.copy {
        let mut clipboard = copy_target();
        let outcome = copy_payload(&mut clipboard, &payload);
        eprintln!("{}", outcome.user_message());
    }
    Ok(())
}

fn read_input(input: &PathBuf) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate {
            topic,
            keyword,
            tone,
            length,
            output,
        } => {
            let request = ArticleRequest::new(topic, keyword.as_deref(), *tone, *length)?;
            let model = ag_inference::create_model(Some(cli.config())).await?;
            info!("🧠 Generating article with {}", model.name());
            let text = model.generate(&request).await?;
            emit(&text, request.keyword(), output)
        }
        Commands::Render { input, keyword, output } => {
            let text = read_input(input)?;
            emit(&text, keyword.as_deref(), output)
        }
        Commands::Serve { addr } => {
            let model = ag_inference::create_model(Some(cli.config())).await?;
            info!("🧠 Serving with {}", model.name());
            ag_web::serve(*addr, ag_web::AppState::new(model)).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(error: &Error) {
    tracing::debug!("{:?}", error);
    if error.is_generation_failure() {
        eprintln!("Error generating article: {}", error.user_message());
    } else {
        eprintln!("{}", error.user_message());
    }
}
