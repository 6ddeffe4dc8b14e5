// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::{Read, Write};

use cascadeanime::app_config::{Config, LogLevel};
use cascadeanime::translation::SegmentOutcome;
use cascadeanime::providers::Provider;
use cascadeanime::{Controller, get_language_name};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text given as an argument or on stdin
    Translate(TranslateArgs),

    /// Fetch an anime from Jikan and print its translated synopsis
    Synopsis {
        /// MyAnimeList id of the anime
        #[arg(value_name = "ANIME_ID")]
        id: u64,
    },

    /// Generate shell completions for cascadeanime
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Text to translate; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Source language code (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'es')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Maximum characters per translated segment
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Print the status of every segment after the translation
    #[arg(short, long)]
    report: bool,
}

/// CascadeAnime - synopsis translation for the anime catalog
#[derive(Parser, Debug)]
#[command(name = "cascadeanime")]
#[command(version)]
#[command(about = "Chunked, retrying translation of anime synopses")]
#[command(long_about = "Translates long text through the MyMemory API in bounded segments.
Segments that keep failing are left in the source language instead of failing the whole text.

EXAMPLES:
    cascadeanime translate \"A long synopsis. With sentences.\"
    cat synopsis.txt | cascadeanime translate --report
    cascadeanime translate -s en -t fr \"Hello there.\"
    cascadeanime synopsis 5114                 # Fullmetal Alchemist: Brotherhood
    cascadeanime completions bash > cascadeanime.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Skip the translation endpoint check before translating
    #[arg(long, global = true)]
    skip_check: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "cascadeanime", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => {
            let mut config = load_config(&cli.config_path, cli.log_level.is_none())?;
            if let Some(source) = &args.source_language {
                config.source_language = source.clone();
            }
            if let Some(target) = &args.target_language {
                config.target_language = target.clone();
            }
            if let Some(size) = args.max_chunk_size {
                config.translation.max_chunk_size = size;
            }
            run_translate(config, args, cli.skip_check).await
        }
        Commands::Synopsis { id } => {
            let config = load_config(&cli.config_path, cli.log_level.is_none())?;
            run_synopsis(config, id, cli.skip_check).await
        }
    }
}

fn load_config(path: &str, apply_log_level: bool) -> Result<Config> {
    let config = Config::load_or_create(path)?;
    if apply_log_level {
        log::set_max_level(config.log_level.to_level_filter());
    }
    Ok(config)
}

async fn run_translate(config: Config, args: TranslateArgs, skip_check: bool) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    info!(
        "Translating from {} to {}",
        get_language_name(&config.source_language)?,
        get_language_name(&config.target_language)?
    );

    let controller = Controller::with_config(config)?;
    check_endpoint(&controller, skip_check).await;
    let total = controller.translator().segments(&text).len();

    let progress_bar = if total > 1 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} segments")
                .map_err(|e| anyhow!("Invalid progress template: {}", e))?
                .progress_chars("#>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let bar = progress_bar.clone();
    let report = controller
        .translate_text(&text, move |done, _| bar.set_position(done as u64))
        .await;
    progress_bar.finish_and_clear();

    println!("{}", report.text());

    if args.report {
        for (index, segment) in report.segments.iter().enumerate() {
            let status = match &segment.outcome {
                SegmentOutcome::Translated(_) => "translated",
                SegmentOutcome::Fallback(_) => "kept original",
            };
            eprintln!(
                "segment {}: {} after {} attempt(s), {} chars",
                index + 1,
                status,
                segment.attempts,
                segment.source.chars().count()
            );
        }
    }

    Ok(())
}

// Translation still runs on failure; segments fall back to the source text
async fn check_endpoint<P: Provider>(controller: &Controller<P>, skip_check: bool) {
    if skip_check {
        return;
    }
    if let Err(e) = controller.test_connection().await {
        warn!("{:#}", e);
    }
}

async fn run_synopsis(config: Config, id: u64, skip_check: bool) -> Result<()> {
    let controller = Controller::with_config(config)?;
    check_endpoint(&controller, skip_check).await;
    let details = controller.anime_with_translated_synopsis(id).await?;

    println!("{}", details.display_title());
    if let Some(kind) = &details.kind {
        let episodes = details.episodes.map(|e| e.to_string()).unwrap_or_else(|| "?".to_string());
        println!("{} - {} eps", kind, episodes);
    }
    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}", genres.join(", "));
    }
    println!();
    println!("{}", details.synopsis.as_deref().unwrap_or("(no synopsis)"));

    Ok(())
}
