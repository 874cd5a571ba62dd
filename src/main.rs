// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use poem_corpus::app_config::{self, Config};
use poem_corpus::CorpusBuilder;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the JSON corpus from a directory of poems (default command)
    Build(BuildArgs),

    /// Generate shell completions for poem-corpus
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct BuildArgs {
    /// Directory containing one poem per file
    #[arg(short, long, env = "POEM_CORPUS_INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Destination JSON file
    #[arg(short, long, env = "POEM_CORPUS_OUTPUT")]
    output: Option<PathBuf>,

    /// Filename suffix of poem files; pass "" to match every file
    #[arg(short, long, env = "POEM_CORPUS_EXTENSION", allow_hyphen_values = true)]
    extension: Option<String>,

    /// Add romanized title and lines plus empty translation placeholders
    #[arg(short, long)]
    romanize: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

/// poem-corpus - build a JSON corpus from plain-text poems
///
/// Reads every poem file in a directory, one poem per file, and writes a
/// single JSON array with one record per poem.
#[derive(Parser, Debug)]
#[command(name = "poem-corpus")]
#[command(version)]
#[command(about = "Build a JSON poem corpus from a directory of text files")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "poem-corpus reads a directory of plain-text poems and writes them to a single JSON file.

EXAMPLES:
    poem-corpus                                      # Read ./poems/*.txt into poems_output.json
    poem-corpus -i poems -o poems.json -e \"\"         # Use every file, extension or not
    poem-corpus -r -i kavita -o src/data/poems.json  # Add romanized fields (ITRANS)
    poem-corpus -c corpus.json                       # Load settings from a config file
    poem-corpus completions bash > poem-corpus.bash  # Generate bash completions

CONFIGURATION:
    Settings come from built-in defaults, then the file given with --config,
    then command line flags and their POEM_CORPUS_* environment variables.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Trace lets set_max_level below lower or raise verbosity freely
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "poem-corpus", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Build(args)) => run_build(args),
        None => run_build(cli.build),
    }
}

// @resolves: Defaults, then config file, then command line
fn resolve_config(options: &BuildArgs) -> Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(input_dir) = &options.input_dir {
        config.input_dir = input_dir.clone();
    }

    if let Some(output) = &options.output {
        config.output_file = output.clone();
    }

    if let Some(extension) = &options.extension {
        config.file_extension = extension.clone();
    }

    if options.romanize {
        config.enable_transliteration = true;
    }

    if options.no_progress {
        config.show_progress = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn run_build(options: BuildArgs) -> Result<()> {
    let config = resolve_config(&options)?;
    log::set_max_level(config.log_level.into());

    debug!(
        "Building corpus from {} (extension {:?}, romanize: {})",
        config.input_dir.display(),
        config.file_extension,
        config.enable_transliteration
    );

    let output_file = config.output_file.clone();
    let mut builder = CorpusBuilder::new(config);
    builder.run()?;

    println!("Successfully generated JSON file: {}", output_file.display());
    Ok(())
}
