// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error};
use std::io::Write;
use std::path::PathBuf;

use legendcount::app_config::{Config, LogLevel};
use legendcount::{Controller, OutputFormat, SortOrder, TokenBoundary};

/// CLI Wrapper for SortOrder to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSortOrder {
    Asc,
    Desc,
}

impl From<CliSortOrder> for SortOrder {
    fn from(cli_order: CliSortOrder) -> Self {
        match cli_order {
            CliSortOrder::Asc => SortOrder::Asc,
            CliSortOrder::Desc => SortOrder::Desc,
        }
    }
}

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Table,
    Words,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Words => OutputFormat::Words,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI Wrapper for TokenBoundary to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTokenBoundary {
    Space,
    Whitespace,
}

impl From<CliTokenBoundary> for TokenBoundary {
    fn from(cli_boundary: CliTokenBoundary) -> Self {
        match cli_boundary {
            CliTokenBoundary::Space => TokenBoundary::Space,
            CliTokenBoundary::Whitespace => TokenBoundary::Whitespace,
        }
    }
}

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
    /// Count word frequencies in a folder of subtitles (default command)
    Count(CountArgs),

    /// Generate shell completions for legendcount
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct CountArgs {
    /// Directory holding the subtitle files
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// File name suffix of the subtitle files
    #[arg(short, long)]
    extension: Option<String>,

    /// Also search nested folders
    #[arg(short, long)]
    recursive: bool,

    /// Order of the word list by quantity
    #[arg(short, long, value_enum)]
    order: Option<CliSortOrder>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Word boundary rule
    #[arg(short, long, value_enum)]
    boundary: Option<CliTokenBoundary>,

    /// Leave out words seen fewer times than this
    #[arg(short, long)]
    min_count: Option<usize>,

    /// Print at most this many words
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Files read at the same time (0 reads them all at once)
    #[arg(long)]
    max_concurrent_reads: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// legendcount - word frequencies for subtitle files
///
/// Reads every subtitle file in a folder, strips sequence numbers, timing
/// lines and markup, and counts how often each word is spoken.
#[derive(Parser, Debug)]
#[command(name = "legendcount")]
#[command(version)]
#[command(about = "Word frequency counter for SRT subtitle folders")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "legendcount reads the subtitle files of a folder and counts how often each word appears.

EXAMPLES:
    legendcount                                  # Count the ./legends folder
    legendcount movies/subs -o desc -n 20        # Top 20 words of another folder
    legendcount movies/subs -f json              # Machine-readable output
    legendcount movies/subs -b whitespace        # Treat line breaks as word boundaries
    legendcount count completions                # Folder named like a subcommand needs `count`
    legendcount completions bash > legendcount.bash

A folder literally named `count` or `completions` is read as a subcommand.
`legendcount count <DIRECTORY>` always counts the given folder.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    count: CountArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
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

#[tokio::main]
async fn main() {
    // Info until the configuration says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "legendcount", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Count(args)) => run_count(args).await,
        None => run_count(cli.count).await,
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

// Merges the config file (if any) with the command line overrides
fn resolve_config(options: CountArgs) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };

    if let Some(directory) = options.directory {
        config.directory = directory;
    }
    if let Some(extension) = options.extension {
        config.extension = extension;
    }
    if options.recursive {
        config.recursive = true;
    }
    if let Some(order) = options.order {
        config.sort_order = order.into();
    }
    if let Some(format) = options.format {
        config.output_format = format.into();
    }
    if let Some(boundary) = options.boundary {
        config.token_boundary = boundary.into();
    }
    if let Some(min_count) = options.min_count {
        config.min_count = min_count;
    }
    if let Some(limit) = options.limit {
        config.limit = Some(limit);
    }
    if let Some(max_concurrent_reads) = options.max_concurrent_reads {
        config.max_concurrent_reads = max_concurrent_reads;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    Ok(config)
}

async fn run_count(options: CountArgs) -> Result<()> {
    let config = resolve_config(options)?;
    log::set_max_level(config.log_level.to_level_filter());

    debug!(
        "Counting {:?} files in {:?} (order: {}, boundary: {})",
        config.extension, config.directory, config.sort_order, config.token_boundary
    );

    let controller = Controller::with_config(config)?;
    controller.run_to_stdout().await
}
