// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use transdb::app_config::{self, Config};
use transdb::language_utils::{describe_language, language_codes_match, validate_language_code};
use transdb::{SentencePair, TranslationDatabase};

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
    /// Create an empty database file
    New {
        /// Database file (.xlsx or .json)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// First-language identifier (e.g. 'EN')
        #[arg(short = 'a', long)]
        first: Option<String>,

        /// Second-language identifier (e.g. 'DE')
        #[arg(short = 'b', long)]
        second: Option<String>,
    },

    /// Print the languages and lists of a database
    Show {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Only print this list
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Add an empty named list
    AddList {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Name of the new list
        name: String,
    },

    /// Append a sentence pair to a list
    AddPair {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Name of the list
        list: String,

        /// Sentence in the first language
        first: String,

        /// Sentence in the second language
        second: String,
    },

    /// Look up the translation of a sentence
    Lookup {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Name of the list to search
        list: String,

        /// Sentence to translate
        sentence: String,

        /// Language of the sentence; searches both sides when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Convert a database between .xlsx and .json
    Convert {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Generate shell completions for transdb
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transdb - bilingual sentence-pair dictionaries
///
/// Stores sentence pairs and their translations in named lists, saved as
/// .xlsx workbooks or .json documents.
#[derive(Parser, Debug)]
#[command(name = "transdb")]
#[command(version)]
#[command(about = "Bilingual sentence-pair dictionary tool")]
#[command(long_about = "transdb keeps sentence pairs in named lists and saves them as .xlsx or .json files.

EXAMPLES:
    transdb new words.json -a EN -b DE               # Create an empty database
    transdb add-list words.json greetings            # Add a list
    transdb add-pair words.json greetings hello hallo
    transdb lookup words.json greetings hallo -l DE  # Prints 'hello'
    transdb convert words.json words.xlsx            # Save as a workbook
    transdb completions bash > transdb.bash          # Generate bash completions

CONFIGURATION:
    Configuration is read from transdb.json by default. You can specify a
    different file with --config. Missing files fall back to defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "transdb.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Replace existing output files
    #[arg(short, long, global = true)]
    force: bool,
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

    // @returns: ANSI colour and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
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
            let (colour, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", colour, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; log::set_max_level narrows it later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = Config::load_or_default(&cli.config_path)?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let overwrite = cli.force || config.overwrite;
    run(cli.command, &config, overwrite)
}

fn run(command: Commands, config: &Config, overwrite: bool) -> Result<()> {
    match command {
        Commands::New { path, first, second } => {
            let first = first.unwrap_or_else(|| config.default_languages.first.clone());
            let second = second.unwrap_or_else(|| config.default_languages.second.clone());
            for identifier in [&first, &second] {
                if validate_language_code(identifier).is_err() {
                    warn!("'{}' is not an ISO 639 language code, storing it as-is", identifier);
                }
            }
            if language_codes_match(&first, &second) {
                warn!("'{}' and '{}' name the same language", first, second);
            }

            let mut db = TranslationDatabase::new(&first, &second)?;
            db.info_mut().set_field("creator", config.creator.as_str())?;
            db.save(&path, overwrite)
                .with_context(|| format!("Failed to create database {:?}", path))?;
            info!("Created {:?} ({} / {})", path, describe_language(&first), describe_language(&second));
        }
        Commands::Show { path, list } => {
            let db = open(&path)?;
            let (first, second) = db.info().languages();
            println!("languages: {} / {}", describe_language(first), describe_language(second));
            if let Some(creator) = db.info().creator() {
                println!("creator: {}", creator);
            }
            match list {
                Some(name) => {
                    let pairs = db.get(&name).ok_or_else(|| anyhow!("No list named '{}' in {:?}", name, path))?;
                    println!("{}: {}", name, pairs);
                }
                None => {
                    for (name, pairs) in db.iter() {
                        println!("{}: {}", name, pairs);
                    }
                }
            }
        }
        Commands::AddList { path, name } => {
            let mut db = open(&path)?;
            db.add_empty(name.as_str())?;
            db.save(&path, true)?;
            info!("Added list '{}' to {:?}", name, path);
        }
        Commands::AddPair { path, list, first, second } => {
            let mut db = open(&path)?;
            let pair = SentencePair::new(first, second)?;
            let pairs = db
                .get_mut(&list)
                .ok_or_else(|| anyhow!("No list named '{}' in {:?}", list, path))?;
            pairs.append(pair)?;
            debug!("List '{}' now holds {} pair(s)", list, pairs.len());
            db.save(&path, true)?;
        }
        Commands::Lookup { path, list, sentence, lang } => {
            let db = open(&path)?;
            match db.get_translation(&list, &sentence, lang.as_deref())? {
                Some(translation) => println!("{}", translation),
                None => {
                    warn!("No translation found for '{}' in list '{}'", sentence, list);
                    std::process::exit(1);
                }
            }
        }
        Commands::Convert { input, output } => {
            let db = open(&input)?;
            db.save(&output, overwrite)
                .with_context(|| format!("Failed to write {:?}", output))?;
            info!("Converted {:?} to {:?} ({} list(s))", input, output, db.len());
        }
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transdb", &mut std::io::stdout());
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<TranslationDatabase> {
    TranslationDatabase::from_file(path).with_context(|| format!("Failed to load database {:?}", path))
}
