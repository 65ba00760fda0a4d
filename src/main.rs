// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use cuecheck::app_config::{Config, LogLevel};
use cuecheck::app_controller::Controller;

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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rehearse a character's lines from a script (default command)
    #[command(alias = "run")]
    Rehearse(RehearseArgs),

    /// List the characters found in a script
    Speakers {
        /// Script file to inspect
        #[arg(value_name = "SCRIPT")]
        script_path: PathBuf,

        /// Configuration file path
        #[arg(long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for cuecheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RehearseArgs {
    /// Script file to rehearse from
    #[arg(value_name = "SCRIPT")]
    script_path: PathBuf,

    /// Character to rehearse (prompted from the script's list if omitted)
    #[arg(short, long)]
    character: Option<String>,

    /// Speak the other characters' cues through the configured TTS command
    #[arg(short, long)]
    speak_cues: bool,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// cuecheck - rehearse your lines in the terminal
///
/// Reads a plain-text script, prompts you with the other characters' cues,
/// and checks every line you type against the script word by word.
#[derive(Parser, Debug)]
#[command(name = "cuecheck")]
#[command(version = "0.1.0")]
#[command(about = "Script line rehearsal with word-level feedback")]
#[command(long_about = "cuecheck walks a script scene by scene for one chosen character.
Other characters' lines are shown (and optionally spoken); your own lines are
typed from memory and checked word by word against the script.

EXAMPLES:
    cuecheck hamlet.txt                       # Pick a character interactively
    cuecheck -c hamlet hamlet.txt             # Rehearse HAMLET
    cuecheck -s hamlet.txt                    # Speak the other characters' cues
    cuecheck speakers hamlet.txt              # List the script's characters
    cuecheck completions bash > cuecheck.bash # Generate bash completions

SCRIPT FORMAT:
    Lines starting with '#' are comments. A line like '=HAMLET=' starts that
    character's speech; the following lines up to the next header are the
    dialogue. Both conventions can be changed in the config file.

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Script file to rehearse from
    #[arg(value_name = "SCRIPT")]
    script_path: Option<PathBuf>,

    /// Character to rehearse (prompted from the script's list if omitted)
    #[arg(short, long)]
    character: Option<String>,

    /// Speak the other characters' cues through the configured TTS command
    #[arg(short, long)]
    speak_cues: bool,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "cuecheck", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Speakers {
            script_path,
            config_path,
        }) => {
            let config = load_or_create_config(&config_path, None)?;
            let controller = Controller::with_config(config)?;

            let scene = controller.load_scene(&script_path)?;
            for speaker in &scene.speakers {
                println!("{}", speaker);
            }
            Ok(())
        }
        Some(Commands::Rehearse(args)) => run_rehearse(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let script_path = cli.script_path.ok_or_else(|| {
                anyhow::anyhow!("SCRIPT is required when no subcommand is specified")
            })?;

            let rehearse_args = RehearseArgs {
                script_path,
                character: cli.character,
                speak_cues: cli.speak_cues,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_rehearse(rehearse_args)
        }
    }
}

fn run_rehearse(options: RehearseArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let mut config = load_or_create_config(
        &options.config_path,
        options.log_level.clone().map(|l| l.into()),
    )?;

    // CLI flag takes precedence over the config file
    if options.speak_cues {
        config.playback.speak_cues = true;
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller.run(&options.script_path, options.character.as_deref())
}

/// Load the JSON config file, creating a default one when missing
fn load_or_create_config(config_path: &str, log_level: Option<LogLevel>) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(level) = log_level {
            config.log_level = level;
        }

        Ok(config)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();
        if let Some(level) = log_level {
            config.log_level = level;
        }

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}
