//! ezconsole CLI entry point.
//!
//! Parses command-line arguments, loads the configuration and dispatches to
//! the appropriate command handler.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ezconsole::commands::{
    config_display_command, config_init_command, loading_command, prompt_command, step_command,
    write_command, PromptKind, StepOptions, WriteOptions,
};
use ezconsole::config::{
    global_config_path, load_config_from_path, load_global_config, Config, LoggingConfig,
};
use ezconsole::output::{print_error, Color, Console, StyleMode};
use ezconsole::{logging, PromptRequest};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ezconsole")]
#[command(
    version,
    about = "Colored output, typed prompts and loading dots for shell scripts",
    after_help = "EXAMPLES:
    ezconsole write --fg red --bg white \"Alert!\"
    name=$(ezconsole prompt \"Your name\")
    port=$(ezconsole prompt --kind integer --default 8080 \"Port\")
    ezconsole loading --duration 3 \"Installing\"
    ezconsole step --count 20 --interval-ms 100 \"Indexing\""
)]
struct Cli {
    /// When to emit colors (overrides `color_mode` in the config file)
    #[arg(long, value_enum, global = true)]
    color: Option<StyleMode>,

    /// Load this config file instead of ~/.config/ezconsole/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log diagnostics at debug level to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write text with a temporary color pair
    Write {
        /// Text to write
        text: String,

        /// Foreground color
        #[arg(long, value_enum)]
        fg: Option<Color>,

        /// Background color
        #[arg(long, value_enum)]
        bg: Option<Color>,

        /// Do not append a newline
        #[arg(short = 'n', long)]
        no_newline: bool,
    },

    /// Ask for a typed value and print it
    #[command(after_help = "BEHAVIOR:
    Empty or unparsable input prints an error and asks again.
    The default is only shown as a hint; an empty answer never selects it.
    With --allow-empty an empty answer yields the type's zero value.")]
    Prompt {
        /// Prompt text
        text: String,

        /// Type of value to accept
        #[arg(short, long, value_enum, default_value_t = PromptKind::Text)]
        kind: PromptKind,

        /// Value shown in parentheses after the prompt
        #[arg(short, long)]
        default: Option<String>,

        /// Accept an empty answer
        #[arg(long)]
        allow_empty: bool,
    },

    /// Show a timed loading animation
    Loading {
        /// Message shown before the dots
        message: String,

        /// Seconds to animate
        #[arg(short, long, default_value_t = 3)]
        duration: u32,

        /// Frames per second (defaults to the config value)
        #[arg(short, long)]
        updates: Option<u32>,

        /// Width of the dot suffix (defaults to the config value)
        #[arg(long)]
        dots: Option<usize>,
    },

    /// Render loading frames one step at a time
    Step {
        /// Message shown before the dots
        message: String,

        /// Number of steps
        #[arg(short, long, default_value_t = 10)]
        count: u32,

        /// Pause between steps in milliseconds
        #[arg(short, long, default_value_t = 250)]
        interval_ms: u64,

        /// Width of the dot suffix (defaults to the config value)
        #[arg(long)]
        dots: Option<usize>,
    },

    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },

    /// Output shell completion script to stdout
    #[command(hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn load_config(cli: &Cli) -> ezconsole::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_global_config()?,
    };
    if let Some(mode) = cli.color {
        config.color_mode = mode;
    }
    Ok(config)
}

/// The file `--config` names, or the global config path.
fn config_path(cli: &Cli) -> ezconsole::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => global_config_path(),
    }
}

fn run(cli: &Cli, config: &Config) -> ezconsole::Result<()> {
    match &cli.command {
        Commands::Write {
            text,
            fg,
            bg,
            no_newline,
        } => write_command(
            config,
            text,
            &WriteOptions {
                foreground: *fg,
                background: *bg,
                no_newline: *no_newline,
            },
        ),

        Commands::Prompt {
            text,
            kind,
            default,
            allow_empty,
        } => {
            let mut request = PromptRequest::new(text.as_str()).allow_empty(*allow_empty);
            request.default_hint = default.clone();
            prompt_command(config, *kind, &request)
        }

        Commands::Loading {
            message,
            duration,
            updates,
            dots,
        } => loading_command(config, message, *duration, *updates, *dots),

        Commands::Step {
            message,
            count,
            interval_ms,
            dots,
        } => step_command(
            config,
            message,
            StepOptions {
                count: *count,
                interval: Duration::from_millis(*interval_ms),
                dots: *dots,
            },
        ),

        Commands::Config { subcommand } => match subcommand {
            None => config_display_command(config, &config_path(cli)?),
            Some(ConfigSubcommand::Init { force }) => {
                config_init_command(config, &config_path(cli)?, *force)
            }
        },

        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "ezconsole",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| {
        let level = if cli.verbose {
            "debug".to_string()
        } else {
            config.logging.level.clone()
        };
        logging::init_with_config(&LoggingConfig { level });
        run(&cli, &config)
    });

    if let Err(e) = result {
        let mut console = Console::stderr(cli.color.unwrap_or_default());
        let _ = report_error(&mut console, &e);
        std::process::exit(1);
    }
}

/// Print `error` with the `Error:` label. `main` sends this to stderr so
/// captured stdout only ever holds command output.
fn report_error<W: std::io::Write>(
    console: &mut Console<W>,
    error: &ezconsole::EzConsoleError,
) -> ezconsole::Result<()> {
    print_error(console, &error.to_string())?;
    console.flush()
}
