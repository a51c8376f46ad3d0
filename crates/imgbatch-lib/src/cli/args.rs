use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        output_dir: Option<String>,
        delay_ms: Option<u64>,
    },
    List {
        config_path: Option<String>,
        output_dir: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Fetch {
            config_path: None,
            output_dir: None,
            delay_ms: None,
        }
    }
}

pub struct Args {
    pub command: Command,
}

#[derive(Debug, Parser)]
#[command(
    name = "imgbatch",
    version,
    about = "Download a fixed batch of images over HTTP into a local folder"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every image in the batch (the default)
    Fetch {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file (YAML, TOML or JSON)"
        )]
        config: Option<String>,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the folder images are saved to (default: images)"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "delay-ms",
            value_name = "MS",
            help = "Overrides the pause after each download (default: 500)"
        )]
        delay_ms: Option<u64>,
    },

    /// Print each URL in the batch with the path it would be saved to
    List {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file (YAML, TOML or JSON)"
        )]
        config: Option<String>,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the folder images would be saved to"
        )]
        output_dir: Option<String>,
    },
}

impl From<Option<CliCommand>> for Command {
    fn from(command: Option<CliCommand>) -> Self {
        match command {
            None => Command::default(),
            Some(CliCommand::Fetch {
                config,
                output_dir,
                delay_ms,
            }) => Command::Fetch {
                config_path: config,
                output_dir,
                delay_ms,
            },
            Some(CliCommand::List { config, output_dir }) => Command::List {
                config_path: config,
                output_dir,
            },
        }
    }
}

fn log_level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG`-style directives in `env_directives` take precedence over
/// `log_level`.
fn build_env_filter(log_level: Level, env_directives: Option<&str>) -> EnvFilter {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse_lossy(env_directives.unwrap_or_default());
    // Connection pool chatter drowns the batch log at trace level.
    if let Ok(directive) = "hyper_util=warn".parse::<Directive>() {
        env_filter = env_filter.add_directive(directive);
    }
    env_filter
}

fn init_tracing(log_level: Level) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(log_level, env_directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = log_level_for(cli.verbose);
    init_tracing(log_level);

    Args {
        command: Command::from(cli.command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn parse(argv: &[&str]) -> (Command, Level) {
        let cli = Cli::try_parse_from(argv.iter().copied()).expect("arguments should parse");
        (Command::from(cli.command), log_level_for(cli.verbose))
    }

    #[test]
    fn test_no_subcommand_means_fetch() {
        let (command, level) = parse(&["imgbatch"]);
        assert_eq!(command, Command::default());
        assert_eq!(level, Level::INFO);
    }

    #[test]
    fn test_fetch_overrides() {
        let (command, level) = parse(&[
            "imgbatch",
            "-vv",
            "fetch",
            "--output-dir",
            "gallery",
            "--delay-ms",
            "0",
            "-c",
            "imgbatch.yaml",
        ]);
        assert_eq!(
            command,
            Command::Fetch {
                config_path: Some("imgbatch.yaml".to_string()),
                output_dir: Some("gallery".to_string()),
                delay_ms: Some(0),
            }
        );
        assert_eq!(level, Level::TRACE);
    }

    #[test]
    fn test_list_subcommand() {
        let (command, level) = parse(&["imgbatch", "list", "-o", "out", "-v"]);
        assert_eq!(
            command,
            Command::List {
                config_path: None,
                output_dir: Some("out".to_string()),
            }
        );
        assert_eq!(level, Level::DEBUG);
    }

    #[test]
    fn test_env_filter_follows_verbosity() {
        for (verbose, expected) in [
            (0, LevelFilter::INFO),
            (1, LevelFilter::DEBUG),
            (2, LevelFilter::TRACE),
        ] {
            let filter = build_env_filter(log_level_for(verbose), None);
            assert_eq!(filter.max_level_hint(), Some(expected));
        }
    }

    #[test]
    fn test_env_directives_override_verbosity() {
        let filter = build_env_filter(Level::INFO, Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = build_env_filter(Level::INFO, Some("imgbatch_lib=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        assert!(Cli::try_parse_from(["imgbatch", "fetch", "--delay-ms", "-5"]).is_err());
    }
}
