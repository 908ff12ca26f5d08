#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use dressing_core::ErrorCode;
use dressing_core::config::load_config;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dress: layered dressing order from clothing dependencies",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Config file. Defaults to ./dress.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute a dressing order",
        long_about = "Read `dependency -> dependent` pairs and print the steps in which the items can be put on.",
        after_help = "EXAMPLES:\n    # Order pairs from a file\n    dress order wardrobe.txt\n\n    # Order pairs from stdin\n    printf 'socks -> shoes\\n' | dress order\n\n    # Emit machine-readable output\n    dress order wardrobe.json --format json"
    )]
    Order(cmd::order::OrderArgs),

    #[command(
        about = "Order the built-in suit wardrobe",
        after_help = "EXAMPLES:\n    # Show the demo steps\n    dress demo\n\n    # Show what each item waits on\n    dress demo --explain"
    )]
    Demo(cmd::demo::DemoArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    dress completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

/// Fallback filter when `DRESS_LOG` is unset. Covers both the library
/// (`dressing_core`) and this binary (`dress`).
fn default_log_filter(verbose: bool, debug_env: bool) -> &'static str {
    if verbose || debug_env {
        "dressing=debug,dress=debug,info"
    } else {
        "dressing=info,dress=info,warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("DRESS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(default_log_filter(verbose, env::var("DEBUG").is_ok()))
    });

    let format = env::var("DRESS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Commands::Completions(args) = &cli.command {
        return cmd::completions::run_completions(args.shell, &mut Cli::command());
    }

    let cwd = env::current_dir()?;
    let config = match load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            let mode = resolve_output_mode(cli.format, cli.json, None);
            let code = ErrorCode::ConfigParseError;
            render_error(
                mode,
                &CliError::with_details(
                    format!("{e:#}"),
                    code.hint().unwrap_or_else(|| code.message()),
                    code.code(),
                ),
            )?;
            return Err(e);
        }
    };

    let output = resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());

    match &cli.command {
        Commands::Order(args) => cmd::order::run_order(args, &config, output),
        Commands::Demo(args) => cmd::demo::run_demo(args, output),
        Commands::Completions(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_parses_after_subcommand() {
        let cli = Cli::parse_from(["dress", "demo", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Demo(_)));
    }

    #[test]
    fn format_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["dress", "--format", "text", "order", "edges.txt"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
        assert!(matches!(cli.command, Commands::Order(_)));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["dress", "order", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn verbose_flag_selects_debug_filter() {
        let cli = Cli::parse_from(["dress", "-v", "demo"]);
        assert!(cli.verbose);
        assert_eq!(
            default_log_filter(cli.verbose, false),
            "dressing=debug,dress=debug,info"
        );
        assert_eq!(
            default_log_filter(false, true),
            "dressing=debug,dress=debug,info"
        );
        assert_eq!(default_log_filter(false, false), "dressing=info,dress=info,warn");
    }

    #[test]
    fn default_filters_parse() {
        for verbose in [false, true] {
            let directives = default_log_filter(verbose, false);
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
