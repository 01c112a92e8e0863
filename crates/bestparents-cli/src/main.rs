#![forbid(unsafe_code)]

mod cmd;
mod load;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "bp: entropy-driven Bayesian network structure search",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (default: pretty on a terminal, text when piped).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Alias for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Learn a network structure from a CSV file",
        long_about = "Score every attribute pair by conditional entropy and greedily add the strongest edges under the configured degree limits.",
        after_help = "EXAMPLES:\n    # Wave search from the class column (last attribute)\n    bp learn weather.csv\n\n    # Full-list search, up to two parents per attribute\n    bp learn weather.csv --strategy full-list --max-parents 2\n\n    # Emit machine-readable output\n    bp learn weather.csv --format json"
    )]
    Learn(cmd::learn::LearnArgs),

    #[command(
        about = "List ranked dependency rules",
        long_about = "Print every attribute pair's winning rule (child <- parent), ordered by conditional entropy.",
        after_help = "EXAMPLES:\n    # Ten strongest rules\n    bp rules weather.csv --limit 10\n\n    # Emit machine-readable output\n    bp rules weather.csv --json"
    )]
    Rules(cmd::rules::RulesArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("BESTPARENTS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "bestparents=debug,info"
        } else {
            "bestparents=info,warn"
        })
    });

    let format = env::var("BESTPARENTS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

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

    let project_root = env::current_dir()?;
    let output = cli.output_mode();

    match cli.command {
        Commands::Learn(ref args) => cmd::learn::run_learn(args, output, &project_root),
        Commands::Rules(ref args) => cmd::rules::run_rules(args, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestparents_core::StrategyKind;

    #[test]
    fn learn_parses_strategy_and_limits() {
        let cli = Cli::parse_from([
            "bp",
            "learn",
            "data.csv",
            "--strategy",
            "full-list",
            "--max-parents",
            "2",
            "--root",
            "0",
        ]);
        match cli.command {
            Commands::Learn(args) => {
                assert_eq!(args.strategy, Some(StrategyKind::FullList));
                assert_eq!(args.max_parents, Some(2));
                assert_eq!(args.max_children, None);
                assert_eq!(args.root, Some(0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        let err = Cli::try_parse_from(["bp", "learn", "data.csv", "--strategy", "greedy"])
            .expect_err("unknown strategy");
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn format_flag_parses_after_subcommand() {
        let cli = Cli::parse_from(["bp", "rules", "data.csv", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn hidden_json_flag_selects_json() {
        let cli = Cli::parse_from(["bp", "--json", "rules", "data.csv", "-n", "3"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
        match cli.command {
            Commands::Rules(args) => assert_eq!(args.limit, Some(3)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["bp", "learn", "x.csv"],
            vec!["bp", "learn", "x.csv", "--config", "bp.toml"],
            vec!["bp", "rules", "x.csv"],
            vec!["bp", "rules", "x.csv", "--limit", "5"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "Failed to parse: {args:?}: {:?}", result.err());
        }
    }
}
