use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "stickyreorder - reorder sticky-end sequence assignments in DNA tile sets to minimize predicted spurious binding.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anneal a tile set's sticky-end assignments and write the reordered document.
    Reorder(ReorderArgs),
    /// Score a tile set's current assignment and print the breakdown.
    Score(ScoreArgs),
}

/// Arguments for the `reorder` subcommand.
#[derive(Args, Debug)]
pub struct ReorderArgs {
    /// Path to the input tile-set document (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the reordered tile-set document.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the annealing step budget.
    #[arg(long, value_name = "NUM")]
    pub steps: Option<usize>,

    /// Override the starting (hot) temperature.
    #[arg(long, value_name = "FLOAT")]
    pub t_hot: Option<f64>,

    /// Override the final (cold) temperature.
    #[arg(long, value_name = "FLOAT")]
    pub t_cold: Option<f64>,

    /// Seed the random number generator for reproducible runs.
    #[arg(long, value_name = "NUM")]
    pub seed: Option<u64>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the tile-set document (JSON) to score.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_arguments_parse() {
        let cli = Cli::try_parse_from([
            "stickyreorder",
            "reorder",
            "-i",
            "in.json",
            "-o",
            "out.json",
            "--steps",
            "5000",
            "--seed",
            "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Reorder(args) => {
                assert_eq!(args.steps, Some(5000));
                assert_eq!(args.seed, Some(7));
            }
            _ => panic!("expected reorder subcommand"),
        }
    }

    #[test]
    fn score_requires_an_input_path() {
        let result = Cli::try_parse_from(["stickyreorder", "score"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from([
            "stickyreorder",
            "score",
            "-i",
            "in.json",
            "-q",
            "-v",
        ]);
        assert!(result.is_err());
    }
}
