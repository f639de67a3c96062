use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use corpair_engine::ExportFormat;
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "corpair")]
#[command(about = "Build and browse before/after datasets from generated C programs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "corpair.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Pair generated programs and build the dataset")]
    Build {
        #[arg(long)]
        input_dir: Option<PathBuf>,

        #[arg(
            long,
            help = "Output path prefix; the format extension is appended per export"
        )]
        output: Option<PathBuf>,

        #[arg(long, value_enum, num_args = 1..)]
        format: Vec<FormatArg>,

        #[arg(long, help = "List every unmatched file instead of just the count")]
        verbose: bool,
    },

    #[command(about = "Print every record in the dataset")]
    List {
        #[arg(long)]
        dataset: Option<PathBuf>,

        #[arg(long)]
        full: bool,
    },

    #[command(about = "Show one record by index")]
    Show {
        index: usize,

        #[arg(long)]
        dataset: Option<PathBuf>,

        #[arg(long)]
        full: bool,

        #[arg(long, help = "Show only the inlined regions of the after text")]
        inlined: bool,
    },

    #[command(about = "Browse the dataset interactively")]
    Browse {
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

/// Dataset formats as spelled on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatArg {
    Json,
    Jsonl,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Jsonl => ExportFormat::Jsonl,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_accepts_multiple_formats() {
        let cli = Cli::parse_from(["corpair", "build", "--format", "json", "jsonl", "csv"]);
        let Commands::Build { format, .. } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(format, [FormatArg::Json, FormatArg::Jsonl, FormatArg::Csv]);
    }

    #[test]
    fn test_build_flags_default_to_none() {
        let cli = Cli::parse_from(["corpair", "build"]);
        let Commands::Build {
            input_dir,
            output,
            format,
            verbose,
        } = cli.command
        else {
            panic!("expected build");
        };
        assert!(input_dir.is_none());
        assert!(output.is_none());
        assert!(format.is_empty());
        assert!(!verbose);
    }

    #[test]
    fn test_show_takes_positional_index() {
        let cli = Cli::parse_from(["corpair", "show", "3", "--inlined"]);
        let Commands::Show { index, inlined, .. } = cli.command else {
            panic!("expected show");
        };
        assert_eq!(index, 3);
        assert!(inlined);
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::parse_from(["corpair", "list", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn test_format_arg_maps_onto_export_format() {
        assert_eq!(ExportFormat::from(FormatArg::Json), ExportFormat::Json);
        assert_eq!(ExportFormat::from(FormatArg::Jsonl), ExportFormat::Jsonl);
        assert_eq!(ExportFormat::from(FormatArg::Csv), ExportFormat::Csv);
    }
}
