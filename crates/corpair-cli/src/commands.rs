use anyhow::Result;
use corpair_engine::ExportFormat;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(&cli.config)?;

    match cli.command {
        Commands::Build {
            input_dir,
            output,
            format,
            verbose,
        } => {
            let input_dir = input_dir.unwrap_or_else(|| config.build.input_dir.clone());
            let output = output.unwrap_or_else(|| config.build.output.clone());
            let formats: Vec<ExportFormat> = if format.is_empty() {
                config.build.formats.iter().copied().map(Into::into).collect()
            } else {
                format.into_iter().map(Into::into).collect()
            };
            handlers::build::handle(&input_dir, &output, &formats, verbose)
        }

        Commands::List { dataset, full } => {
            let dataset = dataset.unwrap_or_else(|| config.view.dataset.clone());
            handlers::list::handle(&dataset, full, config.view.truncate_lines)
        }

        Commands::Show {
            index,
            dataset,
            full,
            inlined,
        } => {
            let dataset = dataset.unwrap_or_else(|| config.view.dataset.clone());
            handlers::show::handle(&dataset, index, full, inlined, config.view.truncate_lines)
        }

        Commands::Browse { dataset } => {
            let dataset = dataset.unwrap_or_else(|| config.view.dataset.clone());
            handlers::browse::handle(&dataset, config.view.truncate_lines)
        }
    }
}
