//! `org` and `todo` commands: convert files between todo.txt and Org mode.

use crate::{
    libs::{
        config::Config,
        convert::{convert_files, ConvertOptions, Direction},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the converted text instead of writing sibling files
    #[arg(long)]
    stdout: bool,

    /// Overwrite existing output files regardless of the configuration
    #[arg(short, long)]
    force: bool,

    /// Do not print the summary table
    #[arg(short, long)]
    quiet: bool,
}

pub async fn cmd(args: ConvertArgs, direction: Direction) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_warning!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        }
    };

    let options = ConvertOptions {
        direction,
        overwrite: args.force || config.overwrite,
        to_stdout: args.stdout,
    };

    for file in &args.files {
        msg_debug!(Message::ConvertingFile {
            input: file.display().to_string(),
            target: direction.extension().to_string(),
        });
    }

    let results = convert_files(args.files, options).await;

    let mut summaries = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(summary) => {
                match (&summary.content, &summary.output) {
                    (Some(content), _) => {
                        if content.ends_with('\n') {
                            print!("{}", content);
                        } else {
                            println!("{}", content);
                        }
                        msg_debug!(Message::FilePrinted(path.display().to_string()));
                    }
                    (None, Some(output)) => msg_success!(Message::FileConverted {
                        input: path.display().to_string(),
                        output: output.display().to_string(),
                        tasks: summary.tasks,
                    }),
                    (None, None) => {}
                }
                summaries.push(summary);
            }
            Err(e) => {
                failed += 1;
                msg_error!(Message::FileConvertFailed {
                    input: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    // --stdout output carries only converted text.
    if config.summary && !args.quiet && !args.stdout && !summaries.is_empty() {
        msg_print!(Message::SummaryHeader, true);
        View::summaries(&summaries);
    }

    msg_debug!(Message::ConversionFinished {
        converted: summaries.len(),
        failed,
    });

    if failed > 0 {
        msg_bail_anyhow!(Message::ConversionFailed(failed));
    }

    Ok(())
}
