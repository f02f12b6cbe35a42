use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod analyze_cmd;
mod cli;
mod error;
mod shared;
mod table_cmd;
mod zmanim_cmd;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use error::{OutputFormat, output_format_hint, parse_output_format, render_error};
use shared::init_logging;
use table_cmd::run_table;
use zmanim_cmd::run_zmanim;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Analyze(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_analyze(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Table(args) => match run_table(args) {
            Ok(code) => code,
            Err(err) => render_error(&err, OutputFormat::Text),
        },
        Commands::Zmanim(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_zmanim(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
