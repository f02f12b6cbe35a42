use std::process::ExitCode;

use zmanim_core::catalog::zmanim_in_category;
use zmanim_core::{Category, ZmanOption};

use crate::cli::ZmanimArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::parse_category;

pub fn run_zmanim(args: ZmanimArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let categories = match &args.category {
        Some(c) => vec![parse_category(c)?],
        None => Category::ALL.to_vec(),
    };

    match output_format {
        OutputFormat::Json => {
            let options: Vec<&ZmanOption> = categories
                .iter()
                .flat_map(|c| zmanim_in_category(*c))
                .collect();
            let json = serde_json::to_string_pretty(&options)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for category in categories {
                println!("{}", category);
                for option in zmanim_in_category(category) {
                    println!("  {:<14} {}", option.id, option.label);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
