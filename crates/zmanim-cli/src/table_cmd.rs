use std::process::ExitCode;

use zmanim_core::catalog::order_selection;
use zmanim_core::to_tsv;

use crate::cli::TableArgs;
use crate::error::{CliResult, EXIT_SUCCESS};
use crate::shared::{load_dataset, parse_zmanim};

pub fn run_table(args: TableArgs) -> CliResult<ExitCode> {
    let zmanim = order_selection(&parse_zmanim(&args.zmanim)?);
    let dataset = load_dataset(&args.input, args.stdin)?;

    print!("{}", to_tsv(&dataset, &zmanim));

    Ok(ExitCode::from(EXIT_SUCCESS))
}
