use std::fmt::Write;
use std::process::ExitCode;

use zmanim_core::{Analysis, AnalysisOptions, ComparisonEntry, ZmanAnalysis, analyze};

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{display_date, load_dataset, parse_zmanim};

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let zmanim = parse_zmanim(&args.zmanim)?;
    let dataset = load_dataset(&args.input, args.stdin)?;

    let analysis = analyze(&dataset, &AnalysisOptions::new(&zmanim));

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&analysis));
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn at(entry: &ComparisonEntry) -> String {
    format!("{} at {}", display_date(&entry.date), entry.local_time)
}

fn render_zman(out: &mut String, zman: &ZmanAnalysis, location_count: usize) {
    let _ = writeln!(out, "{}", zman.label);

    let Some(overall) = &zman.overall else {
        let _ = writeln!(out, "  No data");
        return;
    };

    let name = zman.label.to_lowercase();
    let _ = writeln!(out, "  Overall:");
    let _ = writeln!(
        out,
        "    Earliest {}: {} on {}",
        name,
        overall.earliest.location,
        at(&overall.earliest)
    );
    let _ = writeln!(
        out,
        "    Latest {}: {} on {}",
        name,
        overall.latest.location,
        at(&overall.latest)
    );

    let _ = writeln!(out, "  By location:");
    for summary in &zman.by_location {
        let _ = writeln!(
            out,
            "    {}: earliest {}, latest {}",
            summary.location,
            at(&summary.earliest),
            at(&summary.latest)
        );
    }

    let _ = writeln!(out, "  By date:");
    for day in &zman.by_date {
        let ranking: Vec<String> = day
            .ranking
            .iter()
            .map(|e| format!("{} {}", e.location, e.local_time))
            .collect();
        let _ = write!(out, "    {}: {}", day.date, ranking.join(", "));
        if let Some(difference) = day.difference {
            let _ = write!(out, " ({})", difference);
        }
        out.push('\n');
    }

    if location_count > 1 {
        let _ = writeln!(out, "  Location comparisons:");
        let statements: Vec<String> = zman
            .relations
            .pairs()
            .iter()
            .filter_map(|p| p.statement())
            .collect();
        if statements.is_empty() {
            let _ = writeln!(out, "    No consistent ordering");
        }
        for statement in statements {
            let _ = writeln!(out, "    {}", statement);
        }
    }
}

/// Narrative report, one block per zman separated by a blank line.
pub fn render_text(analysis: &Analysis) -> String {
    let mut out = String::new();
    for (i, zman) in analysis.zmanim.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_zman(&mut out, zman, analysis.locations.len());
    }
    out
}
