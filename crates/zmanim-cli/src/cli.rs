use clap::{Parser, Subcommand};

/// Compare zmanim across locations and dates
#[derive(Parser, Debug)]
#[command(name = "zmanim", version)]
#[command(about = "Compare zmanim across locations and dates")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank locations per date, summarize extremes and pairwise ordering
    Analyze(AnalyzeArgs),
    /// Export a tab-separated table of local times
    Table(TableArgs),
    /// List the known zmanim
    Zmanim(ZmanimArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Comma-separated zman ids (e.g., sunrise,sunset)
    #[arg(short, long, default_value = "sunrise,sunset,chatzot")]
    pub zmanim: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Dataset file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct TableArgs {
    /// Comma-separated zman ids (e.g., sunrise,sunset)
    #[arg(short, long, default_value = "sunrise,sunset,chatzot")]
    pub zmanim: String,

    /// Dataset file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug)]
pub struct ZmanimArgs {
    /// Only list one category: morning, afternoon, evening, night
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
