//! Command-line interface definition

use crate::output::SortKey;
use clap::Parser;

/// apartment-search: list ULI apartments available in Madison
///
/// Crawls the built-in ULI search pages, removes duplicate units and prints
/// one line per unit, optionally sorted.
#[derive(Parser, Debug)]
#[command(name = "apartment-search")]
#[command(version)]
#[command(about = "List ULI apartments from the built-in searches", long_about = None)]
pub struct Cli {
    /// Log crawl progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Sort by a column: "r": rent, "d": available date, "s": square feet
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<SortKey>,
}
