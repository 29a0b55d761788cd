mod amortize;
mod analyze;
mod fleet;
mod output;

use clap::{Parser, Subcommand};

pub use self::{amortize::amortize, analyze::analyze};
use crate::cli::{amortize::AmortizeArgs, analyze::AnalyzeArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: split the fuel bill into idle and moving parts and estimate the savings.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),

    /// Simulate the cumulative savings against the monitoring costs month by month.
    #[clap(name = "amortize")]
    Amortize(Box<AmortizeArgs>),
}
