//! Command line arguments

use crate::state::OfferingContext;
use clap::Parser;
use std::path::PathBuf;

/// offering-rating - rate and comment on a catalog offering
#[derive(Debug, Parser)]
#[command(name = "offering-rating")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Organization owning the offering
    #[arg(long)]
    pub organization: String,

    /// Offering name
    #[arg(long)]
    pub name: String,

    /// Offering version
    #[arg(long = "offering-version")]
    pub offering_version: String,

    /// Catalog server base URL
    #[arg(long)]
    pub server_url: Option<String>,

    /// CSRF token sent with comment submissions
    #[arg(long)]
    pub csrf_token: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the resolved server URL and cookies back to the config file
    #[arg(long)]
    pub save_config: bool,

    /// Open the comment form on startup
    #[arg(long)]
    pub comment: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn offering(&self) -> OfferingContext {
        OfferingContext::new(&self.organization, &self.name, &self.offering_version)
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "offering_rating=info",
            1 => "offering_rating=debug",
            _ => "offering_rating=trace",
        }
    }
}
