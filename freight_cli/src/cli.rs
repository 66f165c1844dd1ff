//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freight_cli")]
#[command(version)]
#[command(about = "Freight density and LTL freight class calculator")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (must exist when given)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved input draft
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory generated PDFs are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Calculate density and freight class for one shipment
    Calc {
        /// Length (in, or cm with --metric)
        #[arg(allow_hyphen_values = true)]
        length: String,

        /// Width (in, or cm with --metric)
        #[arg(allow_hyphen_values = true)]
        width: String,

        /// Height (in, or cm with --metric)
        #[arg(allow_hyphen_values = true)]
        height: String,

        /// Weight (lbs, or kg with --metric)
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Dimensions in cm and weight in kg
        #[arg(long)]
        metric: bool,

        /// Apply the 48 x 40 in pallet footprint floor
        #[arg(long)]
        palletized: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the density to freight class table
    Classes,

    /// List quick templates
    Templates,

    /// Interactive shell
    Shell,
}
