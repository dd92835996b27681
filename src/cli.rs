/*
 * Command Line Module
 *
 * Arguments are parsed once; the nannou model function reads them through
 * `args()` since it cannot capture state.
 */

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "particle-field", about = "Interactive particle network background")]
pub struct Args {
    /// Settings file, created on first change if missing
    #[arg(long, default_value = "particle-field.toml")]
    pub settings: PathBuf,

    /// Seed for particle generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with reduced motion regardless of the saved setting
    #[arg(long)]
    pub reduced_motion: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}
