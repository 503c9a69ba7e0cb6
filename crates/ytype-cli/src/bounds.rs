//! # Bounds Subcommand
//!
//! Prints the inclusive bounds of a numeric leaf type, `min max` on one
//! line. decimal64 bounds are derived from `--fraction-digits`.

use anyhow::bail;
use clap::Args;

use crate::TypeArgs;

/// Arguments for the bounds subcommand.
#[derive(Args, Debug)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub leaf: TypeArgs,
}

/// Runs the bounds subcommand.
pub fn run(args: &BoundsArgs) -> anyhow::Result<String> {
    let leaf = args.leaf.leaf_type()?;
    match leaf.bounds()? {
        Some((min, max)) => Ok(format!("{min} {max}")),
        None => bail!("{} has no numeric bounds", leaf.name()),
    }
}
