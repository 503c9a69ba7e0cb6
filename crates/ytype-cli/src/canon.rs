//! # Canon Subcommand
//!
//! Decodes a wire value against a leaf type and prints its canonical form.

use clap::Args;

use crate::TypeArgs;

/// Arguments for the canon subcommand.
#[derive(Args, Debug)]
pub struct CanonArgs {
    #[command(flatten)]
    pub leaf: TypeArgs,

    /// The wire value. Quote identityref triples.
    pub value: String,
}

/// Runs the canon subcommand, returning the canonical string.
pub fn run(args: &CanonArgs) -> anyhow::Result<String> {
    let leaf = args.leaf.leaf_type()?;
    let value = leaf.parse(&args.value)?;
    tracing::info!(leaf_type = leaf.name(), input = %args.value, canonical = %value, "decoded");
    Ok(value.canonical_string())
}
