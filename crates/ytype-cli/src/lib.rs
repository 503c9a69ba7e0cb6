//! # ytype-cli — Command-Line Interface
//!
//! Thin clap front end over `ytype-core`, for checking wire values by hand
//! and in scripts.
//!
//! ## Subcommands
//!
//! - `canon` — Decode a wire value and print its canonical form
//! - `bounds` — Print the inclusive bounds of a numeric type
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `ytype-core` and return their output as
//!   a `String`; only `main` writes to stdout.

pub mod bounds;
pub mod canon;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use ytype_core::LeafType;

/// How the leaf type is specified: inline flags or a descriptor file.
#[derive(Args, Debug, Clone)]
pub struct TypeArgs {
    /// YANG built-in type name, e.g. `int32` or `decimal64`.
    #[arg(long = "type", value_name = "NAME", conflicts_with = "leaf")]
    pub type_name: Option<String>,

    /// Integer range restriction, e.g. `1..4094` or `min..0`.
    #[arg(long, value_name = "LO..HI", requires = "type_name")]
    pub range: Option<String>,

    /// decimal64 fraction-digits.
    #[arg(long, value_name = "N", requires = "type_name")]
    pub fraction_digits: Option<u8>,

    /// YAML leaf descriptor file.
    #[arg(long, value_name = "FILE")]
    pub leaf: Option<String>,
}

impl TypeArgs {
    /// Resolves the arguments to a leaf type.
    pub fn leaf_type(&self) -> anyhow::Result<LeafType> {
        if let Some(path) = &self.leaf {
            return load_leaf(Path::new(path));
        }
        let name = self
            .type_name
            .as_deref()
            .context("one of --type or --leaf is required")?;
        Ok(LeafType::from_parts(
            name,
            self.range.clone(),
            self.fraction_digits,
        )?)
    }
}

fn load_leaf(path: &Path) -> anyhow::Result<LeafType> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("reading leaf descriptor {}", path.display()))?;
    let leaf = LeafType::from_yaml(&yaml)
        .with_context(|| format!("decoding leaf descriptor {}", path.display()))?;
    tracing::debug!(path = %path.display(), leaf_type = leaf.name(), "loaded leaf descriptor");
    Ok(leaf)
}
