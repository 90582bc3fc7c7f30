//! Writes `manifest.json` for a model directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hash_models -- <model_dir>
//! ```
//!
//! Every disease artifact must be present. The manifest binds each file
//! name to its SHA-256 digest; the app verifies it on startup.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use medscreen::adapters::manifest::MANIFEST_FILE;
use medscreen::adapters::ModelManifest;
use medscreen::Disease;

fn usage() -> String {
    "Usage: hash_models <model_dir>".to_string()
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let model_dir = match args.next().as_deref() {
        None | Some("-h") | Some("--help") => bail!(usage()),
        Some(dir) => PathBuf::from(dir),
    };
    if args.next().is_some() {
        bail!(usage());
    }
    Ok(model_dir)
}

fn main() -> Result<()> {
    let model_dir = parse_args()?;
    if !model_dir.is_dir() {
        bail!("Model directory not found at {model_dir:?}");
    }

    let files: Vec<&str> = Disease::ALL.iter().map(|d| d.artifact_file()).collect();
    for name in &files {
        if !model_dir.join(name).is_file() {
            bail!("Missing {name} in {model_dir:?}");
        }
    }

    let manifest = ModelManifest::build(&model_dir, &files)
        .with_context(|| format!("Hashing artifacts in {model_dir:?}"))?;
    manifest.write(&model_dir)?;

    println!("Wrote {:?}", model_dir.join(MANIFEST_FILE));
    for (name, digest) in &manifest.files {
        println!("  {digest}  {name}");
    }
    Ok(())
}
