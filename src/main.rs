//! Number texture generator
//!
//! Writes `number-1.png` .. `number-12.png` into the working directory.
//!
//! Run with: `cargo run --bin generate_numbers`

use anyhow::Context;
use number_textures::{generate, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    generate::run().context("number texture generation failed")?;
    Ok(())
}
