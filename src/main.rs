//! CLI entry point for the growth image generator

use clap::Parser;
use pixelbloom::io::cli::{Cli, GenerationRunner};

fn main() -> pixelbloom::Result<()> {
    let cli = Cli::parse();
    let runner = GenerationRunner::new(cli);
    runner.run()
}
