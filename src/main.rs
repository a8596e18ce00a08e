// src/main.rs
use anyhow::Result;
use clap::Parser;

use vulnviz::{Args, run};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(args)
}
