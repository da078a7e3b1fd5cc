use anyhow::{Context, bail};
use bevy::app::AppExit;
use clap::Parser;
use jigsaw::cli::Cli;

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    match jigsaw::run(config).context("Invalid puzzle configuration")? {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("Jigsaw exited with code {code}"),
    }
}
