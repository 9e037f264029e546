mod app;
mod cli;
mod commands;
mod configuration;
mod context;
mod storage;
mod tracing;

#[cfg(test)]
mod tests;

use anyhow::Result;

fn main() -> Result<()> {
    let (app, cli) = app::App::from_cli()?;
    cli.cmd.run(&app)
}
