use crate::app;
use crate::cli::Command;

pub mod user;

impl Command {
    pub fn run(&self, app: &app::App) -> anyhow::Result<()> {
        user::run(self, app)
    }
}
