mod wiring;

use crate::{cli, context, storage};
use anyhow::{Context as AnyhowContext, Result};
use std::path::Path;
use std::sync::Arc;

pub struct App {
    pub store: Arc<dyn storage::UserStore + Send + Sync>,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.config.log_file.as_deref().map(Path::new));
        log::info!("🚀 Starting userstore");
        log::info!("📂 Data dir: {}", ctx.config.data_dir);
        if let Some(path) = ctx.config.log_file.as_deref() {
            log::info!("📝 Log file: {path}");
        }

        wiring::init_data_dir(&ctx).context("initializing data dir")?;
        let store = wiring::init_store(&ctx)?;

        Ok((Self { store }, cli))
    }
}
