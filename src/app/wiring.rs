use std::sync::Arc;

use crate::{context, storage};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    std::fs::create_dir_all(&data_dir)?;
    Ok(())
}

pub fn init_store(ctx: &context::Context) -> Result<Arc<dyn storage::UserStore + Send + Sync>> {
    let data_dir = std::path::PathBuf::from(&ctx.config.data_dir);
    let db_path = data_dir.join("users.sqlite").to_string_lossy().into_owned();
    let sqlite = storage::SqliteStore::new(&db_path);
    if ctx.config.reset {
        sqlite.reset_all().context("resetting storage")?;
    }
    sqlite.init().context("initializing storage")?;
    Ok(Arc::new(sqlite))
}
