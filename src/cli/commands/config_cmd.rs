//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

use crate::core::config::Config;

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx.config.get_key(key)?;
    println!("{}", value);
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut schema = ctx.config.global.clone();
    Config::set_key(&mut schema, key, value)?;

    let path = Config::write_global(&schema).context("Failed to write config")?;

    output::success(
        format!("Set {} = {} in '{}'", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    println!("server_url = {}", ctx.config.server_url());
    println!("default_document = {}", ctx.config.default_document());
    if let Some(path) = ctx.config.loaded_from() {
        output::debug(
            format!("loaded from '{}'", path.display()),
            ctx.verbosity(),
        );
    }
    Ok(())
}
