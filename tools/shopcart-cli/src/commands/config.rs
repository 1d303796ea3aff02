//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config_file": ctx.config_path,
            "config": ctx.config,
            "catalog_path": ctx.catalog_path(),
            "cart_path": ctx.cart_path(),
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Storage section
    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output
        .kv("data_dir", &ctx.config.storage.data_dir.display().to_string());
    ctx.output.kv("catalog_file", &ctx.config.storage.catalog_file);
    ctx.output.kv("cart_file", &ctx.config.storage.cart_file);
    ctx.output
        .kv("catalog path", &ctx.catalog_path().display().to_string());
    ctx.output.kv("cart path", &ctx.cart_path().display().to_string());

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output
        .kv("level", ctx.config.logging.level.as_directive());
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.message(&format!("Created: {}", config_path.display()));

    Ok(())
}
