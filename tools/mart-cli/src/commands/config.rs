//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if config.client.token.is_some() {
        config.client.token = Some("[REDACTED]".to_string());
    }

    if ctx.output.is_json() {
        ctx.output.json(&config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[client]");
    ctx.output.kv("base_url", &config.client.base_url);
    ctx.output.kv("timeout_ms", &config.client.timeout_ms.to_string());
    ctx.output.kv("source_client", &config.client.source_client);
    ctx.output.kv("page_size", &config.client.page_size.to_string());
    ctx.output.kv("token", config.client.token.as_deref().unwrap_or("(none)"));

    ctx.output.info("");
    ctx.output.info("[feed]");
    ctx.output.kv("pages", &config.feed.pages.to_string());

    if !config.environments.is_empty() {
        ctx.output.info("");
        ctx.output.info("Environments:");
        for env in config.environments.keys() {
            ctx.output.list_item(env);
        }
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;
    ctx.output.success("Configuration is valid");
    Ok(())
}
