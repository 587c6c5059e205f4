//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { write, force } => init_config(write, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    let config = &ctx.config;
    ctx.output.info("[listing]");
    ctx.output.kv("page_size", &config.listing.page_size.to_string());

    ctx.output.info("[pricing]");
    ctx.output.kv("currency", &config.pricing.currency);
    ctx.output.kv("tax_rate", &config.pricing.tax_rate.to_string());
    ctx.output.kv("flat_shipping", &config.pricing.flat_shipping.to_string());
    ctx.output.kv(
        "shipping_policy",
        &format!("{:?}", config.pricing.shipping_policy).to_lowercase(),
    );

    ctx.output.info("[[shipping.methods]]");
    for method in ctx.config.shipping_methods()? {
        ctx.output.list_item(&format!("{}: {}", method.id, method.label()));
    }

    Ok(())
}

fn init_config(write: bool, force: bool, ctx: &Context) -> Result<()> {
    let content = generate_default_config();
    if !write {
        print!("{}", content);
        return Ok(());
    }

    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, content)?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
