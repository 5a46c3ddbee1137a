//! Member login.

use anyhow::{bail, Context as _, Result};
use mart_commerce::member::LoginParams;

use super::LoginArgs;
use crate::config::CliConfig;
use crate::context::Context;

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let login = ctx.client()?.login();

    let spinner = ctx.output.spinner("Logging in...");
    let result = match (args.phone, args.code) {
        (Some(phone), _) => login.simple_login(&phone).await,
        (None, Some(code)) => login.login(&LoginParams::new(code)).await,
        (None, None) => {
            spinner.finish_and_clear();
            bail!("Either --phone or --code is required");
        }
    };
    spinner.finish_and_clear();
    let result = result?;

    if args.save {
        let Some(ref path) = ctx.config_path else {
            bail!("No config file to save the token to. Run `mart config init` first.");
        };
        let path = path.to_str().context("Config path is not valid UTF-8")?;
        let mut config = CliConfig::load(path)?;
        config.client.token = Some(result.token.clone());
        config.save(path)?;
        ctx.output.info(&format!("Token saved to {}", path));
    }

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    ctx.output
        .success(&format!("Logged in as {}", result.display_name()));
    ctx.output.kv("member", result.id.as_str());
    if !args.save {
        ctx.output.kv("token", &result.token);
    }

    Ok(())
}
