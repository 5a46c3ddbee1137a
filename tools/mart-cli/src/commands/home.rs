//! Home page content.

use anyhow::Result;
use serde_json::json;

use super::HomeArgs;
use crate::context::Context;

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let home = ctx.client()?.home();

    let spinner = ctx.output.spinner("Fetching home page...");
    let banners = home.banner(args.site.into()).await;
    let categories = home.category().await;
    let hot = home.hot().await;
    spinner.finish_and_clear();

    let (banners, categories, hot) = (banners?, categories?, hot?);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "banners": banners,
            "categories": categories,
            "hot": hot,
        }));
        return Ok(());
    }

    ctx.output.header("Banners");
    for banner in &banners {
        ctx.output.list_item(&format!("{} -> {}", banner.img_url, banner.href_url));
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(&format!("{} ({})", category.name, category.id));
    }

    ctx.output.header("Hot");
    for item in &hot {
        ctx.output
            .list_item(&format!("{} - {} [{}]", item.title, item.alt, item.target));
    }

    Ok(())
}
