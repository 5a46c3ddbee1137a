//! Hot recommendation lists.

use anyhow::Result;
use mart_commerce::catalog::HotParams;
use mart_commerce::PageParams;

use super::HotArgs;
use crate::context::Context;

/// Run the hot command.
pub async fn run(args: HotArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let Some(sub_type) = args.sub_type else {
        let spinner = ctx.output.spinner("Fetching hot list...");
        let result = client
            .hot()
            .page(&args.path, &HotParams::new(PageParams::default()))
            .await;
        spinner.finish_and_clear();
        let result = result?;

        if ctx.output.is_json() {
            ctx.output.json(&result);
            return Ok(());
        }

        ctx.output.header(&result.title);
        for tab in &result.sub_types {
            ctx.output.list_item(&format!(
                "{} ({}): {} goods",
                tab.title,
                tab.id,
                tab.goods_items.total_count()
            ));
        }
        return Ok(());
    };

    let feed = client.hot_feed(&args.path, sub_type.as_str());
    let spinner = ctx.output.spinner("Loading tab...");
    for _ in 0..args.pages {
        if let Err(e) = feed.load_next_page().await {
            spinner.finish_and_clear();
            return Err(e.into());
        }
        if !feed.has_more() {
            break;
        }
    }
    spinner.finish_and_clear();

    let items = feed.items();
    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header(&format!("{} / {}", args.path, sub_type));
    for item in &items {
        ctx.output.list_item(&format!("{} {}", item.price, item.name));
    }

    Ok(())
}
