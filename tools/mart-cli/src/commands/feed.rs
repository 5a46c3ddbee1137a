//! Walk the "guess you like" feed.

use anyhow::Result;
use mart_services::LoadOutcome;

use super::FeedArgs;
use crate::context::Context;

/// Run the feed command.
pub async fn run(args: FeedArgs, ctx: &Context) -> Result<()> {
    let pages = args.pages.unwrap_or(ctx.config.feed.pages);
    let (feed, bridge) = ctx.client()?.mounted_guess_feed();

    let spinner = ctx.output.spinner("Loading feed...");
    for _ in 0..pages {
        match bridge.on_reach_end().await {
            Ok(LoadOutcome::Loaded { page, appended }) => {
                spinner.set_message(format!("Loaded page {} ({} items)", page, appended));
            }
            Ok(LoadOutcome::Exhausted) => break,
            Ok(_) => {}
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e.into());
            }
        }
    }
    spinner.finish_and_clear();

    let items = feed.items();
    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Guess you like ({} of {})",
        items.len(),
        feed.total_count()
    ));
    let widths = [22, 10, 40];
    ctx.output.table_row(&["ID", "PRICE", "NAME"], &widths);
    for item in &items {
        ctx.output.table_row(
            &[item.id.as_str(), &item.price.to_string(), &item.name],
            &widths,
        );
    }

    if !feed.has_more() {
        ctx.output.info("End of feed");
    }

    Ok(())
}
