//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use mart_commerce::cart::{CartPatch, CartSnapshot};
use mart_commerce::SkuId;
use mart_services::CartService;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.client()?.cart();

    match args.command {
        CartCommand::List => list(&cart, ctx).await,
        CartCommand::Add { sku, count } => {
            cart.add_item(SkuId::new(sku.clone()), count).await?;
            ctx.output.success(&format!("Added {} x {}", count, sku));
            list(&cart, ctx).await
        }
        CartCommand::Remove { skus, yes } => remove(&cart, skus, yes, ctx).await,
        CartCommand::Update {
            sku,
            count,
            selected,
        } => {
            let patch = CartPatch {
                selected,
                count,
            };
            cart.update_item(&SkuId::new(sku.clone()), patch).await?;
            ctx.output.success(&format!("Updated {}", sku));
            list(&cart, ctx).await
        }
        CartCommand::SelectAll { clear } => {
            cart.set_all_selected(!clear).await?;
            list(&cart, ctx).await
        }
    }
}

async fn remove(cart: &CartService, skus: Vec<String>, yes: bool, ctx: &Context) -> Result<()> {
    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} from the cart?", skus.join(", ")))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Removal cancelled");
            return Ok(());
        }
    }

    let count = skus.len();
    cart.remove_items(skus.into_iter().map(SkuId::new)).await?;
    ctx.output.success(&format!("Removed {} line(s)", count));
    list(cart, ctx).await
}

async fn list(cart: &CartService, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Fetching cart...");
    let snapshot = cart.snapshot().await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    print_snapshot(&snapshot, ctx);
    Ok(())
}

fn print_snapshot(snapshot: &CartSnapshot, ctx: &Context) {
    ctx.output.header(&format!("Cart ({} lines)", snapshot.len()));
    if snapshot.is_empty() {
        ctx.output.info("Cart is empty");
        return;
    }

    let widths = [3, 22, 6, 10, 30];
    ctx.output
        .table_row(&["", "SKU", "QTY", "PRICE", "NAME"], &widths);
    for item in snapshot.items() {
        let mark = if item.selected { "[x]" } else { "[ ]" };
        ctx.output.table_row(
            &[
                mark,
                item.sku_id.as_str(),
                &item.count.to_string(),
                &item.now_price.to_string(),
                &item.name,
            ],
            &widths,
        );
    }

    ctx.output.kv(
        "selected",
        &format!(
            "{} item(s), {}",
            snapshot.selected_count(),
            snapshot.selected_total()
        ),
    );
}
