//! Order lookup.

use anyhow::Result;
use mart_commerce::checkout::{OrderListParams, OrderResult, OrderState};
use mart_commerce::{OrderId, PageParams};

use super::OrderArgs;
use crate::context::Context;
use crate::output::{format_countdown, order_state_badge};

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let orders = ctx.client()?.orders();

    if let Some(id) = args.id {
        let spinner = ctx.output.spinner("Fetching order...");
        let order = orders.detail(&OrderId::new(id)).await;
        spinner.finish_and_clear();
        let order = order?;

        if ctx.output.is_json() {
            ctx.output.json(&order);
        } else {
            print_order(&order, ctx);
        }
        return Ok(());
    }

    let state = args.state.map(OrderState::from_code).transpose()?;
    let params = OrderListParams::new(
        PageParams::new(args.page, ctx.config.client.page_size),
        state,
    );

    let spinner = ctx.output.spinner("Fetching orders...");
    let page = orders.list(&params).await;
    spinner.finish_and_clear();
    let page = page?;

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    let title = state.map_or("All orders", OrderState::label);
    ctx.output.header(&format!(
        "{} (page {}/{}, {} total)",
        title,
        page.page,
        page.total_pages(),
        page.total_count()
    ));
    let widths = [22, 10, 10];
    ctx.output.table_row(&["ID", "STATE", "PAY"], &widths);
    for order in &page.items {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order_state_badge(order.order_state),
                &order.pay_money.to_string(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn print_order(order: &OrderResult, ctx: &Context) {
    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("state", &order_state_badge(order.order_state));
    if order.order_state == OrderState::PendingPay {
        ctx.output.kv("pay within", &format_countdown(order.countdown));
    }
    ctx.output.kv("created", &order.create_time);
    ctx.output.kv(
        "receiver",
        &format!(
            "{} {} {}",
            order.receiver_contact, order.receiver_mobile, order.receiver_address
        ),
    );
    for sku in &order.skus {
        ctx.output.list_item(&format!(
            "{} {} x{} {}",
            sku.name, sku.attrs_text, sku.quantity, sku.cur_price
        ));
    }
    ctx.output.kv("total", &order.total_money.to_string());
    ctx.output.kv("post fee", &order.post_fee.to_string());
    ctx.output.kv("pay", &order.pay_money.to_string());
}
