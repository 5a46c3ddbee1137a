//! Payment parameters.

use anyhow::Result;
use mart_commerce::OrderId;

use super::PayArgs;
use crate::context::Context;

/// Run the pay command.
pub async fn run(args: PayArgs, ctx: &Context) -> Result<()> {
    let pay = ctx.client()?.pay();
    let order_id = OrderId::new(args.order_id);

    let spinner = ctx.output.spinner("Requesting payment...");
    let options = if args.mock {
        pay.mock_pay(&order_id).await
    } else {
        pay.wx_pay_params(&order_id).await
    };
    spinner.finish_and_clear();
    let options = options?;

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    if args.mock {
        ctx.output.success(&format!("Order {} paid (mock)", order_id));
        return Ok(());
    }

    ctx.output.header(&format!("Payment parameters for {}", order_id));
    for key in options.keys() {
        let value = options
            .get(key)
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
            .unwrap_or_default();
        ctx.output.kv(key, &value);
    }

    Ok(())
}
