//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shopcart_commerce::cart::{ADDED_TO_CART, CART_CLEARED};
use shopcart_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::format_money;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Add { product_id, qty } => add_to_cart(product_id, qty, ctx),
        CartCommand::Show => show_cart(ctx),
        CartCommand::Total => show_total(ctx),
        CartCommand::Checkout => checkout(ctx),
        CartCommand::Clear { yes } => clear_cart(yes, ctx),
    }
}

fn add_to_cart(product_id: i64, qty: i64, ctx: &Context) -> Result<()> {
    ctx.cart_service()
        .add_to_cart(ProductId::new(product_id), qty)?;
    ctx.output.message(ADDED_TO_CART);
    Ok(())
}

fn show_cart(ctx: &Context) -> Result<()> {
    let cart = ctx.cart_service().view_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&cart);
        return Ok(());
    }

    ctx.output.header("Cart");

    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    print_lines(cart.lines(), ctx);
    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count()?.to_string());
    ctx.output.kv("Total", &format_money(cart.subtotal()?.rounded()));

    Ok(())
}

fn show_total(ctx: &Context) -> Result<()> {
    let total = ctx.cart_service().compute_total()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "total_price": total }));
    } else {
        println!("{}", format_money(total));
    }

    Ok(())
}

fn checkout(ctx: &Context) -> Result<()> {
    let outcome = ctx.cart_service().checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    match &outcome {
        Checkout::Empty => ctx.output.warn(outcome.message()),
        Checkout::Completed(receipt) => {
            ctx.output.success(outcome.message());
            ctx.output.header("Receipt");
            // The cart is already emptied; render what we can instead of failing.
            print_lines(&receipt.lines, ctx);
            ctx.output.info("");
            ctx.output.kv("Items", &render(receipt.item_count()));
            ctx.output.kv("Total", &format_money(receipt.total));
            ctx.output.kv(
                "Checked out",
                &receipt
                    .checked_out_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
            );
        }
    }

    Ok(())
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    if needs_confirmation(yes, ctx.output.is_json())? {
        let confirmed = Confirm::new()
            .with_prompt("Remove every line from the cart?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    ctx.cart_service().clear_cart()?;
    ctx.output.message(CART_CLEARED);

    Ok(())
}

/// Whether to prompt before clearing. JSON mode cannot prompt, so it needs `--yes`.
fn needs_confirmation(yes: bool, json: bool) -> Result<bool> {
    if yes {
        return Ok(false);
    }
    if json {
        bail!("Refusing to clear the cart without confirmation. Pass --yes with --json.");
    }
    Ok(true)
}

fn render(value: Result<impl ToString, CommerceError>) -> String {
    value.map_or_else(|e| e.to_string(), |v| v.to_string())
}

fn print_lines(lines: &[CartLine], ctx: &Context) {
    let widths = [6, 24, 10, 6, 12];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "QTY", "LINE TOTAL"], &widths);

    for line in lines {
        ctx.output.table_row(
            &[
                &line.id.to_string(),
                &line.name,
                &format_money(line.price),
                &line.qty.to_string(),
                &render(line.total().map(|total| format_money(total.rounded()))),
            ],
            &widths,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_prompts_by_default() {
        assert!(needs_confirmation(false, false).unwrap());
    }

    #[test]
    fn test_clear_yes_skips_prompt() {
        assert!(!needs_confirmation(true, false).unwrap());
        assert!(!needs_confirmation(true, true).unwrap());
    }

    #[test]
    fn test_clear_json_requires_yes() {
        let err = needs_confirmation(false, true).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }

    #[test]
    fn test_render_overflow() {
        assert_eq!(render(Ok::<i64, CommerceError>(5)), "5");
        assert_eq!(
            render(Err::<i64, _>(CommerceError::Overflow)),
            "Arithmetic overflow in cart calculation"
        );
    }
}
