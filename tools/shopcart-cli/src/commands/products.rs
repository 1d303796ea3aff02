//! Catalog commands.

use anyhow::{Context as _, Result};
use shopcart_commerce::catalog::PRODUCT_ADDED;
use shopcart_commerce::prelude::*;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::format_money;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ProductsCommand::List) | None => list_products(ctx),
        Some(ProductsCommand::Add {
            id,
            name,
            price,
            description,
        }) => add_product(id, name, &price, description, ctx),
    }
}

fn list_products(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog_service().list_products()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output.header("Products");

    if catalog.is_empty() {
        ctx.output.info(&format!(
            "No products found in {}",
            ctx.catalog_path().display()
        ));
        return Ok(());
    }

    ctx.output.table_row(&["ID", "NAME", "PRICE", "DESCRIPTION"], &[6, 24, 10, 30]);
    for product in &catalog {
        ctx.output.table_row(
            &[
                &product.id().to_string(),
                product.name(),
                &format_money(product.price()),
                product.description().unwrap_or("-"),
            ],
            &[6, 24, 10, 30],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", catalog.len()));

    Ok(())
}

fn add_product(
    id: i64,
    name: String,
    price: &str,
    description: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let price: Money = price
        .parse()
        .with_context(|| format!("Invalid price: {}", price))?;

    let mut product = Product::new(ProductId::new(id), name, price)?;
    if let Some(description) = description {
        product = product.with_description(description);
    }

    ctx.output
        .debug(&format!("Writing catalog {}", ctx.catalog_path().display()));
    ctx.catalog_service().add_product(product)?;
    ctx.output.message(PRODUCT_ADDED);

    Ok(())
}
