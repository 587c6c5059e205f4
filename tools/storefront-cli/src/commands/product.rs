//! Product detail command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::Cart;
use storefront_commerce::catalog::{seed, GalleryImage, ProductDetail, QuantitySelector};

use super::ProductArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct ProductReport<'a> {
    product: &'a ProductDetail,
    selected_image: &'a GalleryImage,
    quantity: i64,
    message: String,
    cart_item_count: i64,
}

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let detail = seed::product_detail();

    let mut gallery = detail.gallery();
    if let Some(index) = args.image {
        if index != gallery.selected_index() && !gallery.select(index) {
            ctx.output.warn(&format!(
                "No image at index {}; showing image {}",
                index,
                gallery.selected_index()
            ));
        }
    }

    let mut quantity = QuantitySelector::new();
    quantity
        .set(args.quantity)
        .context("Quantity must be picked from the dropdown")?;

    let mut cart = Cart::with_entries(&seed::cart_lines())?;
    cart.add_item(&detail.entry, quantity.value())?;
    let message = quantity.added_message();
    tracing::info!(product = %detail.entry.id, quantity = quantity.value(), "added to cart");

    if ctx.output.is_json() {
        ctx.output.json(&ProductReport {
            product: &detail,
            selected_image: gallery.selected(),
            quantity: quantity.value(),
            message,
            cart_item_count: cart.item_count(),
        });
        return Ok(());
    }

    let entry = &detail.entry;
    ctx.output.header(&entry.title);
    ctx.output.kv("Category", &entry.category);
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", entry.stars().render(), entry.review_count),
    );
    ctx.output.kv("Price", &entry.price.display_grouped());
    ctx.output.kv("Availability", &stock_badge(detail.stock));
    ctx.output.info(&detail.description);

    ctx.output.header("Specifications");
    for (label, value) in &detail.specifications {
        ctx.output.kv(label, value);
    }

    ctx.output.header("Gallery");
    for (i, image) in gallery.images().iter().enumerate() {
        let marker = if i == gallery.selected_index() { ">" } else { " " };
        ctx.output.list_item(&format!("{} {} ({})", marker, image.alt, image.src));
    }

    ctx.output.success(&message);
    ctx.output.kv("Cart items", &cart.item_count().to_string());

    Ok(())
}
