//! Shopping cart command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::{Cart, CartAction, CartPricing};
use storefront_commerce::catalog::seed;
use storefront_commerce::checkout::{OrderTotals, ShippingMethod};

use super::CartArgs;
use crate::context::Context;
use crate::output::title_width;

#[derive(Serialize)]
struct CartReport<'a> {
    cart: &'a Cart,
    pricing: CartPricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<OrderTotals>,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let actions = parse_actions(&args.action)?;

    let mut cart = Cart::with_entries(&seed::cart_lines())?;
    for action in &actions {
        if !cart.apply(action) {
            ctx.output.debug(&format!("{:?} matched no cart line", action));
        }
    }

    let pricing = cart.calculate_pricing()?;
    let methods = ctx.config.shipping_methods()?;
    let selected = args
        .shipping
        .as_deref()
        .map(|id| ShippingMethod::find(&methods, id))
        .transpose()?;

    // An empty cart shows no order summary.
    let totals = if cart.is_empty() {
        None
    } else {
        let order_pricing = ctx.config.order_pricing(args.shipping_policy)?;
        Some(order_pricing.totals(pricing.subtotal, selected)?)
    };

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            cart: &cart,
            pricing,
            totals,
        });
        return Ok(());
    }

    ctx.output.header("Your Shopping Cart");
    let Some(totals) = totals else {
        ctx.output.info("Your cart is empty");
        ctx.output
            .info("Looks like you haven't added anything to your cart yet.");
        return Ok(());
    };

    ctx.output.info(&pricing.heading());
    let title_col = title_width(ctx.output.term_width(), 36);
    for item in cart.items() {
        let line_total = item.total()?;
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.title,
                &item.unit_price.display_grouped(),
                &format!("x{}", item.quantity),
                &line_total.display_grouped(),
            ],
            &[3, title_col, 10, 4, 12],
        );
    }

    ctx.output.header("Order Summary");
    if let Some(method) = selected {
        ctx.output.kv("Shipping method", &method.label());
    }
    for (label, value) in totals.lines() {
        ctx.output.kv(label, &value);
    }

    Ok(())
}

/// Parse `--action` values, failing on the first malformed one.
fn parse_actions(raw: &[String]) -> Result<Vec<CartAction>> {
    raw.iter()
        .map(|s| {
            s.parse::<CartAction>()
                .with_context(|| format!("Expected inc:ID, dec:ID, remove:ID or set:ID=N, got '{}'", s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::ProductId;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_actions_in_order() {
        let actions = parse_actions(&strings(&["inc:1", "dec:2", "set:1=4", "remove:2"])).unwrap();
        assert_eq!(
            actions,
            vec![
                CartAction::Increment(ProductId::new("1")),
                CartAction::DecrementOrRemove(ProductId::new("2")),
                CartAction::SetQuantity(ProductId::new("1"), 4),
                CartAction::Remove(ProductId::new("2")),
            ]
        );
    }

    #[test]
    fn test_parse_actions_rejects_malformed() {
        let err = parse_actions(&strings(&["inc:1", "bump:2"])).unwrap_err();
        assert!(format!("{:#}", err).contains("bump:2"));
        assert!(parse_actions(&strings(&["set:1=many"])).is_err());
    }

    #[test]
    fn test_actions_against_seed_cart() {
        let mut cart = Cart::with_entries(&seed::cart_lines()).unwrap();
        for action in parse_actions(&strings(&["dec:2", "set:1=2"])).unwrap() {
            cart.apply(&action);
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal().unwrap().amount_cents, 299998);
    }
}
