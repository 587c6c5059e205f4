//! Checkout command.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use storefront_commerce::cart::Cart;
use storefront_commerce::catalog::seed;
use storefront_commerce::checkout::{place_order, CheckoutForm};
use storefront_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let form_path = ctx.resolve_path(&args.form);
    let form = load_form(&form_path)?;

    if form.card_expired(chrono::Local::now().date_naive()) {
        ctx.output.warn("The card expiry date has passed.");
    }

    let cart = Cart::with_entries(&seed::cart_lines())?;
    let subtotal = cart.subtotal()?;
    let methods = ctx.config.shipping_methods()?;
    let pricing = ctx.config.order_pricing(args.shipping_policy)?;

    let confirmation = match place_order(&form, subtotal, &pricing, &methods) {
        Ok(confirmation) => confirmation,
        Err(CommerceError::InvalidForm(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&errors.iter().collect::<Vec<_>>());
            } else {
                for error in errors.iter() {
                    ctx.output.error(&format!("{}: {}", error.field, error.message));
                }
            }
            bail!("Checkout form has {} invalid field(s)", errors.len());
        }
        Err(e) => return Err(e.into()),
    };

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success(confirmation.title);
    ctx.output.info(confirmation.message);

    ctx.output.header("Order Summary");
    if let Some(destination) = form.ship_to() {
        ctx.output.kv("Ship to", &destination);
    }
    if let Some(shipping) = &confirmation.shipping {
        ctx.output.kv("Shipping method", &shipping.method_name);
        if let Some(estimate) = &shipping.delivery_estimate {
            ctx.output.kv("Delivery", estimate);
        }
    }
    for (label, value) in confirmation.totals.lines() {
        ctx.output.kv(label, &value);
    }

    Ok(())
}

/// Read a checkout form from a TOML or JSON file.
fn load_form(path: &Path) -> Result<CheckoutForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checkout form: {}", path.display()))?;
    parse_form(&content, path.extension().is_some_and(|ext| ext == "json"))
        .with_context(|| format!("Failed to parse checkout form: {}", path.display()))
}

fn parse_form(content: &str, json: bool) -> Result<CheckoutForm> {
    if json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_form() {
        let form = parse_form(
            r#"
full_name = "Ada Lovelace"
address = "12 Analytical St"
city = "London"
postal_code = "90210"
country = "us"
shipping_method = "express"
card_name = "A Lovelace"
card_number = "4242424242424242"
card_expiry = "12/29"
card_cvc = "123"
"#,
            false,
        )
        .unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.shipping_method.as_deref(), Some("express"));
    }

    #[test]
    fn test_parse_partial_json_form() {
        let form = parse_form(r#"{"full_name": "A"}"#, true).unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 9);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_form("full_name = ", false).is_err());
    }
}
