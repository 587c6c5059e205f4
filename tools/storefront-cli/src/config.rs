//! CLI configuration.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::seed;
use storefront_commerce::checkout::{OrderPricing, ShippingMethod, ShippingPolicy};
use storefront_commerce::listing::DEFAULT_PAGE_SIZE;
use storefront_commerce::{Currency, Money};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Listing configuration.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Tax and shipping charge configuration.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Shipping methods offered at checkout.
    #[serde(default)]
    pub shipping: ShippingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// The configured currency.
    ///
    /// Catalog and cart prices are seeded in a single currency, so any other
    /// code is rejected rather than mixed into order totals.
    pub fn currency(&self) -> Result<Currency> {
        let currency = Currency::from_code(&self.pricing.currency)
            .ok_or_else(|| anyhow!("Unknown currency in config: {}", self.pricing.currency))?;
        if currency != seed::CURRENCY {
            bail!(
                "Unsupported currency in config: {}. Catalog prices are in {}.",
                currency,
                seed::CURRENCY
            );
        }
        Ok(currency)
    }

    /// Shipping methods in the configured currency.
    pub fn shipping_methods(&self) -> Result<Vec<ShippingMethod>> {
        let currency = self.currency()?;
        self.shipping
            .methods
            .iter()
            .map(|m| {
                let price = to_money(m.price, currency)
                    .with_context(|| format!("Invalid price for shipping method '{}'", m.id))?;
                Ok(ShippingMethod::new(m.id.as_str(), m.name.as_str(), price)
                    .with_delivery_days(m.min_days, m.max_days))
            })
            .collect()
    }

    /// Shipping policy and tax rate, with an optional policy override from the command line.
    pub fn order_pricing(&self, policy: Option<ShippingPolicyKind>) -> Result<OrderPricing> {
        let currency = self.currency()?;
        let shipping = match policy.unwrap_or(self.pricing.shipping_policy) {
            ShippingPolicyKind::Flat => ShippingPolicy::Flat(
                to_money(self.pricing.flat_shipping, currency).context("Invalid flat_shipping")?,
            ),
            ShippingPolicyKind::Selected => ShippingPolicy::FromSelection,
        };
        if self.pricing.tax_rate.is_sign_negative() {
            bail!("Invalid tax rate in config: {}", self.pricing.tax_rate);
        }
        Ok(OrderPricing::new(shipping, self.pricing.tax_rate))
    }
}

fn to_money(amount: Decimal, currency: Currency) -> Result<Money> {
    if amount.is_sign_negative() {
        bail!("amount {} is negative", amount);
    }
    Money::from_exact(amount, currency).ok_or_else(|| anyhow!("amount {} is out of range", amount))
}

/// Listing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Products per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Which shipping price order totals use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShippingPolicyKind {
    /// Flat charge from `pricing.flat_shipping`.
    #[default]
    Flat,
    /// Price of the selected shipping method.
    Selected,
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Estimated tax rate as a fraction (0.085 = 8.5%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Flat shipping charge in major units.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: Decimal,

    #[serde(default)]
    pub shipping_policy: ShippingPolicyKind,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_tax_rate() -> Decimal {
    Decimal::new(85, 3)
}

fn default_flat_shipping() -> Decimal {
    Decimal::new(599, 2)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tax_rate: default_tax_rate(),
            flat_shipping: default_flat_shipping(),
            shipping_policy: ShippingPolicyKind::default(),
        }
    }
}

/// Shipping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    #[serde(default = "default_methods")]
    pub methods: Vec<ShippingMethodConfig>,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
        }
    }
}

/// A shipping method entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethodConfig {
    pub id: String,
    pub name: String,
    /// Price in major units.
    pub price: Decimal,
    pub min_days: u32,
    pub max_days: u32,
}

fn default_methods() -> Vec<ShippingMethodConfig> {
    vec![
        ShippingMethodConfig {
            id: "standard".to_string(),
            name: "Standard Shipping".to_string(),
            price: Decimal::new(599, 2),
            min_days: 4,
            max_days: 6,
        },
        ShippingMethodConfig {
            id: "express".to_string(),
            name: "Express Shipping".to_string(),
            price: Decimal::new(1599, 2),
            min_days: 1,
            max_days: 2,
        },
    ]
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[listing]
page_size = {page_size}

[pricing]
currency = "USD"
tax_rate = 0.085
flat_shipping = 5.99
# "flat" charges flat_shipping; "selected" charges the chosen method's price
shipping_policy = "flat"

[[shipping.methods]]
id = "standard"
name = "Standard Shipping"
price = 5.99
min_days = 4
max_days = 6

[[shipping.methods]]
id = "express"
name = "Express Shipping"
price = 15.99
min_days = 1
max_days = 2
"#,
        page_size = DEFAULT_PAGE_SIZE
    )
}
