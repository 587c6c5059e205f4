//! Checkout form and its client-side validation rules.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

use crate::checkout::ShippingMethod;
use crate::error::CommerceError;

/// Countries offered in the country dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Us,
    Ca,
    Mx,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Us, Country::Ca, Country::Mx];

    pub fn code(&self) -> &'static str {
        match self {
            Country::Us => "us",
            Country::Ca => "ca",
            Country::Mx => "mx",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::Us => "United States",
            Country::Ca => "Canada",
            Country::Mx => "Mexico",
        }
    }
}

impl FromStr for Country {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL.into_iter().find(|c| c.code() == s).ok_or(())
    }
}

/// Form fields, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Address,
    City,
    PostalCode,
    Country,
    ShippingMethod,
    CardName,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::PostalCode => "postal_code",
            FormField::Country => "country",
            FormField::ShippingMethod => "shipping_method",
            FormField::CardName => "card_name",
            FormField::CardNumber => "card_number",
            FormField::CardExpiry => "card_expiry",
            FormField::CardCvc => "card_cvc",
        }
    }

    /// Message shown under the field when its rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            FormField::FullName => "Full name must be at least 2 characters.",
            FormField::Address => "Please enter a valid address.",
            FormField::City => "Please enter a valid city.",
            FormField::PostalCode => "Please enter a valid postal code.",
            FormField::Country => "Please select a country.",
            FormField::ShippingMethod => "You need to select a shipping method.",
            FormField::CardName => "Name on card is required.",
            FormField::CardNumber => "Card number must be 16 digits.",
            FormField::CardExpiry => "Expiry must be in MM/YY format.",
            FormField::CardCvc => "CVC must be 3 or 4 digits.",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Every failing field of one validation pass.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: FormField) {
        self.errors.push(FieldError {
            field,
            message: field.message(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

fn card_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{16}$").expect("valid regex"))
}

fn card_expiry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/(\d{2})$").expect("valid regex"))
}

fn card_cvc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3,4}$").expect("valid regex"))
}

fn at_least(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Shipping, shipping-method and payment details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    /// Unset until the user picks from the dropdown.
    pub country: Option<String>,
    pub shipping_method: Option<String>,
    pub card_name: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl Default for CheckoutForm {
    /// Blank form with standard shipping preselected.
    fn default() -> Self {
        Self {
            full_name: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: None,
            shipping_method: Some("standard".to_string()),
            card_name: String::new(),
            card_number: String::new(),
            card_expiry: String::new(),
            card_cvc: String::new(),
        }
    }
}

impl CheckoutForm {
    /// Check every field and report all failures at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !at_least(&self.full_name, 2) {
            errors.push(FormField::FullName);
        }
        if !at_least(&self.address, 5) {
            errors.push(FormField::Address);
        }
        if !at_least(&self.city, 2) {
            errors.push(FormField::City);
        }
        if !at_least(&self.postal_code, 4) {
            errors.push(FormField::PostalCode);
        }
        if self.country().is_none() {
            errors.push(FormField::Country);
        }
        if !matches!(self.shipping_method.as_deref(), Some("standard" | "express")) {
            errors.push(FormField::ShippingMethod);
        }
        if !at_least(&self.card_name, 2) {
            errors.push(FormField::CardName);
        }
        if !card_number_re().is_match(&self.card_number) {
            errors.push(FormField::CardNumber);
        }
        if !card_expiry_re().is_match(&self.card_expiry) {
            errors.push(FormField::CardExpiry);
        }
        if !card_cvc_re().is_match(&self.card_cvc) {
            errors.push(FormField::CardCvc);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = ?errors.fields(), "checkout form rejected");
            Err(errors)
        }
    }

    pub fn country(&self) -> Option<Country> {
        self.country.as_deref().and_then(|c| c.parse().ok())
    }

    /// Destination line for the order summary, e.g. "Toronto, Canada".
    pub fn ship_to(&self) -> Option<String> {
        self.country()
            .map(|country| format!("{}, {}", self.city.trim(), country.name()))
    }

    /// The selected shipping method among `methods`.
    pub fn selected_method<'a>(
        &self,
        methods: &'a [ShippingMethod],
    ) -> Result<Option<&'a ShippingMethod>, CommerceError> {
        self.shipping_method
            .as_deref()
            .map(|id| ShippingMethod::find(methods, id))
            .transpose()
    }

    /// First day of the month after the card's expiry month (MM/YY, 20YY).
    pub fn card_expires_on(&self) -> Option<NaiveDate> {
        let caps = card_expiry_re().captures(&self.card_expiry)?;
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let year: i32 = 2000 + caps.get(2)?.as_str().parse::<i32>().ok()?;
        match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            m => NaiveDate::from_ymd_opt(year, m + 1, 1),
        }
    }

    /// Whether the card has expired by `today`. Unparseable expiries count as not expired;
    /// `validate` reports those.
    pub fn card_expired(&self, today: NaiveDate) -> bool {
        self.card_expires_on().is_some_and(|end| today >= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ada Lovelace".to_string(),
            address: "12 Analytical St".to_string(),
            city: "London".to_string(),
            postal_code: "90210".to_string(),
            country: Some("us".to_string()),
            shipping_method: Some("express".to_string()),
            card_name: "A Lovelace".to_string(),
            card_number: "4242424242424242".to_string(),
            card_expiry: "12/29".to_string(),
            card_cvc: "123".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        // Standard shipping is preselected, so that field passes.
        assert_eq!(errors.len(), 9);
        assert_eq!(errors.get(FormField::ShippingMethod), None);
        assert_eq!(
            errors.get(FormField::FullName),
            Some("Full name must be at least 2 characters.")
        );
        assert_eq!(errors.get(FormField::Country), Some("Please select a country."));
    }

    #[test]
    fn test_length_boundaries() {
        let mut form = valid_form();
        form.full_name = "Al".to_string();
        form.address = "1 St".to_string();
        form.postal_code = "123".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![FormField::Address, FormField::PostalCode]);
    }

    #[test]
    fn test_card_patterns() {
        let mut form = valid_form();
        form.card_number = "4242 4242 4242 4242".to_string();
        form.card_expiry = "13/25".to_string();
        form.card_cvc = "12345".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![FormField::CardNumber, FormField::CardExpiry, FormField::CardCvc]
        );

        form.card_number = "1234567890123456".to_string();
        form.card_expiry = "01/30".to_string();
        form.card_cvc = "1234".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_country_and_method_choices() {
        let mut form = valid_form();
        form.country = Some("fr".to_string());
        form.shipping_method = Some("overnight".to_string());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![FormField::Country, FormField::ShippingMethod]);

        form.country = None;
        form.shipping_method = None;
        assert_eq!(form.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_ship_to_uses_country_name() {
        let mut form = valid_form();
        form.city = "Toronto".to_string();
        form.country = Some("ca".to_string());
        assert_eq!(form.ship_to().as_deref(), Some("Toronto, Canada"));

        form.country = Some("fr".to_string());
        assert_eq!(form.ship_to(), None);
    }

    #[test]
    fn test_selected_method() {
        let methods = ShippingMethod::defaults(Currency::USD);
        let form = valid_form();
        let method = form.selected_method(&methods).unwrap().unwrap();
        assert_eq!(method.id.as_str(), "express");

        let mut form = valid_form();
        form.shipping_method = None;
        assert!(form.selected_method(&methods).unwrap().is_none());
    }

    #[test]
    fn test_card_expiry_dates() {
        let mut form = valid_form();
        form.card_expiry = "12/29".to_string();
        assert_eq!(form.card_expires_on(), NaiveDate::from_ymd_opt(2030, 1, 1));

        form.card_expiry = "03/24".to_string();
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert!(!form.card_expired(today));
        assert!(form.card_expired(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));

        form.card_expiry = "3/24".to_string();
        assert_eq!(form.card_expires_on(), None);
        assert!(!form.card_expired(today));
    }

    #[test]
    fn test_form_deserializes_with_defaults() {
        let form: CheckoutForm = serde_json::from_str(r#"{"full_name": "Ada"}"#).unwrap();
        assert_eq!(form.full_name, "Ada");
        assert_eq!(form.shipping_method.as_deref(), Some("standard"));
        assert_eq!(form.country, None);
    }
}
