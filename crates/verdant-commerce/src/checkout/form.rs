//! Shipping and payment form, with presence-only validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSection {
    Shipping,
    Payment,
}

impl FormSection {
    pub fn title(&self) -> &'static str {
        match self {
            FormSection::Shipping => "Shipping Information",
            FormSection::Payment => "Payment Details",
        }
    }
}

/// A required checkout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    State,
    Zip,
    CardNumber,
    Expiry,
    Cvc,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 10] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Address,
        FormField::City,
        FormField::State,
        FormField::Zip,
        FormField::CardNumber,
        FormField::Expiry,
        FormField::Cvc,
    ];

    /// Key used in form files.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Email => "email",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Zip => "zip",
            FormField::CardNumber => "card_number",
            FormField::Expiry => "expiry",
            FormField::Cvc => "cvc",
        }
    }

    /// Input placeholder text.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email Address",
            FormField::Address => "Address",
            FormField::City => "City",
            FormField::State => "State",
            FormField::Zip => "ZIP",
            FormField::CardNumber => "Card Number",
            FormField::Expiry => "MM/YY",
            FormField::Cvc => "CVC",
        }
    }

    pub fn section(&self) -> FormSection {
        match self {
            FormField::CardNumber | FormField::Expiry | FormField::Cvc => FormSection::Payment,
            _ => FormSection::Shipping,
        }
    }

    /// Whether the value may be echoed back in logs or prompts.
    pub fn is_sensitive(&self) -> bool {
        self.section() == FormSection::Payment
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Values entered on the checkout page.
///
/// Keys absent from a form file deserialize as empty and are reported by
/// [`CheckoutForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::Zip => &self.zip,
            FormField::CardNumber => &self.card_number,
            FormField::Expiry => &self.expiry,
            FormField::Cvc => &self.cvc,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
            FormField::City => &mut self.city,
            FormField::State => &mut self.state,
            FormField::Zip => &mut self.zip,
            FormField::CardNumber => &mut self.card_number,
            FormField::Expiry => &mut self.expiry,
            FormField::Cvc => &mut self.cvc,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check that every required field has a value.
    ///
    /// Only presence is checked: a field is missing when it is empty or
    /// whitespace. Formats are not inspected.
    pub fn validate(&self) -> ValidationReport {
        let missing = FormField::ALL
            .into_iter()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect();
        ValidationReport { missing }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// "123 Main St, Springfield, IL 62701"
    pub fn ship_to(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip.trim()
        )
    }
}

/// Outcome of [`CheckoutForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Missing fields, in form order.
    pub missing: Vec<FormField>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_missing(&self, field: FormField) -> bool {
        self.missing.contains(&field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing.is_empty() {
            return f.write_str("all required fields present");
        }
        let names: Vec<&str> = self.missing.iter().map(|m| m.placeholder()).collect();
        write!(f, "missing {}", names.join(", "))
    }
}

#[cfg(test)]
pub(crate) fn complete_form() -> CheckoutForm {
    CheckoutForm::new()
        .with(FormField::FirstName, "Ada")
        .with(FormField::LastName, "Lovelace")
        .with(FormField::Email, "ada@example.com")
        .with(FormField::Address, "12 Fern Lane")
        .with(FormField::City, "Portland")
        .with(FormField::State, "OR")
        .with(FormField::Zip, "97201")
        .with(FormField::CardNumber, "4242 4242 4242 4242")
        .with(FormField::Expiry, "12/29")
        .with(FormField::Cvc, "123")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_every_field_in_order() {
        let report = CheckoutForm::new().validate();
        assert!(!report.is_valid());
        assert_eq!(report.missing, FormField::ALL.to_vec());
    }

    #[test]
    fn test_complete_form_is_valid() {
        let report = complete_form().validate();
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "all required fields present");
    }

    #[test]
    fn test_each_field_is_required() {
        for field in FormField::ALL {
            let form = complete_form().with(field, "");
            let report = form.validate();
            assert_eq!(report.missing, vec![field], "{} should be required", field);
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let form = complete_form()
            .with(FormField::City, "   ")
            .with(FormField::Cvc, "\t");
        let report = form.validate();
        assert!(report.is_missing(FormField::City));
        assert!(report.is_missing(FormField::Cvc));
        assert_eq!(report.to_string(), "missing City, CVC");
    }

    #[test]
    fn test_no_format_checks() {
        let form = complete_form()
            .with(FormField::Email, "not-an-email")
            .with(FormField::CardNumber, "x");
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_form_from_partial_toml() {
        let form: CheckoutForm = toml::from_str(
            r#"
            first_name = "Ada"
            email = "ada@example.com"
            "#,
        )
        .unwrap();
        let report = form.validate();
        assert!(!report.is_missing(FormField::FirstName));
        assert!(report.is_missing(FormField::LastName));
        assert_eq!(report.missing.len(), 8);
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FormField::Expiry.placeholder(), "MM/YY");
        assert_eq!(FormField::Zip.key(), "zip");
        assert_eq!(FormField::Cvc.section(), FormSection::Payment);
        assert!(FormField::CardNumber.is_sensitive());
        assert!(!FormField::Email.is_sensitive());
    }

    #[test]
    fn test_ship_to() {
        assert_eq!(complete_form().ship_to(), "12 Fern Lane, Portland, OR 97201");
        assert_eq!(complete_form().full_name(), "Ada Lovelace");
    }
}
