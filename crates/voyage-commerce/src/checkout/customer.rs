//! Customer details collected at checkout.

use serde::{Deserialize, Serialize};

use crate::validation::{require_fields, ValidationError};

/// Contact and billing details entered on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

impl CustomerDetails {
    /// Details with only the required fields set.
    pub fn new(
        first_name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            address: address.into(),
            city: city.into(),
            ..Self::default()
        }
    }

    /// First and last name joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// First name, email, address and city must be non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_fields(&[
            ("firstName", self.first_name.as_str()),
            ("email", self.email.as_str()),
            ("address", self.address.as_str()),
            ("city", self.city.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let mut customer = CustomerDetails::new("Ada", "ada@example.com", "1 Main St", "Lisbon");
        assert!(customer.validate().is_ok());

        customer.first_name = "   ".to_string();
        customer.city.clear();
        let err = customer.validate().unwrap_err();
        assert_eq!(err.missing, vec!["firstName", "city"]);
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let customer = CustomerDetails::new("Ada", "not-an-email", "x", "y");
        assert!(customer.validate().is_ok());
        assert_eq!(customer.full_name(), "Ada");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let mut customer = CustomerDetails::new("Ada", "a@b.c", "1 Main St", "Lisbon");
        customer.zip_code = "1000".to_string();
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["zipCode"], "1000");
    }
}
