//! Shipping details captured in the first checkout step.

use serde::{Deserialize, Serialize};

/// States offered by the shipping form.
pub const SUPPORTED_STATES: [(&str, &str); 4] = [
    ("CA", "California"),
    ("NY", "New York"),
    ("TX", "Texas"),
    ("FL", "Florida"),
];

/// Who and where to ship to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Two-letter state code, normally one of [`SUPPORTED_STATES`].
    pub state: String,
    pub zip_code: String,
}

impl ShippingInfo {
    /// Names of required fields that are blank. Whitespace counts as blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip code", &self.zip_code),
        ];

        fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// "City, ST 12345"
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city.trim(), self.state.trim(), self.zip_code.trim())
    }

    /// Full state name, when the code is a supported one.
    pub fn state_name(&self) -> Option<&'static str> {
        state_name(&self.state)
    }

    /// Format as multi-line, as shown on the review step.
    pub fn multi_line(&self) -> String {
        [
            self.full_name(),
            self.address.trim().to_string(),
            self.city_line(),
            self.phone.trim().to_string(),
        ]
        .join("\n")
    }
}

/// Full state name for a supported code.
pub fn state_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    SUPPORTED_STATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

#[cfg(test)]
pub(crate) fn sample() -> ShippingInfo {
    ShippingInfo {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "12 Analytical Way".to_string(),
        city: "Los Angeles".to_string(),
        state: "CA".to_string(),
        zip_code: "90001".to_string(),
    }
}
