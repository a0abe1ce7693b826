// Form fields and the value snapshot handed to the validator

use crate::FormError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One of the six signup inputs.
///
/// The variant order is the declared form order; it decides which field is
/// reported first when several are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Age,
    Mobile,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Every field in declared order.
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Age,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Wire name, as used in form payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Age => "age",
            FieldName::Mobile => "mobile",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Position in declared order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether surrounding whitespace is stripped before the rules run.
    /// Passwords are compared exactly as typed.
    pub fn is_trimmed(self) -> bool {
        !matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Raw values of all six fields at one moment.
///
/// Every field is always present; an untouched input is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub name: String,
    pub age: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Age => &self.age,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the raw value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Age => &mut self.age,
            FieldName::Mobile => &mut self.mobile,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder form of [`FieldValues::set`].
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Build a snapshot from wire-named entries.
    ///
    /// All six fields must be present. Unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, FormError> {
        let mut values = Self::new();
        for field in FieldName::ALL {
            let value = map
                .get(field.as_str())
                .ok_or(FormError::MissingField(field))?;
            values.set(field, value.as_str());
        }
        Ok(values)
    }

    /// Fields paired with their values, in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl TryFrom<HashMap<String, String>> for FieldValues {
    type Error = FormError;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}
