//! Person Name Value Object
//!
//! A validated first or last name:
//! - Alphabetic characters only, or empty ("no value")
//! - Stored as entered, title-cased whenever it is read

use std::fmt;

/// Which name field a value was destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    /// Human-readable label, e.g. "First name"
    pub fn label(self) -> &'static str {
        match self {
            NameField::First => "First name",
            NameField::Last => "Last name",
        }
    }

    /// Key used for this field in the persisted file
    pub fn key(self) -> &'static str {
        match self {
            NameField::First => "FirstName",
            NameField::Last => "LastName",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A name value was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} can only contain alphabetic characters.")]
pub struct ValidationError {
    pub field: NameField,
    pub value: String,
}

/// A validated person name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate `value` as the given field
    pub fn parse(field: NameField, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_valid_name(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError { field, value })
        }
    }

    /// Wrap a value without validation (previously persisted data)
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The value as originally entered
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The value in title case
    pub fn title(&self) -> String {
        title_case(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// Empty, or alphabetic characters only. Letter numerals such as `Ⅻ`
/// are alphabetic in Unicode but are not accepted as letters here.
pub fn is_valid_name(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() && !c.is_numeric())
}

/// Upper-case the first letter of each whitespace-separated token and
/// lower-case the rest. Whitespace is kept as-is.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_token_start = true;
    for c in value.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_token_start = true;
        } else if at_token_start {
            // `ß` upper-cases to "SS": only the first char stays upper
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
            at_token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
