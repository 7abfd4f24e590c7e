//! Record entity
//!
//! One student enrolled in one course. Name fields are validated on every
//! write and title-cased on every read; the course name is free text.

use std::fmt;

use crate::domain::value_objects::{NameField, PersonName, ValidationError};

/// Something with a first and last name
pub trait HasName {
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;

    /// "{FirstName} {LastName}"
    fn display_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Record {
    first_name: PersonName,
    last_name: PersonName,
    course_name: String,
}

impl Record {
    /// Create a validated record.
    ///
    /// Empty names are accepted as "no value". Fails with the first name
    /// field that contains anything other than alphabetic characters.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl fmt::Display,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::parse(NameField::First, first_name)?,
            last_name: PersonName::parse(NameField::Last, last_name)?,
            course_name: course_name.to_string(),
        })
    }

    /// Rebuild a record from persisted data without re-validating the names
    pub(crate) fn from_persisted(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: PersonName::new_unchecked(first_name),
            last_name: PersonName::new_unchecked(last_name),
            course_name: course_name.into(),
        }
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = PersonName::parse(NameField::First, value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = PersonName::parse(NameField::Last, value)?;
        Ok(())
    }

    pub fn set_course_name(&mut self, value: impl fmt::Display) {
        self.course_name = value.to_string();
    }

    /// Builder-style copy with the first name replaced
    pub fn with_first_name(mut self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_first_name(value)?;
        Ok(self)
    }

    /// Builder-style copy with the last name replaced
    pub fn with_last_name(mut self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_last_name(value)?;
        Ok(self)
    }

    /// Builder-style copy with the course name replaced
    pub fn with_course_name(mut self, value: impl fmt::Display) -> Self {
        self.set_course_name(value);
        self
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// "{FirstName} {LastName}, is enrolled in {CourseName}"
    pub fn describe(&self) -> String {
        format!(
            "{}, is enrolled in {}",
            self.display_name(),
            self.course_name
        )
    }
}

impl HasName for Record {
    fn first_name(&self) -> String {
        self.first_name.title()
    }

    fn last_name(&self) -> String {
        self.last_name.title()
    }
}

/// Records compare by what they read back as, not by how they were typed
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.first_name() == other.first_name()
            && self.last_name() == other.last_name()
            && self.course_name == other.course_name
    }
}

impl Eq for Record {}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
