//! Reusable enrollment file contents.

/// Two enrollments as a previous run would have saved them
pub const TWO_ENROLLMENTS: &str = r#"[
 {
  "FirstName": "Ann",
  "LastName": "Lee",
  "CourseName": "Art"
 },
 {
  "FirstName": "Bob",
  "LastName": "Kim",
  "CourseName": "Math"
 }
]"#;

/// Valid JSON, wrong shape
pub const BARE_STRING: &str = "\"not a list\"";
