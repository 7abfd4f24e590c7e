//! Property tests for name validation and title casing.

use proptest::prelude::*;

use enroll::{HasName, NameField, Record};

/// Letters only, biased towards ones whose upper case is several chars
fn alpha_name() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z]{0,16}").unwrap(),
        proptest::string::string_regex("[A-Za-zßﬁﬂŉİǆéø]{0,16}").unwrap(),
        proptest::string::string_regex("\\p{L}{0,16}").unwrap(),
    ]
}

fn name_with_non_letter() -> impl Strategy<Value = String> {
    (
        proptest::string::string_regex("[A-Za-z]{0,6}").unwrap(),
        proptest::string::string_regex("[0-9 _!@#.'Ⅻ-]").unwrap(),
        proptest::string::string_regex("[A-Za-z0-9]{0,6}").unwrap(),
    )
        .prop_map(|(a, bad, b)| format!("{a}{bad}{b}"))
}

/// First char of the upper-cased first letter, everything after it lowered
fn expected_title(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    upper
        .next()
        .into_iter()
        .chain(upper.flat_map(char::to_lowercase))
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Alphabetic or empty names are accepted and read back title-cased.
    #[test]
    fn property_alpha_names_accepted(
        first in alpha_name(),
        last in alpha_name(),
        course in "(?s).{0,32}",
    ) {
        let record = Record::new(first.as_str(), last.as_str(), course.as_str()).unwrap();

        prop_assert_eq!(record.first_name(), expected_title(&first));
        prop_assert_eq!(record.last_name(), expected_title(&last));
        prop_assert_eq!(record.course_name(), course.as_str());
    }

    /// PROPERTY: Title casing never grows a name's first letter into several capitals.
    #[test]
    fn property_title_keeps_one_leading_capital(first in alpha_name()) {
        let record = Record::new(first.as_str(), "", "Course").unwrap();
        let title = record.first_name();
        let tail_chars = title.chars().skip(1).collect::<String>();
        prop_assert_eq!(tail_chars.to_lowercase(), tail_chars);
    }

    /// PROPERTY: Any digit, space or symbol in a first name is rejected.
    #[test]
    fn property_bad_first_name_rejected(first in name_with_non_letter(), last in alpha_name()) {
        let err = Record::new(first.as_str(), last.as_str(), "Course").unwrap_err();
        prop_assert_eq!(err.field, NameField::First);
    }

    /// PROPERTY: Any digit, space or symbol in a last name is rejected.
    #[test]
    fn property_bad_last_name_rejected(first in alpha_name(), last in name_with_non_letter()) {
        let err = Record::new(first.as_str(), last.as_str(), "Course").unwrap_err();
        prop_assert_eq!(err.field, NameField::Last);
    }

    /// PROPERTY: Title casing is idempotent.
    #[test]
    fn property_title_case_idempotent(name in "[ \\p{L}]{0,32}") {
        let once = enroll::domain::value_objects::title_case(&name);
        let twice = enroll::domain::value_objects::title_case(&once);
        prop_assert_eq!(once, twice);
    }
}
