use methodmetrics::naming::{check_names, incorrect_name_percentage, NamingRule};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_mixed_names_percentage() {
    let rule = NamingRule::lower_camel_case();
    let names = ["getValue", "get_value", "isReady", "run"];

    let check = check_names(names, &rule);
    assert_eq!(check.non_conforming, vec!["get_value", "run"]);
    assert_eq!(check.incorrect_percentage(), 50.0);
}

#[test]
fn test_single_letter_hump_is_non_conforming() {
    // The final segment after a capital needs at least one more character,
    // so `getX` fails the rule alongside `get_value` and `run`.
    let rule = NamingRule::lower_camel_case();
    let names = ["getX", "get_value", "isReady", "run"];

    let check = check_names(names, &rule);
    assert_eq!(check.non_conforming, vec!["getX", "get_value", "run"]);
    assert_eq!(incorrect_name_percentage(names, &rule), 75.0);
}

#[test]
fn test_no_names_is_zero_not_nan() {
    let rule = NamingRule::lower_camel_case();
    let percentage = incorrect_name_percentage(Vec::<&str>::new(), &rule);
    assert_eq!(percentage, 0.0);
    assert!(!percentage.is_nan());
}

#[test]
fn test_all_conforming_is_zero() {
    let rule = NamingRule::lower_camel_case();
    assert_eq!(
        incorrect_name_percentage(["getColumn", "setFormula", "updateContent"], &rule),
        0.0
    );
}

#[test]
fn test_digits_allowed_in_segments() {
    let rule = NamingRule::lower_camel_case();
    assert!(rule.is_conforming("parseUtf8"));
    assert!(rule.is_conforming("toBase64String"));
    assert!(!rule.is_conforming("get2Value"));
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}"
}

proptest! {
    /// Property: the percentage equals 100 * offenders / total for any input
    #[test]
    fn prop_percentage_matches_direct_count(names in prop::collection::vec(identifier(), 1..40)) {
        let rule = NamingRule::lower_camel_case();
        let offenders = names.iter().filter(|n| !rule.is_conforming(n)).count();
        let expected = 100.0 * offenders as f64 / names.len() as f64;

        let actual = incorrect_name_percentage(names.iter().map(String::as_str), &rule);
        prop_assert_eq!(actual, expected);
        prop_assert!((0.0..=100.0).contains(&actual));
    }

    /// Property: a hump-free lowercase word never conforms
    #[test]
    fn prop_single_lowercase_word_never_conforms(name in "[a-z]{1,12}") {
        prop_assert!(!NamingRule::lower_camel_case().is_conforming(&name));
    }
}
