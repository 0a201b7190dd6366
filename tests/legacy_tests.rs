// tests/legacy_tests.rs
//
// The legacy flag is process-wide state, so the whole protocol is exercised
// in a single test function rather than across parallel #[test] functions
// that would race on it.

use numeral::legacy;

#[test]
fn test_flag_protocol() {
    legacy::init();
    assert!(!legacy::error_flag());

    // Successful calls leave the flag untouched.
    assert_eq!(legacy::str2long("42"), 42);
    assert_eq!(legacy::str2long("-9223372036854775808"), i64::MIN);
    assert!(!legacy::error_flag());

    // Any failure sets the flag and returns -1, with no way to tell an
    // overflow from a bad character from empty input.
    assert_eq!(legacy::str2long("12a3"), -1);
    assert!(legacy::error_flag());
    assert_eq!(legacy::str2long(""), -1);
    assert_eq!(legacy::str2long("9223372036854775808"), -1);
    assert!(legacy::error_flag());

    // The legacy return value conflates failure with a genuine -1.
    assert_eq!(legacy::str2long("-1"), -1);
    assert_eq!(legacy::str2long("bogus"), -1);

    // Write-once-on-failure: a later success does not clear the flag.
    assert_eq!(legacy::str2long("7"), 7);
    assert!(legacy::error_flag());

    // Only an explicit init resets it.
    legacy::init();
    assert!(!legacy::error_flag());
}

#[test]
fn test_str2long_values_match_parse() {
    // Success-only checks: successful calls never write the flag, so this
    // test cannot race with test_flag_protocol.
    assert_eq!(legacy::str2long("007"), 7);
    assert_eq!(legacy::str2long("-42"), -42);
    assert_eq!(legacy::str2long("9223372036854775807"), i64::MAX);
    assert_eq!(legacy::str2long("-1"), -1);
}
