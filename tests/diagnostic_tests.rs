//! Tests for diagnostic output.
//!
//! These tests pin the stable parts of the `miette::Diagnostic` surface -
//! error codes, labeled spans, and help text - so error presentation stays
//! consistent across changes.

use miette::Diagnostic;
use numeral::parse;

#[test]
fn test_error_codes_are_stable() {
    let cases = [
        ("", "numeral::parse::empty"),
        ("12a3", "numeral::parse::invalid_char"),
        ("9223372036854775808", "numeral::parse::overflow"),
        ("-9223372036854775809", "numeral::parse::underflow"),
    ];

    for (input, expected_code) in cases {
        let err = parse(input).unwrap_err();
        assert_eq!(err.diagnostic_info.error_code, expected_code);
        let rendered = err.code().map(|c| c.to_string());
        assert_eq!(rendered.as_deref(), Some(expected_code));
    }
}

#[test]
fn test_label_points_at_offending_character() {
    let err = parse("12a3").unwrap_err();
    let labels: Vec<_> = err.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 2);
    assert_eq!(labels[0].len(), 1);
    assert_eq!(labels[0].label(), Some("not a digit"));
}

#[test]
fn test_empty_input_label_is_a_zero_width_span() {
    let err = parse("-").unwrap_err();
    let labels: Vec<_> = err.labels().into_iter().flatten().collect();
    assert_eq!(labels[0].offset(), 1);
    assert_eq!(labels[0].len(), 0);
}

#[test]
fn test_every_error_carries_help_and_source() {
    for input in ["", "-", "x", "9223372036854775808", "-9223372036854775809"] {
        let err = parse(input).unwrap_err();
        assert!(err.help().is_some(), "no help for input {input:?}");
        assert!(err.source_code().is_some(), "no source for input {input:?}");
    }
}

#[test]
fn test_range_help_names_the_boundary() {
    let err = parse("9223372036854775808").unwrap_err();
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains(&i64::MAX.to_string()));

    let err = parse("-9223372036854775809").unwrap_err();
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains(&i64::MIN.to_string()));
}
