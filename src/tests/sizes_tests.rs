// src/tests/sizes_tests.rs

use crate::domain::sizes::extract_size_number;

#[test]
fn clothing_table_is_exact() {
    let table = [
        ("XXXS", 1.0),
        ("XXS", 2.0),
        ("XS", 3.0),
        ("S", 4.0),
        ("M", 5.0),
        ("L", 6.0),
        ("XL", 7.0),
        ("XXL", 8.0),
        ("2XL", 8.0),
        ("3XL", 9.0),
        ("4XL", 10.0),
    ];

    for (label, expected) in table {
        assert_eq!(
            extract_size_number(label),
            Some(expected),
            "wrong rank for {label}"
        );
    }
}

#[test]
fn xxl_and_2xl_share_a_rank() {
    assert_eq!(extract_size_number("XXL"), extract_size_number("2XL"));
}

#[test]
fn slash_between_clothing_sizes_takes_the_mean() {
    assert_eq!(extract_size_number("S/M"), Some(4.5));
    assert_eq!(extract_size_number("M/L"), Some(5.5));
}

#[test]
fn slash_clothing_and_number_takes_the_number() {
    assert_eq!(extract_size_number("S/46"), Some(46.0));
}

#[test]
fn slash_between_numbers_takes_the_last() {
    assert_eq!(extract_size_number("36/37"), Some(37.0));
}

#[test]
fn slash_with_no_numbers_is_unrecognized() {
    assert_eq!(extract_size_number("S/??"), None);
    assert_eq!(extract_size_number("One/Two"), None);
}

#[test]
fn slash_with_three_parts_is_unrecognized() {
    assert_eq!(extract_size_number("S/M/L"), None);
}

#[test]
fn age_codes_resolve_to_lower_bound() {
    // 9-10 years / 13-14 years
    assert_eq!(extract_size_number("910A"), Some(9.0));
    assert_eq!(extract_size_number("1314A"), Some(13.0));
}

#[test]
fn other_trailing_a_labels_fall_back_to_first_integer() {
    assert_eq!(extract_size_number("12A"), Some(12.0));
    assert_eq!(extract_size_number("UK-7A"), Some(7.0));
}

#[test]
fn fallback_extracts_first_embedded_integer() {
    assert_eq!(extract_size_number("EU 42"), Some(42.0));
    assert_eq!(extract_size_number("40"), Some(40.0));
    assert_eq!(extract_size_number("Size 38 (IT)"), Some(38.0));
}

#[test]
fn no_digits_no_table_match_is_unrecognized() {
    assert_eq!(extract_size_number("One Size"), None);
    assert_eq!(extract_size_number(""), None);
    assert_eq!(extract_size_number("xl"), None);
}
