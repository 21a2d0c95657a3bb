// src/tests/sequence_tests.rs

use crate::domain::sequence::{classify_sequence, SizeSequential};

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ascending_clothing_sizes_are_sequential() {
    assert_eq!(
        classify_sequence(&labels(&["S", "M", "L"])),
        SizeSequential::Yes
    );
}

#[test]
fn out_of_order_sizes_are_not_sequential() {
    assert_eq!(
        classify_sequence(&labels(&["L", "S", "M"])),
        SizeSequential::No
    );
}

#[test]
fn single_size_is_never_sequential() {
    assert_eq!(classify_sequence(&labels(&["S"])), SizeSequential::No);
}

#[test]
fn empty_list_is_never_sequential() {
    assert_eq!(classify_sequence(&[]), SizeSequential::No);
}

#[test]
fn unrecognized_entry_anywhere_forces_no() {
    assert_eq!(
        classify_sequence(&labels(&["Weird-Format-X", "M"])),
        SizeSequential::No
    );
    assert_eq!(
        classify_sequence(&labels(&["S", "M", "One Size"])),
        SizeSequential::No
    );
}

#[test]
fn non_size_markers_force_no() {
    assert_eq!(
        classify_sequence(&labels(&["Default Title", "S"])),
        SizeSequential::No
    );
    assert_eq!(
        classify_sequence(&labels(&["Add Your Name/Number", "S"])),
        SizeSequential::No
    );
}

#[test]
fn ties_count_as_non_decreasing() {
    // XXL and 2XL share rank 8
    assert_eq!(
        classify_sequence(&labels(&["XL", "XXL", "2XL"])),
        SizeSequential::Yes
    );
}

#[test]
fn mixed_vocabularies_compare_on_one_scale() {
    // S=4, S/M=4.5, M=5
    assert_eq!(
        classify_sequence(&labels(&["S", "S/M", "M"])),
        SizeSequential::Yes
    );
    assert_eq!(
        classify_sequence(&labels(&["S", "M", "S/M"])),
        SizeSequential::No
    );
}

#[test]
fn numeric_shoe_sizes_in_order() {
    assert_eq!(
        classify_sequence(&labels(&["36/37", "38/39", "40/41"])),
        SizeSequential::Yes
    );
}

#[test]
fn age_range_codes_in_order() {
    assert_eq!(
        classify_sequence(&labels(&["910A", "1112A", "1314A"])),
        SizeSequential::Yes
    );
}
