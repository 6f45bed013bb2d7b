// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[case(None, DEFAULT_CACHE_CAPACITY)]
#[case(Some("0"), 0)]
#[case(Some("16"), 16)]
#[case(Some(" 32 "), 32)]
#[case(Some("lots"), DEFAULT_CACHE_CAPACITY)]
#[case(Some("-1"), DEFAULT_CACHE_CAPACITY)]
#[case(Some(""), DEFAULT_CACHE_CAPACITY)]
fn parse_capacity_falls_back_to_default(#[case] value: Option<&str>, #[case] expected: usize) {
    assert_eq!(parse_capacity(value), expected);
}

#[test]
#[serial]
fn cache_capacity_returns_default_when_unset() {
    std::env::remove_var(KOMMONS_ANSI_CACHE_CAPACITY);
    assert_eq!(cache_capacity(), DEFAULT_CACHE_CAPACITY);
}

#[test]
#[serial]
fn cache_capacity_reads_variable_when_set() {
    std::env::set_var(KOMMONS_ANSI_CACHE_CAPACITY, "7");
    let result = cache_capacity();
    std::env::remove_var(KOMMONS_ANSI_CACHE_CAPACITY);
    assert_eq!(result, 7);
}
