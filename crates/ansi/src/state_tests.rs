// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

fn state_after(params: &[&str]) -> SgrState {
    let mut state = SgrState::new();
    for p in params {
        state.apply(p);
    }
    state
}

// =============================================================================
// parse_params
// =============================================================================

#[rstest]
#[case("", vec![vec![0]])]
#[case("0", vec![vec![0]])]
#[case("1;31", vec![vec![1], vec![31]])]
#[case(";31", vec![vec![0], vec![31]])]
#[case("38;5;208", vec![vec![38, 5, 208]])]
#[case("1;38;2;215;119;87;4", vec![vec![1], vec![38, 2, 215, 119, 87], vec![4]])]
#[case("48;2;0;0", vec![vec![48, 2, 0, 0]])]
#[case("58;5;3;4", vec![vec![58, 5, 3], vec![4]])]
#[case("38;1", vec![vec![38], vec![1]])]
#[case("?1;x;2", vec![vec![2]])]
fn parse_params_groups(#[case] params: &str, #[case] expected: Vec<Vec<u32>>) {
    assert_eq!(parse_params(params), expected);
}

// =============================================================================
// apply
// =============================================================================

#[test]
fn open_then_reset_is_empty() {
    let state = state_after(&["31", "0"]);
    assert!(state.is_empty());
    assert_eq!(state.open_sequence(), "");
    assert_eq!(state.close_sequence(), "");
}

#[test]
fn empty_params_reset() {
    assert!(state_after(&["1;31", ""]).is_empty());
}

#[test]
fn single_open_code() {
    let state = state_after(&["31"]);
    assert_eq!(state.open_sequence(), "\x1b[31m");
    assert_eq!(state.close_sequence(), "\x1b[39m");
}

#[test]
fn combined_codes_open_together() {
    let state = state_after(&["1;4;31"]);
    assert_eq!(state.open_codes().len(), 3);
    assert_eq!(state.open_sequence(), "\x1b[1;4;31m");
    assert_eq!(state.close_sequence(), "\x1b[39;24;22m");
}

#[test]
fn later_color_replaces_earlier_in_same_slot() {
    let state = state_after(&["31", "44", "32"]);
    assert_eq!(state.open_sequence(), "\x1b[44;32m");
    assert_eq!(state.close_sequence(), "\x1b[39;49m");
}

#[test]
fn close_code_removes_matching_directives() {
    // 22 closes both bold and dim
    let state = state_after(&["1", "2", "31", "22"]);
    assert_eq!(state.open_sequence(), "\x1b[31m");
}

#[test]
fn duplicate_attribute_is_ignored() {
    let state = state_after(&["1", "1"]);
    assert_eq!(state.open_sequence(), "\x1b[1m");
}

#[test]
fn extended_colors_keep_arguments() {
    let state = state_after(&["38;2;215;119;87", "48;5;0"]);
    assert_eq!(state.open_sequence(), "\x1b[38;2;215;119;87;48;5;0m");
    assert_eq!(state.close_sequence(), "\x1b[49;39m");
}

#[rstest]
#[case("38")]
#[case("38;5")]
#[case("48;2;0;0")]
#[case("58;2;1")]
#[case("48;5")]
fn malformed_extended_color_is_ignored(#[case] params: &str) {
    assert!(state_after(&[params]).is_empty());
}

#[test]
fn malformed_extended_color_keeps_earlier_color() {
    let state = state_after(&["41", "48;2;0;0"]);
    assert_eq!(state.open_sequence(), "\x1b[41m");
}

#[test]
fn underline_color_has_its_own_slot() {
    let state = state_after(&["58;5;3;4", "38;5;1", "58;2;9;9;9"]);
    assert_eq!(state.open_sequence(), "\x1b[4;38;5;1;58;2;9;9;9m");
    assert_eq!(state.close_sequence(), "\x1b[59;39;24m");
}

#[test]
fn extra_attributes_are_tracked() {
    let state = state_after(&["6", "21", "53"]);
    assert_eq!(state.open_sequence(), "\x1b[6;21;53m");
    assert_eq!(state.close_sequence(), "\x1b[55;24;25m");
    assert!(state_after(&["53", "55"]).is_empty());
}

#[test]
fn underline_off_closes_double_underline() {
    assert!(state_after(&["4", "21", "24"]).is_empty());
}

#[test]
fn unknown_codes_are_ignored() {
    let state = state_after(&["10", "11", "54", "200"]);
    assert!(state.is_empty());
}

#[test]
fn close_without_open_is_noop() {
    let state = state_after(&["39", "22"]);
    assert!(state.is_empty());
}
