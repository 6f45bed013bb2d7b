// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by kommons-ansi are defined here.

/// Name of the variable bounding each memoization cache.
pub const KOMMONS_ANSI_CACHE_CAPACITY: &str = "KOMMONS_ANSI_CACHE_CAPACITY";

/// Entries kept per memoization cache when the variable is unset or invalid.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// `KOMMONS_ANSI_CACHE_CAPACITY` — Entry bound per cache. `0` disables memoization.
///
/// The bound counts entries, not bytes: each cache keeps up to this many
/// source texts (and their tokens or slices) alive regardless of their size.
pub fn cache_capacity() -> usize {
    parse_capacity(std::env::var(KOMMONS_ANSI_CACHE_CAPACITY).ok().as_deref())
}

fn parse_capacity(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_CACHE_CAPACITY)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
