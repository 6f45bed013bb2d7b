// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static table from individual SGR codes to the directives they belong to.
//!
//! Built once from [`Directive::all`] plus the extended-color introducers
//! (`38`/`48`/`58`), indexing every open code and every close code.

use crate::directive::Directive;
use crate::escape::EscapeCode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Introducer of 256-color and truecolor foregrounds.
pub const EXTENDED_FOREGROUND: u32 = 38;
/// Introducer of 256-color and truecolor backgrounds.
pub const EXTENDED_BACKGROUND: u32 = 48;
/// Introducer of underline colors, which only exist in extended form.
pub const EXTENDED_UNDERLINE: u32 = 58;

static REGISTRY: LazyLock<HashMap<u32, Vec<EscapeCode>>> = LazyLock::new(build);

fn build() -> HashMap<u32, Vec<EscapeCode>> {
    let entries = Directive::all()
        .into_iter()
        .map(Directive::escape_code)
        .chain([
            EscapeCode::new(vec![EXTENDED_FOREGROUND], 39),
            EscapeCode::new(vec![EXTENDED_BACKGROUND], 49),
            EscapeCode::new(vec![EXTENDED_UNDERLINE], 59),
        ]);

    let mut table: HashMap<u32, Vec<EscapeCode>> = HashMap::new();
    for entry in entries {
        for &code in entry.open_codes() {
            table.entry(code).or_default().push(entry.clone());
        }
        table.entry(entry.close_code()).or_default().push(entry);
    }
    table
}

/// Every escape code `code` participates in, as opener or closer.
pub fn lookup(code: u32) -> &'static [EscapeCode] {
    let table: &'static HashMap<u32, Vec<EscapeCode>> = &REGISTRY;
    table.get(&code).map(Vec::as_slice).unwrap_or(&[])
}

/// Close code of the directive opened by `code`, if `code` opens one.
pub fn close_code_for(code: u32) -> Option<u32> {
    lookup(code)
        .iter()
        .find(|entry| entry.open_codes().first() == Some(&code))
        .map(EscapeCode::close_code)
}

/// Whether `code` closes at least one known directive.
pub fn is_close_code(code: u32) -> bool {
    lookup(code).iter().any(|entry| entry.close_code() == code)
}

/// Whether `code` introduces an extended (`;5;n` or `;2;r;g;b`) color.
pub fn is_extended_color(code: u32) -> bool {
    matches!(
        code,
        EXTENDED_FOREGROUND | EXTENDED_BACKGROUND | EXTENDED_UNDERLINE
    )
}

/// Whether `code` closes a color slot, where a later color replaces the
/// earlier one instead of stacking.
pub fn is_color_close(code: u32) -> bool {
    matches!(code, 39 | 49 | 59)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
