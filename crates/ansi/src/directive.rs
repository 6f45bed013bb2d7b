// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting directives and the colors they can carry.

use crate::error::AnsiError;
use crate::escape::EscapeCode;
use std::str::FromStr;

/// Terminal colors addressable through SGR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette entry: `38;5;n`
    Indexed(u8),
    /// 24-bit color: `38;2;r;g;b`
    Rgb(u8, u8, u8),
}

impl Color {
    /// The sixteen named colors, standard then bright.
    pub const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Offset from 30 (foreground) or 40 (background); `None` for extended colors.
    fn offset(self) -> Option<u32> {
        let offset = match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::BrightBlack => 60,
            Color::BrightRed => 61,
            Color::BrightGreen => 62,
            Color::BrightYellow => 63,
            Color::BrightBlue => 64,
            Color::BrightMagenta => 65,
            Color::BrightCyan => 66,
            Color::BrightWhite => 67,
            Color::Indexed(_) | Color::Rgb(..) => return None,
        };
        Some(offset)
    }

    fn codes(self, base: u32) -> Vec<u32> {
        match (self.offset(), self) {
            (Some(offset), _) => vec![base + offset],
            (None, Color::Indexed(n)) => vec![base + 8, 5, u32::from(n)],
            (None, Color::Rgb(r, g, b)) => {
                vec![base + 8, 2, u32::from(r), u32::from(g), u32::from(b)]
            }
            (None, _) => Vec::new(),
        }
    }

    pub fn fg_codes(self) -> Vec<u32> {
        self.codes(30)
    }

    pub fn bg_codes(self) -> Vec<u32> {
        self.codes(40)
    }

    /// Underline color codes. There is no short form, so named colors go
    /// through their palette index (`58;5;1` for red, `58;5;9` for bright red).
    pub fn underline_codes(self) -> Vec<u32> {
        let index = match (self.offset(), self) {
            (Some(offset), _) if offset >= 60 => offset - 52,
            (Some(offset), _) => offset,
            (None, Color::Indexed(n)) => u32::from(n),
            (None, Color::Rgb(r, g, b)) => {
                return vec![58, 2, u32::from(r), u32::from(g), u32::from(b)];
            }
            (None, _) => return Vec::new(),
        };
        vec![58, 5, index]
    }

    /// Kebab-case name of a named color (`bright-red`).
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
            Color::Indexed(_) | Color::Rgb(..) => return None,
        };
        Some(name)
    }
}

/// Parses a color name (`red`, `bright-blue`), a palette index (`208`)
/// or a hex triplet (`#d77757`).
impl FromStr for Color {
    type Err = AnsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(color) = Color::NAMED
            .into_iter()
            .find(|c| c.name() == Some(normalized.as_str()))
        {
            return Ok(color);
        }
        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| AnsiError::UnknownColor(s.to_string()));
        }
        normalized
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| AnsiError::UnknownColor(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// A single SGR formatting directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    RapidBlink,
    Inverse,
    Hidden,
    Strikethrough,
    DoubleUnderline,
    Overline,
    Foreground(Color),
    Background(Color),
    UnderlineColor(Color),
}

impl Directive {
    /// Text attributes, in SGR code order.
    pub const ATTRIBUTES: [Directive; 11] = [
        Directive::Bold,
        Directive::Dim,
        Directive::Italic,
        Directive::Underline,
        Directive::Blink,
        Directive::RapidBlink,
        Directive::Inverse,
        Directive::Hidden,
        Directive::Strikethrough,
        Directive::DoubleUnderline,
        Directive::Overline,
    ];

    /// Every directive with a fixed code: attributes plus named foreground
    /// and background colors. Underline colors only have extended forms.
    pub fn all() -> Vec<Directive> {
        let mut all = Directive::ATTRIBUTES.to_vec();
        all.extend(Color::NAMED.into_iter().map(Directive::Foreground));
        all.extend(Color::NAMED.into_iter().map(Directive::Background));
        all
    }

    pub fn escape_code(self) -> EscapeCode {
        match self {
            Directive::Bold => EscapeCode::new(vec![1], 22),
            Directive::Dim => EscapeCode::new(vec![2], 22),
            Directive::Italic => EscapeCode::new(vec![3], 23),
            Directive::Underline => EscapeCode::new(vec![4], 24),
            Directive::Blink => EscapeCode::new(vec![5], 25),
            Directive::RapidBlink => EscapeCode::new(vec![6], 25),
            Directive::Inverse => EscapeCode::new(vec![7], 27),
            Directive::Hidden => EscapeCode::new(vec![8], 28),
            Directive::Strikethrough => EscapeCode::new(vec![9], 29),
            Directive::DoubleUnderline => EscapeCode::new(vec![21], 24),
            Directive::Overline => EscapeCode::new(vec![53], 55),
            Directive::Foreground(color) => EscapeCode::new(color.fg_codes(), 39),
            Directive::Background(color) => EscapeCode::new(color.bg_codes(), 49),
            Directive::UnderlineColor(color) => EscapeCode::new(color.underline_codes(), 59),
        }
    }

    /// Whether two directives occupy the same slot, so the later replaces the earlier.
    pub fn shares_slot(self, other: Directive) -> bool {
        matches!(
            (self, other),
            (Directive::Foreground(_), Directive::Foreground(_))
                | (Directive::Background(_), Directive::Background(_))
                | (Directive::UnderlineColor(_), Directive::UnderlineColor(_))
        )
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
