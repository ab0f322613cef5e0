// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::{Color, Stylize};

pub const SILVER_METALLIC: Color = Color::Rgb { r: 213, g: 217, b: 220 };
pub const SLATE_GRAY: Color = Color::Rgb { r: 94, g: 103, b: 111 };
pub const LIZARD_GREEN: Color = Color::Rgb { r: 20, g: 244, b: 0 };
pub const SOFT_PINK: Color = Color::Rgb { r: 255, g: 181, b: 234 };
pub const FROZEN_BLUE: Color = Color::Rgb { r: 171, g: 204, b: 242 };
pub const MOONLIGHT_BLUE: Color = Color::Rgb { r: 31, g: 36, b: 46 };

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> String {
    arg_text.to_string().with(SILVER_METALLIC).to_string()
}

/// Error text style.
pub fn error(arg_text: impl Display) -> String {
    arg_text.to_string().with(SOFT_PINK).to_string()
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> String {
    arg_text.to_string().with(LIZARD_GREEN).bold().to_string()
}

/// De-emphasize (dim) text.
pub fn dim(arg_text: impl Display) -> String {
    arg_text.to_string().with(SLATE_GRAY).to_string()
}

/// The element an algorithm is looking at right now.
pub fn cursor(arg_text: impl Display) -> String {
    arg_text
        .to_string()
        .with(FROZEN_BLUE)
        .on(MOONLIGHT_BLUE)
        .bold()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_text_keeps_its_content() {
        for it in [normal("42"), error("42"), emphasis("42"), dim("42"), cursor("42")] {
            assert!(it.contains("42"));
        }
    }
}
