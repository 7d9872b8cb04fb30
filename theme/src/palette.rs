//! Static palette for the site's visuals. Values are CSS hex strings so page
//! views can apply them directly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ThemeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorPair<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> ColorPair<'a> {
    pub const fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: ColorPair<'static>,
    pub secondary: ColorPair<'static>,
    pub accent: ColorPair<'static>,
    pub background: ColorPair<'static>,
    pub text: TextColors,
    pub paint_splash: [&'static str; 6],
}

pub static PALETTE: Palette = Palette {
    primary: ColorPair::new("#2E3192", "#1BFFFF"),
    secondary: ColorPair::new("#FF416C", "#FF4B2B"),
    accent: ColorPair::new("#4776E6", "#8E54E9"),
    background: ColorPair::new("#FFFFFF", "#F8F9FA"),
    text: TextColors {
        primary: "#2C3E50",
        secondary: "#34495E",
    },
    paint_splash: [
        "#FF6B6B", "#4ECDC4", "#45B7D1", "#96E6A1", "#D4A5A5", "#FFE66D",
    ],
};

impl Palette {
    /// The color pair behind a role. `Text` yields primary to secondary.
    pub fn role(&self, role: Role) -> ColorPair<'static> {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Background => self.background,
            Role::Text => ColorPair::new(self.text.primary, self.text.secondary),
        }
    }

    /// Returns the splash color for any index, wrapping around the sequence.
    #[inline]
    pub fn splash_color(&self, index: usize) -> &'static str {
        self.paint_splash[index % self.paint_splash.len()]
    }

    pub fn splash_len(&self) -> usize {
        self.paint_splash.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Background => "background",
            Role::Text => "text",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownRole {
                name: s.to_string(),
            })
    }
}
