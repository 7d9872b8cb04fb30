use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, ThemeError};

/// Channel offset used for the lighter and darker variants.
pub const SHADE_STEP: u8 = 50;

/// An RGB color with no alpha channel. Formats as lowercase `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses exactly six hex digits, optionally prefixed with `#`.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            debug!(input, "rejected malformed hex color");
            return Err(ThemeError::InvalidColorFormat {
                input: input.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::InvalidColorFormat {
                input: input.to_string(),
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn complement(self) -> Self {
        self.map(|channel| 255 - channel)
    }

    pub fn lighten(self, amount: u8) -> Self {
        self.map(|channel| channel.saturating_add(amount))
    }

    pub fn darken(self, amount: u8) -> Self {
        self.map(|channel| channel.saturating_sub(amount))
    }

    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colors derived from a single base color on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedColors {
    pub complement: HexColor,
    pub lighter: HexColor,
    pub darker: HexColor,
}

impl From<HexColor> for DerivedColors {
    fn from(base: HexColor) -> Self {
        Self {
            complement: base.complement(),
            lighter: base.lighten(SHADE_STEP),
            darker: base.darken(SHADE_STEP),
        }
    }
}

/// Complement, lighter and darker variants of `base`.
///
/// Fails with [`ThemeError::InvalidColorFormat`] unless `base` is six hex
/// digits with an optional leading `#`.
pub fn complementary_colors(base: &str) -> Result<DerivedColors> {
    HexColor::parse(base).map(DerivedColors::from)
}
