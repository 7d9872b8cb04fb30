use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ThemeError};

/// An opacity channel in `0.0..=1.0`.
///
/// Gradients and splash colors encode it as a trailing alpha byte,
/// `round(opacity * 255)` in two lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub const OPAQUE: Self = Self(1.0);
    pub const TRANSPARENT: Self = Self(0.0);

    /// Rejects NaN and anything outside `0.0..=1.0`.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            debug!(value, "rejected opacity outside 0.0..=1.0");
            Err(ThemeError::OpacityOutOfRange { value })
        }
    }

    /// Clamps into `0.0..=1.0`. NaN becomes fully transparent.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::TRANSPARENT
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_opaque(self) -> bool {
        self.0 == 1.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 * 255.0).round() as u8
    }

    pub fn alpha_hex(self) -> String {
        format!("{:02x}", self.alpha())
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
