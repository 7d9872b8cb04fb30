use std::fmt;

use crate::error::Result;
use crate::opacity::Opacity;
use crate::palette::ColorPair;

pub const DEFAULT_ANGLE: &str = "145deg";

/// A CSS `linear-gradient` between the two colors of a pair.
///
/// Both endpoints carry the same alpha byte, including `ff` when opaque.
/// The angle is passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient<'a> {
    pair: ColorPair<'a>,
    angle: &'a str,
    opacity: Opacity,
}

impl<'a> Gradient<'a> {
    pub fn new(pair: ColorPair<'a>) -> Self {
        Self {
            pair,
            angle: DEFAULT_ANGLE,
            opacity: Opacity::OPAQUE,
        }
    }

    pub fn angle(mut self, angle: &'a str) -> Self {
        self.angle = angle;
        self
    }

    pub fn opacity(mut self, opacity: Opacity) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gradient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = self.opacity.alpha_hex();
        write!(
            f,
            "linear-gradient({}, {}{alpha}, {}{alpha})",
            self.angle, self.pair.start, self.pair.end
        )
    }
}

/// Renders `linear-gradient(<angle>, <start><aa>, <end><aa>)`.
///
/// `opacity` must lie in `0.0..=1.0`; anything else fails with
/// [`ThemeError::OpacityOutOfRange`](crate::ThemeError::OpacityOutOfRange).
/// Use [`Gradient`] with [`Opacity::saturating`] to clamp instead.
pub fn gradient(pair: ColorPair<'_>, angle: &str, opacity: f64) -> Result<String> {
    let opacity = Opacity::new(opacity)?;
    Ok(Gradient::new(pair).angle(angle).opacity(opacity).css())
}
