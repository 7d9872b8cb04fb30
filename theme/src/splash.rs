//! Random paint splash accents.
//!
//! Randomness comes from a [`SplashSource`] passed in by the caller. Any
//! [`rand::Rng`] works; tests replay fixed values with [`FixedSequence`].

use serde::Serialize;

use crate::error::Result;
use crate::opacity::Opacity;
use crate::palette::PALETTE;

pub const DEFAULT_SPLASH_SIZE: &str = "100px";
pub const DEFAULT_SPLASH_OPACITY: f64 = 0.7;

pub trait SplashSource {
    /// Next value in `0.0..1.0`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Uniform value in `low..low + span`.
    fn scaled(&mut self, low: f64, span: f64) -> f64 {
        self.unit() * span + low
    }
}

impl<R: rand::Rng + ?Sized> SplashSource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Largest `f64` below `1.0`.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// Values are clamped into `0.0..1.0` on construction and NaN becomes `0.0`,
/// so replayed layers stay inside the same ranges as a real RNG.
#[derive(Clone, Debug, Default)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values: Vec<f64> = values.into();
        let values = values
            .into_iter()
            .map(|value| {
                if value.is_nan() {
                    0.0
                } else {
                    value.clamp(0.0, MAX_UNIT)
                }
            })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Values that make [`SplashSource::pick`] return `indices` in order.
    pub fn picking(indices: &[usize], len: usize) -> Self {
        let values = indices
            .iter()
            .map(|&index| (index as f64 + 0.5) / len as f64)
            .collect::<Vec<_>>();
        Self::new(values)
    }
}

impl SplashSource for FixedSequence {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// One of the paint splash colors, chosen uniformly.
///
/// Fully opaque requests get the bare palette string. Anything else gets the
/// two-digit alpha byte appended. Opacity is checked before any entropy is
/// drawn.
pub fn random_splash<S: SplashSource + ?Sized>(source: &mut S, opacity: f64) -> Result<String> {
    let opacity = Opacity::new(opacity)?;
    Ok(splash_with(source, opacity))
}

pub(crate) fn splash_with<S: SplashSource + ?Sized>(source: &mut S, opacity: Opacity) -> String {
    let color = PALETTE.splash_color(source.pick(PALETTE.splash_len()));
    if opacity.is_opaque() {
        color.to_string()
    } else {
        format!("{color}{}", opacity.alpha_hex())
    }
}

/// Inline style for a single blurred, rotated splash disc.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashStyle {
    pub background: String,
    pub width: String,
    pub height: String,
    pub opacity: Opacity,
    pub border_radius: &'static str,
    pub filter: &'static str,
    pub transform: String,
}

pub fn paint_splash<S: SplashSource + ?Sized>(
    source: &mut S,
    color: &str,
    size: &str,
    opacity: Opacity,
) -> SplashStyle {
    let rotation = source.scaled(0.0, 360.0);
    SplashStyle {
        background: color.to_string(),
        width: size.to_string(),
        height: size.to_string(),
        opacity,
        border_radius: "50%",
        filter: "blur(10px)",
        transform: format!("rotate({rotation:.1}deg)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn opaque_splash_is_a_bare_palette_color() {
        let mut source = FixedSequence::picking(&[0, 3, 5], 6);
        let picks: Vec<String> = (0..3)
            .map(|_| random_splash(&mut source, 1.0).expect("splash"))
            .collect();
        assert_eq!(picks, ["#FF6B6B", "#96E6A1", "#FFE66D"]);
    }

    #[test]
    fn translucent_splash_appends_alpha() {
        let mut source = FixedSequence::picking(&[1], 6);
        assert_eq!(random_splash(&mut source, 0.5).unwrap(), "#4ECDC480");
    }

    #[test]
    fn invalid_opacity_does_not_consume_entropy() {
        let mut source = FixedSequence::picking(&[2, 4], 6);
        assert!(matches!(
            random_splash(&mut source, 2.0),
            Err(ThemeError::OpacityOutOfRange { .. })
        ));
        assert_eq!(random_splash(&mut source, 1.0).unwrap(), "#45B7D1");
    }

    #[test]
    fn pick_never_reaches_len() {
        let mut source = FixedSequence::new([0.999_999, MAX_UNIT]);
        assert_eq!(source.pick(6), 5);
        assert_eq!(source.pick(6), 5);
    }

    #[test]
    fn fixed_sequence_clamps_values_into_unit_range() {
        let mut source = FixedSequence::new([f64::NAN, -1.0, 1.0, 5.0, 0.5]);
        let values: Vec<f64> = (0..5).map(|_| source.unit()).collect();
        assert_eq!(values, [0.0, 0.0, MAX_UNIT, MAX_UNIT, 0.5]);
        assert!(values.iter().all(|value| (0.0..1.0).contains(value)));
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut source = FixedSequence::default();
        assert_eq!(source.unit(), 0.0);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                random_splash(&mut first, 0.3).unwrap(),
                random_splash(&mut second, 0.3).unwrap()
            );
        }
    }

    #[test]
    fn paint_splash_rotates_by_drawn_angle() {
        let mut source = FixedSequence::new([0.25]);
        let style = paint_splash(
            &mut source,
            "#FF6B6B",
            DEFAULT_SPLASH_SIZE,
            Opacity::new(DEFAULT_SPLASH_OPACITY).unwrap(),
        );
        assert_eq!(style.transform, "rotate(90.0deg)");
        assert_eq!(style.width, "100px");
        assert_eq!(style.height, "100px");

        let json = serde_json::to_value(&style).expect("serialize style");
        assert_eq!(json["borderRadius"], "50%");
        assert_eq!(json["filter"], "blur(10px)");
        assert_eq!(json["opacity"], 0.7);
    }
}
