//! Decorative background layers: scattered splashes, drifting particles,
//! blurred backdrop blobs and the fixed paint stripes.
//!
//! Positions are percentages of the containing block, sizes are pixels and
//! rotations are degrees. Callers own any regeneration timer.

use serde::Serialize;
use tracing::trace;

use crate::opacity::Opacity;
use crate::palette::PALETTE;
use crate::splash::{splash_with, SplashSource};

/// Widths at or below this many pixels count as [`Viewport::Mobile`].
pub const MOBILE_BREAKPOINT: u32 = 768;

pub const DEFAULT_SPLASH_COUNT: usize = 10;
pub const DEFAULT_BLOB_COUNT: usize = 5;

const SPLASH_OPACITY: f64 = 0.2;
const BLOB_OPACITY: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Viewport::Mobile
    }

    fn particle_count(self) -> usize {
        match self {
            Viewport::Mobile => 15,
            Viewport::Desktop => 30,
        }
    }

    fn particle_span(self) -> f64 {
        match self {
            Viewport::Mobile => 40.0,
            Viewport::Desktop => 80.0,
        }
    }

    /// `(min, span)` of a backdrop blob edge.
    fn blob_extent(self) -> (f64, f64) {
        match self {
            Viewport::Mobile => (50.0, 150.0),
            Viewport::Desktop => (100.0, 300.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Splash {
    pub color: String,
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub rotation: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    pub id: usize,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub color: &'static str,
    pub delay: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub color: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stripe {
    pub color: &'static str,
    pub height: &'static str,
}

/// Scattered translucent splashes for the paint texture overlay.
pub fn splash_layer<S: SplashSource + ?Sized>(source: &mut S, count: usize) -> Vec<Splash> {
    let opacity = Opacity::saturating(SPLASH_OPACITY);
    let splashes: Vec<Splash> = (0..count)
        .map(|_| Splash {
            color: splash_with(source, opacity),
            left: source.scaled(0.0, 100.0),
            top: source.scaled(0.0, 100.0),
            size: source.scaled(50.0, 200.0),
            rotation: source.scaled(0.0, 360.0),
        })
        .collect();

    trace!(count = splashes.len(), "generated splash layer");
    splashes
}

/// Hero background particles, all in the primary start color.
pub fn particle_field<S: SplashSource + ?Sized>(
    source: &mut S,
    viewport: Viewport,
) -> Vec<Particle> {
    let span = viewport.particle_span();
    let particles: Vec<Particle> = (0..viewport.particle_count())
        .map(|id| Particle {
            id,
            size: source.scaled(10.0, span),
            x: source.scaled(0.0, 100.0),
            y: source.scaled(0.0, 100.0),
            opacity: source.scaled(0.1, 0.3),
            color: PALETTE.primary.start,
            delay: source.scaled(0.0, 2.0),
        })
        .collect();

    trace!(count = particles.len(), ?viewport, "generated particle field");
    particles
}

/// Large blurred blobs behind a page, each with its own random splash color.
pub fn backdrop_blobs<S: SplashSource + ?Sized>(
    source: &mut S,
    count: usize,
    viewport: Viewport,
) -> Vec<Blob> {
    let (min, span) = viewport.blob_extent();
    let opacity = Opacity::saturating(BLOB_OPACITY);
    let blobs: Vec<Blob> = (0..count)
        .map(|_| Blob {
            color: splash_with(source, opacity),
            left: source.scaled(0.0, 100.0),
            top: source.scaled(0.0, 100.0),
            width: source.scaled(min, span),
            height: source.scaled(min, span),
        })
        .collect();

    trace!(count = blobs.len(), ?viewport, "generated backdrop blobs");
    blobs
}

/// Horizontal stripes in the first five splash colors.
pub fn paint_stripes() -> [Stripe; 5] {
    const HEIGHTS: [&str; 5] = ["15vh", "20vh", "25vh", "15vh", "25vh"];
    std::array::from_fn(|index| Stripe {
        color: PALETTE.splash_color(index),
        height: HEIGHTS[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splash::FixedSequence;

    #[test]
    fn viewport_breakpoint_is_inclusive() {
        assert_eq!(Viewport::from_width(768), Viewport::Mobile);
        assert_eq!(Viewport::from_width(769), Viewport::Desktop);
        assert!(Viewport::from_width(320).is_mobile());
    }

    #[test]
    fn splash_layer_draws_color_then_geometry() {
        let mut source = FixedSequence::new([0.5, 0.25, 0.75, 0.5, 0.5]);
        let layer = splash_layer(&mut source, 1);

        assert_eq!(
            layer,
            vec![Splash {
                color: "#96E6A133".to_string(),
                left: 25.0,
                top: 75.0,
                size: 150.0,
                rotation: 180.0,
            }]
        );
    }

    #[test]
    fn particle_field_size_follows_viewport() {
        let mut source = FixedSequence::new([0.5]);
        let mobile = particle_field(&mut source, Viewport::Mobile);
        let desktop = particle_field(&mut source, Viewport::Desktop);

        assert_eq!(mobile.len(), 15);
        assert_eq!(desktop.len(), 30);
        assert_eq!(mobile[0].size, 30.0);
        assert_eq!(desktop[0].size, 50.0);
        assert_eq!(desktop[29].id, 29);
        assert!(desktop.iter().all(|p| p.color == "#2E3192"));
        assert_eq!(mobile[0].opacity, 0.25);
        assert_eq!(mobile[0].delay, 1.0);
    }

    #[test]
    fn replayed_values_outside_unit_range_stay_in_bounds() {
        let values = [f64::NAN, -1.0, 1.0, 5.0];

        let layer = splash_layer(&mut FixedSequence::new(values), 3);
        assert_eq!(layer.len(), 3);
        for splash in &layer {
            assert!((0.0..100.0).contains(&splash.left), "{splash:?}");
            assert!((0.0..100.0).contains(&splash.top), "{splash:?}");
            assert!((50.0..250.0).contains(&splash.size), "{splash:?}");
            assert!((0.0..360.0).contains(&splash.rotation), "{splash:?}");
        }

        for particle in particle_field(&mut FixedSequence::new(values), Viewport::Desktop) {
            assert!((10.0..90.0).contains(&particle.size), "{particle:?}");
            assert!((0.0..100.0).contains(&particle.x), "{particle:?}");
            assert!((0.0..100.0).contains(&particle.y), "{particle:?}");
            assert!((0.1..0.4).contains(&particle.opacity), "{particle:?}");
            assert!((0.0..2.0).contains(&particle.delay), "{particle:?}");
        }

        let json = serde_json::to_string(&layer).expect("serialize layer");
        assert!(!json.contains("null"));
    }

    #[test]
    fn backdrop_blobs_use_faint_splash_colors() {
        let mut source = FixedSequence::new([0.0]);
        let blobs = backdrop_blobs(&mut source, DEFAULT_BLOB_COUNT, Viewport::Mobile);

        assert_eq!(blobs.len(), 5);
        for blob in &blobs {
            assert_eq!(blob.color, "#FF6B6B1a");
            assert_eq!(blob.width, 50.0);
            assert_eq!(blob.height, 50.0);
        }
    }

    #[test]
    fn paint_stripes_match_fixed_layout() {
        let stripes = paint_stripes();
        assert_eq!(
            stripes[0],
            Stripe {
                color: "#FF6B6B",
                height: "15vh"
            }
        );
        assert_eq!(stripes[4].color, "#D4A5A5");
        assert_eq!(stripes[4].height, "25vh");
    }
}
