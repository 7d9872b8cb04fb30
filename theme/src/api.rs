use serde::Serialize;

use crate::gradient::Gradient;
use crate::layer::{self, Blob, Particle, Splash, Stripe, Viewport};
use crate::opacity::Opacity;
use crate::palette::{Palette, Role, PALETTE};
use crate::splash::SplashSource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleGradient {
    pub role: Role,
    pub css: String,
}

/// Everything static a page view needs to style itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePayload {
    pub palette: &'static Palette,
    pub gradients: Vec<RoleGradient>,
    pub paint_stripes: [Stripe; 5],
}

impl ThemePayload {
    pub fn new(angle: &str, opacity: Opacity) -> Self {
        let gradients = Role::ALL
            .into_iter()
            .map(|role| RoleGradient {
                role,
                css: Gradient::new(PALETTE.role(role))
                    .angle(angle)
                    .opacity(opacity)
                    .css(),
            })
            .collect();

        Self {
            palette: &PALETTE,
            gradients,
            paint_stripes: layer::paint_stripes(),
        }
    }
}

/// One round of randomized decorations for a page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationsPayload {
    pub viewport: Viewport,
    pub splashes: Vec<Splash>,
    pub particles: Vec<Particle>,
    pub blobs: Vec<Blob>,
}

impl DecorationsPayload {
    pub fn generate<S: SplashSource + ?Sized>(source: &mut S, viewport: Viewport) -> Self {
        Self {
            viewport,
            splashes: layer::splash_layer(source, layer::DEFAULT_SPLASH_COUNT),
            particles: layer::particle_field(source, viewport),
            blobs: layer::backdrop_blobs(source, layer::DEFAULT_BLOB_COUNT, viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splash::FixedSequence;

    #[test]
    fn role_gradient_serializes_to_expected_json() {
        let gradient = RoleGradient {
            role: Role::Accent,
            css: "linear-gradient(45deg, #4776E6cc, #8E54E9cc)".to_string(),
        };
        let json = serde_json::to_string(&gradient).expect("serialize gradient");
        assert_eq!(
            json,
            r##"{"role":"accent","css":"linear-gradient(45deg, #4776E6cc, #8E54E9cc)"}"##
        );
    }

    #[test]
    fn theme_payload_uses_camel_case_keys() {
        let payload = ThemePayload::new("135deg", Opacity::OPAQUE);
        let json = serde_json::to_value(&payload).expect("serialize payload");

        assert_eq!(json["palette"]["paintSplash"][0], "#FF6B6B");
        assert_eq!(json["palette"]["text"]["primary"], "#2C3E50");
        assert_eq!(json["palette"]["primary"]["start"], "#2E3192");
        assert_eq!(json["paintStripes"][1]["height"], "20vh");
        assert_eq!(json["gradients"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            json["gradients"][4]["css"],
            "linear-gradient(135deg, #2C3E50ff, #34495Eff)"
        );
    }

    #[test]
    fn decorations_follow_viewport() {
        let mut source = FixedSequence::new([0.1, 0.6, 0.3]);
        let payload = DecorationsPayload::generate(&mut source, Viewport::Mobile);

        assert_eq!(payload.splashes.len(), 10);
        assert_eq!(payload.particles.len(), 15);
        assert_eq!(payload.blobs.len(), 5);

        let json = serde_json::to_value(&payload).expect("serialize decorations");
        assert_eq!(json["viewport"], "mobile");
    }
}
