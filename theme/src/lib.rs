//! Colors, gradients and decorative paint splashes for the Brushwork site.
//!
//! Page views ask this crate for CSS-ready strings: the fixed [`PALETTE`],
//! [`gradient()`] descriptors, a [`random_splash`] accent and the
//! [`complementary_colors`] of an arbitrary hex color. Everything except the
//! splash generators is pure; those take an explicit [`SplashSource`].

pub mod api;
pub mod color;
pub mod error;
pub mod gradient;
pub mod layer;
pub mod opacity;
pub mod palette;
pub mod splash;

pub use color::{complementary_colors, DerivedColors, HexColor};
pub use error::{Result, ThemeError};
pub use gradient::{gradient, Gradient, DEFAULT_ANGLE};
pub use layer::{backdrop_blobs, paint_stripes, particle_field, splash_layer, Viewport};
pub use opacity::Opacity;
pub use palette::{ColorPair, Palette, Role, TextColors, PALETTE};
pub use splash::{paint_splash, random_splash, FixedSequence, SplashSource};
