//! The HSL (hue, saturation, lightness) color model.

use crate::convert;
use crate::math::normalize_hue;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color described by hue in degrees `[0, 360)` and saturation and
    /// lightness percentages in `[0, 100]`.
    Hsl, Hsl {
        hue / with_hue => Channel::hue("hue"),
        saturation / with_saturation => Channel::linear("saturation", 0.0, 100.0),
        lightness / with_lightness => Channel::linear("lightness", 0.0, 100.0),
    }
}

impl ColorModel for Hsl {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::hsl_to_rgb(self.hue, self.saturation, self.lightness);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, saturation, lightness) = convert::rgb_to_hsl(rgb);
        Self::from_channels(&[hue, saturation, lightness], rgb.alpha())
    }

    // Rotating is a plain channel adjustment here, no round trip needed.
    fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            hue: normalize_hue(self.hue + degrees),
            ..*self
        }
    }
}
