//! The HSV (hue, saturation, value) color model.

use crate::convert;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

/// HSB is the same model under another name.
pub type Hsb = Hsv;

color_model! {
    /// A color described by hue in degrees `[0, 360)` and saturation and
    /// value percentages in `[0, 100]`. Also known as HSB.
    Hsv, Hsv {
        hue / with_hue => Channel::hue("hue"),
        saturation / with_saturation => Channel::linear("saturation", 0.0, 100.0),
        value / with_value => Channel::linear("value", 0.0, 100.0),
    }
}

impl ColorModel for Hsv {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::hsv_to_rgb(self.hue, self.saturation, self.value);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, saturation, value) = convert::rgb_to_hsv(rgb);
        Self::from_channels(&[hue, saturation, value], rgb.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;

    #[test]
    fn full_value_primaries() {
        let magenta = Rgb::new(255.0, 0.0, 255.0, OPAQUE).unwrap();
        let hsv = Hsv::from_rgb(&magenta);
        assert_channel_eq!(hsv.hue(), 300.0);
        assert_channel_eq!(hsv.saturation(), 100.0);
        assert_channel_eq!(hsv.value(), 100.0);
    }

    #[test]
    fn desaturated_colors_keep_their_value() {
        let hsv = Hsv::new(120.0, 0.0, 75.0, OPAQUE).unwrap();
        let rgb = hsv.to_rgb();
        assert_channel_eq!(rgb.red(), 191.25);
        assert_channel_eq!(rgb.green(), 191.25);
        assert_channel_eq!(rgb.blue(), 191.25);
    }

    #[test]
    fn hsb_is_hsv() {
        let hsb = Hsb::new(60.0, 100.0, 100.0, OPAQUE).unwrap();
        let rgb = hsb.to_rgb();
        assert_eq!(rgb.red8(), 255);
        assert_eq!(rgb.green8(), 255);
        assert_eq!(rgb.blue8(), 0);
    }
}
