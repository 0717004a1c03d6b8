//! The CIE-LAB perceptual color model.

use crate::convert;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color in CIE-LAB under the D65 illuminant: lightness in `[0, 100]`
    /// and the `a` (green to red) and `b` (blue to yellow) opponent axes in
    /// `[-128, 127]`, wide enough for every sRGB color.
    Lab, Lab {
        lightness / with_lightness => Channel::linear("lightness", 0.0, 100.0),
        a / with_a => Channel::linear("a", -128.0, 127.0),
        b / with_b => Channel::linear("b", -128.0, 127.0),
    }
}

impl ColorModel for Lab {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::lab_to_rgb(self.lightness, self.a, self.b);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (lightness, a, b) = convert::rgb_to_lab(rgb);
        Self::from_channels(&[lightness, a, b], rgb.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;

    #[test]
    fn lightness_axis_is_gray() {
        let white = Lab::from_rgb(&Rgb::new(255.0, 255.0, 255.0, OPAQUE).unwrap());
        assert_channel_eq!(white.lightness(), 100.0);
        assert_channel_eq!(white.a(), 0.0);
        assert_channel_eq!(white.b(), 0.0);
    }

    #[test]
    fn opponent_axes_take_negative_values() {
        let green = Lab::from_rgb(&Rgb::new(0.0, 255.0, 0.0, OPAQUE).unwrap());
        assert!(green.a() < -50.0);
        assert!(green.b() > 50.0);
        assert!(Lab::new(50.0, -128.0, 127.0, OPAQUE).is_ok());
        assert!(Lab::new(50.0, -200.0, 0.0, OPAQUE).is_err());
        assert!(Lab::new(50.0, f64::NAN, 0.0, OPAQUE).is_err());
    }

    #[test]
    fn in_gamut_colors_round_trip() {
        let rgb = Rgb::new(87.0, 199.0, 42.0, OPAQUE).unwrap();
        let back = Lab::from_rgb(&rgb).to_rgb();
        assert_channel_eq!(back.red(), 87.0);
        assert_channel_eq!(back.green(), 199.0);
        assert_channel_eq!(back.blue(), 42.0);
    }
}
