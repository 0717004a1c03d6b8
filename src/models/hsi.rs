//! The HSI (hue, saturation, intensity) color model.

use crate::convert;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color described by hue in degrees `[0, 360)` and saturation and
    /// intensity percentages in `[0, 100]`, where intensity is the plain
    /// average of the RGB channels.
    Hsi, Hsi {
        hue / with_hue => Channel::hue("hue"),
        saturation / with_saturation => Channel::linear("saturation", 0.0, 100.0),
        intensity / with_intensity => Channel::linear("intensity", 0.0, 100.0),
    }
}

impl ColorModel for Hsi {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::hsi_to_rgb(self.hue, self.saturation, self.intensity);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, saturation, intensity) = convert::rgb_to_hsi(rgb);
        Self::from_channels(&[hue, saturation, intensity], rgb.alpha())
    }
}
