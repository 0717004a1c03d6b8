//! The HSP color model, using Finley's perceived-brightness weighting.

use crate::convert;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color described by hue in degrees `[0, 360)`, saturation in
    /// `[0, 100]` and perceived brightness in `[0, 100]`.
    ///
    /// Perceived brightness weights the channels by how bright the eye reads
    /// them, so a pure green reads brighter than a pure blue of equal value.
    Hsp, Hsp {
        hue / with_hue => Channel::hue("hue"),
        saturation / with_saturation => Channel::linear("saturation", 0.0, 100.0),
        brightness / with_brightness => Channel::linear("brightness", 0.0, 100.0),
    }
}

impl ColorModel for Hsp {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::hsp_to_rgb(self.hue, self.saturation, self.brightness);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, saturation, brightness) = convert::rgb_to_hsp(rgb);
        Self::from_channels(&[hue, saturation, brightness], rgb.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;

    #[test]
    fn green_reads_brighter_than_blue() {
        let green = Hsp::from_rgb(&Rgb::new(0.0, 255.0, 0.0, OPAQUE).unwrap());
        let blue = Hsp::from_rgb(&Rgb::new(0.0, 0.0, 255.0, OPAQUE).unwrap());
        assert!(green.brightness() > blue.brightness());
        assert_channel_eq!(green.brightness(), 0.587_f64.sqrt() * 100.0);
        assert_channel_eq!(blue.brightness(), 0.114_f64.sqrt() * 100.0);
    }

    #[test]
    fn white_is_full_brightness() {
        let white = Hsp::from_rgb(&Rgb::new(255.0, 255.0, 255.0, OPAQUE).unwrap());
        assert_channel_eq!(white.brightness(), 100.0);
        assert_channel_eq!(white.saturation(), 0.0);
    }

    #[test]
    fn chestnut_round_trips() {
        let rgb = Rgb::new(200.0, 100.0, 50.0, OPAQUE).unwrap();
        let hsp = Hsp::from_rgb(&rgb);
        let back = hsp.to_rgb();
        assert_channel_eq!(back.red(), 200.0);
        assert_channel_eq!(back.green(), 100.0);
        assert_channel_eq!(back.blue(), 50.0);
    }
}
