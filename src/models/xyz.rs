//! The CIE-XYZ tristimulus color model.

use crate::convert::{self, D65_WHITE};
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color in CIE-XYZ under the D65 illuminant, on the scale where the
    /// white point's Y is 100.
    ///
    /// The tristimulus values have no upper bound; emissive sources brighter
    /// than the reference white are representable, so only negative values
    /// are rejected.
    Xyz, Xyz {
        x / with_x => Channel::open("x", D65_WHITE[0]),
        y / with_y => Channel::open("y", D65_WHITE[1]),
        z / with_z => Channel::open("z", D65_WHITE[2]),
    }
}

impl ColorModel for Xyz {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = convert::xyz_to_rgb(self.x, self.y, self.z);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (x, y, z) = convert::rgb_to_xyz(rgb);
        Self::from_channels(&[x, y, z], rgb.alpha())
    }

    // Unbounded channels have no arithmetic complement, so invert in RGB
    // where the range is closed.
    fn inverted(&self) -> Self {
        Self::from_rgb(&self.to_rgb().inverted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;

    #[test]
    fn the_white_point_is_full_scale() {
        let white = Xyz::from_rgb(&Rgb::new(255.0, 255.0, 255.0, OPAQUE).unwrap());
        assert_channel_eq!(white.x(), D65_WHITE[0]);
        assert_channel_eq!(white.y(), 100.0);
        assert_channel_eq!(white.z(), D65_WHITE[2]);
    }

    #[test]
    fn values_above_the_white_point_are_allowed() {
        assert!(Xyz::new(150.0, 120.0, 200.0, OPAQUE).is_ok());
        assert!(Xyz::new(-1.0, 50.0, 50.0, OPAQUE).is_err());
    }

    #[test]
    fn inversion_matches_rgb_complement() {
        let rgb = Rgb::new(40.0, 170.0, 220.0, OPAQUE).unwrap();
        let inverted = Xyz::from_rgb(&rgb).inverted().to_rgb();
        assert_channel_eq!(inverted.red(), 215.0);
        assert_channel_eq!(inverted.green(), 85.0);
        assert_channel_eq!(inverted.blue(), 35.0);
    }
}
