//! The CMYK subtractive color model.

use crate::convert;
use crate::model::{Channel, ColorModel, Model};
use crate::models::{color_model, Rgb};

color_model! {
    /// A color described by cyan, magenta, yellow and black (key)
    /// percentages in `[0, 100]`.
    Cmyk, Cmyk {
        cyan / with_cyan => Channel::linear("cyan", 0.0, 100.0),
        magenta / with_magenta => Channel::linear("magenta", 0.0, 100.0),
        yellow / with_yellow => Channel::linear("yellow", 0.0, 100.0),
        black / with_black => Channel::linear("black", 0.0, 100.0),
    }
}

impl ColorModel for Cmyk {
    fn to_rgb(&self) -> Rgb {
        let (red, green, blue) =
            convert::cmyk_to_rgb(self.cyan, self.magenta, self.yellow, self.black);
        Rgb::from_channels(&[red, green, blue], self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (cyan, magenta, yellow, black) = convert::rgb_to_cmyk(rgb);
        Self::from_channels(&[cyan, magenta, yellow, black], rgb.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_eq;
    use crate::color::OPAQUE;

    #[test]
    fn black_is_pure_key() {
        let cmyk = Cmyk::from_rgb(&Rgb::new(0.0, 0.0, 0.0, OPAQUE).unwrap());
        assert_channel_eq!(cmyk.cyan(), 0.0);
        assert_channel_eq!(cmyk.magenta(), 0.0);
        assert_channel_eq!(cmyk.yellow(), 0.0);
        assert_channel_eq!(cmyk.black(), 100.0);
    }

    #[test]
    fn process_colors() {
        let cyan = Cmyk::new(100.0, 0.0, 0.0, 0.0, OPAQUE).unwrap().to_rgb();
        assert_channel_eq!(cyan.red(), 0.0);
        assert_channel_eq!(cyan.green(), 255.0);
        assert_channel_eq!(cyan.blue(), 255.0);

        let yellow = Cmyk::from_rgb(&Rgb::new(255.0, 255.0, 0.0, OPAQUE).unwrap());
        assert_channel_eq!(yellow.yellow(), 100.0);
        assert_channel_eq!(yellow.black(), 0.0);
    }

    #[test]
    fn four_channels_round_trip() {
        let rgb = Rgb::new(12.0, 167.0, 240.0, OPAQUE).unwrap();
        let back = Cmyk::from_rgb(&rgb).to_rgb();
        assert_channel_eq!(back.red(), 12.0);
        assert_channel_eq!(back.green(), 167.0);
        assert_channel_eq!(back.blue(), 240.0);
    }
}
