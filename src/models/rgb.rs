//! The RGB color model. Every other space converts through this one.

use crate::color::ColorError;
use crate::model::{Channel, ColorModel};
use crate::models::color_model;

color_model! {
    /// A color with red, green and blue channels in `[0, 255]`.
    ///
    /// Channels are stored as floats so that repeated conversions do not
    /// accumulate rounding error; [`Rgb::red8`] and friends produce the
    /// rounded 8-bit values.
    Rgb, Rgb {
        red / with_red => Channel::linear("red", 0.0, 255.0),
        green / with_green => Channel::linear("green", 0.0, 255.0),
        blue / with_blue => Channel::linear("blue", 0.0, 255.0),
    }
}

impl Rgb {
    /// The red channel rounded to an 8-bit integer.
    pub fn red8(&self) -> u8 {
        self.red().round() as u8
    }

    /// The green channel rounded to an 8-bit integer.
    pub fn green8(&self) -> u8 {
        self.green().round() as u8
    }

    /// The blue channel rounded to an 8-bit integer.
    pub fn blue8(&self) -> u8 {
        self.blue().round() as u8
    }

    /// Parse a hex color code such as `#1A2B3C`, `1A2B3C` or the shorthand
    /// `#ABC`, case insensitive, with an optional leading `#`. The result is
    /// fully opaque.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);

        let nibble = |byte: u8| -> Result<u8, ColorError> {
            match byte {
                b'0'..=b'9' => Ok(byte - b'0'),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                _ => Err(ColorError::InvalidHexFormat(value.to_string())),
            }
        };

        let bytes = digits.as_bytes();
        let (red, green, blue) = match bytes.len() {
            // Shorthand repeats each digit, so "abc" reads as "aabbcc".
            3 => (
                nibble(bytes[0])? * 17,
                nibble(bytes[1])? * 17,
                nibble(bytes[2])? * 17,
            ),
            6 => (
                nibble(bytes[0])? * 16 + nibble(bytes[1])?,
                nibble(bytes[2])? * 16 + nibble(bytes[3])?,
                nibble(bytes[4])? * 16 + nibble(bytes[5])?,
            ),
            _ => return Err(ColorError::InvalidHexFormat(value.to_string())),
        };

        Rgb::new(red as f64, green as f64, blue as f64, crate::color::OPAQUE)
    }
}

impl ColorModel for Rgb {
    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }
}
