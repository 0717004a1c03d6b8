//! A [`Color`] holds a value in any of the supported color models and
//! dispatches the shared operations on its [`Space`] discriminant.

use std::error::Error;
use std::fmt;

use crate::model::{ColorModel, Model};
use crate::models::{Cmyk, Hsi, Hsl, Hsp, Hsv, Lab, Rgb, Xyz};

/// The fully opaque alpha value.
pub const OPAQUE: u8 = 255;

/// The color spaces supported by [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// red, green and blue, each in `[0, 255]`.
    Rgb = 0,
    /// cyan, magenta, yellow and black, each in `[0, 100]`.
    Cmyk = 1,
    /// hue in `[0, 360]`, saturation and lightness in `[0, 100]`.
    Hsl = 2,
    /// hue in `[0, 360]`, saturation and value in `[0, 100]`.
    Hsv = 3,
    /// hue in `[0, 360]`, saturation and intensity in `[0, 100]`.
    Hsi = 4,
    /// hue in `[0, 360]`, saturation and perceived brightness in `[0, 100]`.
    Hsp = 5,
    /// lightness in `[0, 100]`, a and b in `[-128, 127]`.
    Lab = 6,
    /// x, y and z, non-negative and unbounded above.
    Xyz = 7,
}

/// Errors raised when a color is constructed from invalid input.
///
/// All of these are contract violations on the caller's side, not transient
/// conditions; the offending call fails and nothing is constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A channel or alpha value fell outside its closed range.
    InvalidChannelValue {
        /// Name of the offending channel.
        channel: &'static str,
        /// The value that was given.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },
    /// A value sequence did not hold exactly N or N+1 elements, N being the
    /// channel count of the target space.
    InvalidListLength {
        /// The channel count of the target space.
        expected: usize,
        /// The number of elements that were given.
        found: usize,
    },
    /// A hex color string was not 3 or 6 hexadecimal digits with an optional
    /// leading `#`.
    InvalidHexFormat(String),
    /// A random bound pair was outside the channel range or had `min > max`.
    InvalidBounds {
        /// Name of the offending channel.
        channel: &'static str,
        /// The lower bound that was given.
        min: f64,
        /// The upper bound that was given.
        max: f64,
    },
    /// A required color or value sequence was absent.
    MissingInput,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannelValue {
                channel,
                value,
                min,
                max,
            } => write!(f, "{channel} value {value} is outside [{min}, {max}]"),
            Self::InvalidListLength { expected, found } => write!(
                f,
                "expected {} or {} values, found {}",
                expected,
                expected + 1,
                found
            ),
            Self::InvalidHexFormat(input) => {
                write!(f, "malformed hex color string {input:?}")
            }
            Self::InvalidBounds { channel, min, max } => {
                write!(f, "invalid {channel} bounds [{min}, {max}]")
            }
            Self::MissingInput => f.write_str("a required color value was absent"),
        }
    }
}

impl Error for ColorError {}

/// A color in any of the supported color models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color in the RGB color space.
    Rgb(Rgb),
    /// A color in the CMYK color space.
    Cmyk(Cmyk),
    /// A color in the HSL color space.
    Hsl(Hsl),
    /// A color in the HSV color space.
    Hsv(Hsv),
    /// A color in the HSI color space.
    Hsi(Hsi),
    /// A color in the HSP color space.
    Hsp(Hsp),
    /// A color in the CIE-LAB color space.
    Lab(Lab),
    /// A color in the CIE-XYZ color space.
    Xyz(Xyz),
}

/// Apply an expression to the model held in a [`Color`], rewrapping the
/// result in the same variant.
macro_rules! for_each_model {
    ($color:expr, $model:ident => $body:expr) => {
        match $color {
            Color::Rgb($model) => Color::Rgb($body),
            Color::Cmyk($model) => Color::Cmyk($body),
            Color::Hsl($model) => Color::Hsl($body),
            Color::Hsv($model) => Color::Hsv($body),
            Color::Hsi($model) => Color::Hsi($body),
            Color::Hsp($model) => Color::Hsp($body),
            Color::Lab($model) => Color::Lab($body),
            Color::Xyz($model) => Color::Xyz($body),
        }
    };
}

/// Apply an expression to the model held in a [`Color`], returning the result
/// as is.
macro_rules! with_model {
    ($color:expr, $model:ident => $body:expr) => {
        match $color {
            Color::Rgb($model) => $body,
            Color::Cmyk($model) => $body,
            Color::Hsl($model) => $body,
            Color::Hsv($model) => $body,
            Color::Hsi($model) => $body,
            Color::Hsp($model) => $body,
            Color::Lab($model) => $body,
            Color::Xyz($model) => $body,
        }
    };
}

pub(crate) use for_each_model;

impl Color {
    /// The color space this color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Cmyk(_) => Space::Cmyk,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::Hsi(_) => Space::Hsi,
            Color::Hsp(_) => Space::Hsp,
            Color::Lab(_) => Space::Lab,
            Color::Xyz(_) => Space::Xyz,
        }
    }

    /// The alpha channel of this color.
    pub fn alpha(&self) -> u8 {
        with_model!(self, m => m.alpha())
    }

    /// The channel values of this color, in declaration order, without alpha.
    pub fn channels(&self) -> Vec<f64> {
        with_model!(self, m => m.channels())
    }

    /// Return this color with its alpha channel replaced.
    pub fn with_alpha(&self, alpha: u8) -> Color {
        for_each_model!(self, m => m.with_alpha(alpha))
    }

    /// Convert this color to the RGB interchange space. Identity when the
    /// color already is RGB.
    pub fn to_rgb(&self) -> Rgb {
        with_model!(self, m => m.to_rgb())
    }

    /// Convert this color to the given color space.
    ///
    /// Conversions between two non-RGB spaces always run through RGB; a
    /// conversion into the color's own space returns it unchanged.
    pub fn to_space(&self, space: Space) -> Color {
        if self.space() == space {
            return *self;
        }

        let rgb = self.to_rgb();
        match space {
            Space::Rgb => Color::Rgb(rgb),
            Space::Cmyk => Color::Cmyk(Cmyk::from_rgb(&rgb)),
            Space::Hsl => Color::Hsl(Hsl::from_rgb(&rgb)),
            Space::Hsv => Color::Hsv(Hsv::from_rgb(&rgb)),
            Space::Hsi => Color::Hsi(Hsi::from_rgb(&rgb)),
            Space::Hsp => Color::Hsp(Hsp::from_rgb(&rgb)),
            Space::Lab => Color::Lab(Lab::from_rgb(&rgb)),
            Space::Xyz => Color::Xyz(Xyz::from_rgb(&rgb)),
        }
    }

    /// Parse a 3- or 6-digit hex string into an RGB color.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        Ok(Color::Rgb(Rgb::from_hex(hex)?))
    }

    /// Return this color with its hue rotated by `degrees` on the color
    /// wheel.
    pub fn rotate_hue(&self, degrees: f64) -> Color {
        for_each_model!(self, m => m.rotate_hue(degrees))
    }

    /// Return this color rotated halfway across the color wheel.
    pub fn opposite(&self) -> Color {
        for_each_model!(self, m => m.opposite())
    }

    /// Return this color with its hue rotated up to `degrees` toward 90.
    pub fn warmer(&self, degrees: f64) -> Color {
        for_each_model!(self, m => m.warmer(degrees))
    }

    /// Return this color with its hue rotated up to `degrees` toward 270.
    pub fn cooler(&self, degrees: f64) -> Color {
        for_each_model!(self, m => m.cooler(degrees))
    }

    /// Return the complement of this color.
    pub fn inverted(&self) -> Color {
        for_each_model!(self, m => m.inverted())
    }
}

macro_rules! impl_from_model {
    ($($model:ident),+) => {
        $(
            impl From<$model> for Color {
                fn from(model: $model) -> Self {
                    Color::$model(model)
                }
            }
        )+
    };
}

impl_from_model!(Rgb, Cmyk, Hsl, Hsv, Hsi, Hsp, Lab, Xyz);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_own_space_is_identity() {
        let color = Color::Hsl(Hsl::new(120.0, 50.0, 50.0, OPAQUE).unwrap());
        assert_eq!(color.to_space(Space::Hsl), color);
    }

    #[test]
    fn to_space_changes_discriminant_and_keeps_alpha() {
        let color = Color::Rgb(Rgb::new(200.0, 50.0, 50.0, 128).unwrap());
        for space in [
            Space::Rgb,
            Space::Cmyk,
            Space::Hsl,
            Space::Hsv,
            Space::Hsi,
            Space::Hsp,
            Space::Lab,
            Space::Xyz,
        ] {
            let converted = color.to_space(space);
            assert_eq!(converted.space(), space);
            assert_eq!(converted.alpha(), 128);
        }
    }

    #[test]
    fn non_rgb_to_non_rgb_routes_through_rgb() {
        let cmyk = Color::Cmyk(Cmyk::new(0.0, 100.0, 100.0, 0.0, OPAQUE).unwrap());
        let hsl = cmyk.to_space(Space::Hsl);
        let direct = Color::Hsl(Hsl::from_rgb(&cmyk.to_rgb()));
        assert_eq!(hsl, direct);
    }

    #[test]
    fn error_messages_name_the_channel() {
        let err = Rgb::new(300.0, 0.0, 0.0, OPAQUE).unwrap_err();
        assert_eq!(err.to_string(), "red value 300 is outside [0, 255]");
    }
}
