//! colorcast provides validated color models for eight color spaces, with
//! conversions between any two spaces routed through RGB and casts to and
//! from packed 8-bit RGBA colors as used by GUI toolkits.

#![deny(missing_docs)]

mod color;
mod convert;
mod interpolate;
mod math;
mod model;
mod models;
mod native;

pub use color::{Color, ColorError, Space, OPAQUE};
pub use model::{Channel, ColorModel, Model};
pub use models::{Cmyk, Hsb, Hsi, Hsl, Hsp, Hsv, Lab, Rgb, Xyz};
