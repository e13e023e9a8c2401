//! Immutable color values.
//!
//! # Core Types
//!
//! - [`Color`]: A color in RGB, HSL or HSB space with alpha
//! - [`ColorChannel`]: One scalar component, with its [`ChannelRange`]
//! - [`ColorFormat`]: String formats for serialization
//!
//! # Example
//!
//! ```
//! use horizon_aria::color::{Color, ColorChannel, ColorFormat};
//!
//! let color: Color = "#ff8000".parse()?;
//! assert_eq!(color.format_channel_value(ColorChannel::Hue), "30.12°");
//! assert_eq!(color.to_string(ColorFormat::Rgb), "rgb(255, 128, 0)");
//! # Ok::<(), horizon_aria::color::ColorParseError>(())
//! ```

mod channel;
mod convert;
mod parse;
mod value;

pub use channel::{ChannelRange, ColorChannel, ColorFormat, ColorSpace};
pub use value::Color;

/// Errors raised by [`Color::parse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    /// The input is empty or only whitespace.
    #[error("Empty color string")]
    Empty,

    /// The input is not in any supported notation.
    #[error("Unrecognized color '{0}'")]
    Unrecognized(String),

    /// The notation is recognized but a component is malformed or out of
    /// range.
    #[error("Invalid {component} component in color '{input}'")]
    InvalidComponent {
        input: String,
        component: &'static str,
    },
}
