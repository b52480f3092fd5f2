//! Dye color representation and tint-text parsing.

use bevy::color::Color;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing tint color text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorFormatError {
    #[error("tint text is empty")]
    Empty,

    #[error("expected 3 or 4 color components, got {found}")]
    ComponentCount { found: usize },

    #[error("color component '{text}' is not an integer in 0-255")]
    InvalidComponent { text: String },
}

/// An RGBA dye color with 8-bit sRGB channels.
///
/// Parsed from the `"r,g,b"` / `"r,g,b,a"` tint text carried by equipped
/// items. Alpha defaults to 255 when omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DyeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl DyeColor {
    /// Fully opaque black, the tint an undyed item reports.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl FromStr for DyeColor {
    type Err = ColorFormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ColorFormatError::Empty);
        }

        let mut channels = [0u8, 0, 0, 255];
        let mut count = 0;

        for part in text.split(',') {
            if count >= channels.len() {
                return Err(ColorFormatError::ComponentCount {
                    found: text.split(',').count(),
                });
            }

            let part = part.trim();
            channels[count] = part
                .parse()
                .map_err(|_| ColorFormatError::InvalidComponent {
                    text: part.to_owned(),
                })?;
            count += 1;
        }

        if count < 3 {
            return Err(ColorFormatError::ComponentCount { found: count });
        }

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels[3],
        })
    }
}

impl From<DyeColor> for Color {
    fn from(color: DyeColor) -> Self {
        Color::srgba_u8(color.r, color.g, color.b, color.a)
    }
}
