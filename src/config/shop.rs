//! Appearance of the shop card posted by `/setup`.

use crate::errors::Error;
use serde::Deserialize;

/// Largest value a 24-bit RGB color can take
const MAX_RGB: u32 = 0x00FF_FFFF;

/// Configuration of the shop card
#[derive(Debug, Clone, Deserialize)]
pub struct ShopConfig {
    /// Card title, also used to recognise the shop message later
    pub title: String,
    /// Card color, shared with product cards
    pub color: EmbedColor,
    /// Image shown on the shop card
    #[serde(default)]
    pub image: Option<String>,
}

/// A 24-bit RGB embed color.
///
/// Accepts either an integer (`5793266`) or a hex string (`"#5865F2"`,
/// `"0x5865F2"`) in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawColor")]
pub struct EmbedColor(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Number(u32),
    Text(String),
}

impl TryFrom<RawColor> for EmbedColor {
    type Error = Error;

    fn try_from(raw: RawColor) -> Result<Self, Self::Error> {
        let value = match raw {
            RawColor::Number(value) => value,
            RawColor::Text(text) => parse_hex(&text)?,
        };
        if value > MAX_RGB {
            return Err(Error::Config {
                message: format!("color {value:#x} is outside the RGB range"),
            });
        }
        Ok(Self(value))
    }
}

fn parse_hex(text: &str) -> Result<u32, Error> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|e| Error::Config {
        message: format!("invalid color '{text}': {e}"),
    })
}
