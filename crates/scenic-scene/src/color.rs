//! Color values and user-facing color specs
//!
//! Specs come in three spellings: a CSS-style name, `#RRGGBB`, or a
//! `0xRRGGBB` literal. Channels are stored as f32 in [0, 1].

use serde::{Deserialize, Serialize};

/// An RGB color, each channel in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let chan = |v: u8| v as f32 / 255.0;
        Color {
            r: chan(r),
            g: chan(g),
            b: chan(b),
        }
    }

    /// Unpack a `0xRRGGBB` value
    pub fn from_u32(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Exactly six hex digits, with or without the leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    /// Look up a CSS-style color name
    pub fn from_name(name: &str) -> Option<Self> {
        let c = match name {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "cyan" => Color::CYAN,
            "magenta" => Color::MAGENTA,
            "gray" | "grey" => Color::GRAY,
            "orange" => Color::new(1.0, 0.647, 0.0),
            "purple" => Color::new(0.5, 0.0, 0.5),
            "pink" => Color::new(1.0, 0.753, 0.796),
            _ => return None,
        };
        Some(c)
    }

    /// Parse a color spec in any accepted spelling. `None` means the spec
    /// matched none of them.
    pub fn parse(spec: &str) -> Option<Self> {
        if let Some(hex) = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16).ok().map(Self::from_u32);
        }
        if spec.starts_with('#') {
            return Self::from_hex(spec);
        }
        Self::from_name(spec)
    }

    /// Channels quantized to bytes
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quant = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quant(self.r), quant(self.g), quant(self.b)]
    }
}
