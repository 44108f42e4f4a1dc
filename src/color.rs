use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub fn with_a(mut self, a: u8) -> Self {
        self.a = a;
        self
    }
}

pub const BLANK: Color = Color::rgba(0, 0, 0, 0);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const RAY_WHITE: Color = Color::rgb(0xf5, 0xf5, 0xf5);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const GRAY: Color = Color::rgb(0x82, 0x82, 0x82);
pub const DARK_GRAY: Color = Color::rgb(0x50, 0x50, 0x50);
pub const LIGHT_GRAY: Color = Color::rgb(0xc8, 0xc8, 0xc8);
pub const RED: Color = Color::rgb(0xe6, 0x29, 0x37);
pub const MAROON: Color = Color::rgb(0xbe, 0x21, 0x37);
pub const ORANGE: Color = Color::rgb(0xff, 0xa1, 0x00);
pub const YELLOW: Color = Color::rgb(0xfd, 0xf9, 0x00);
pub const GOLD: Color = Color::rgb(0xff, 0xcb, 0x00);
pub const GREEN: Color = Color::rgb(0x00, 0xe4, 0x30);
pub const LIME: Color = Color::rgb(0x00, 0x9e, 0x2f);
pub const DARK_GREEN: Color = Color::rgb(0x00, 0x75, 0x2c);
pub const SKY_BLUE: Color = Color::rgb(0x66, 0xbf, 0xff);
pub const BLUE: Color = Color::rgb(0x00, 0x79, 0xf1);
pub const DARK_BLUE: Color = Color::rgb(0x00, 0x52, 0xac);
pub const PURPLE: Color = Color::rgb(0xc8, 0x7a, 0xff);
pub const VIOLET: Color = Color::rgb(0x87, 0x3c, 0xbe);
pub const PINK: Color = Color::rgb(0xff, 0x6d, 0xc2);
pub const BEIGE: Color = Color::rgb(0xd3, 0xb0, 0x83);
pub const BROWN: Color = Color::rgb(0x7f, 0x6a, 0x4f);
pub const DARK_BROWN: Color = Color::rgb(0x4c, 0x3f, 0x2f);
