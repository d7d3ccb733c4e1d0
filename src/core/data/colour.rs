/// A packed 32-bit colour with layout `0xRRGGBBAA`: top byte red, then
/// green, blue, and alpha in the lowest byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour(u32);

impl Colour {
    /// The colour written for points that never escape. Transparent black,
    /// distinct from every table entry because table entries force full
    /// opacity.
    pub const INTERIOR: Colour = Colour(0);

    pub const ALPHA_OPAQUE: u8 = 0xff;

    #[must_use]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// Channel bytes in memory order for an RGBA byte surface.
    #[must_use]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}
