use serde::Serialize;

/// An RGBA color, 8 bits per channel, no premultiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The "unset" color. Keys that were never written read as this.
    pub const EMPTY: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// A fully opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Read an opaque color from the first three payload bytes (R, G, B).
    ///
    /// Schemes that only transmit RGB imply full opacity.
    pub fn from_rgb_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [r, g, b, ..] => Some(Self::rgb(*r, *g, *b)),
            _ => None,
        }
    }

    /// Read a color from one bitmap cell, which is transmitted B, G, R, A.
    pub fn from_bgra_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b, g, r, a, ..] => Some(Self {
                r: *r,
                g: *g,
                b: *b,
                a: *a,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_implies_opaque() {
        assert_eq!(
            Color::from_rgb_bytes(&[10, 20, 30]),
            Some(Color::rgb(10, 20, 30))
        );
        assert_eq!(Color::rgb(10, 20, 30).a, 255);
    }

    #[test]
    fn rgb_needs_three_bytes() {
        assert_eq!(Color::from_rgb_bytes(&[10, 20]), None);
    }

    #[test]
    fn bgra_channel_order_corrected() {
        let color = Color::from_bgra_bytes(&[30, 20, 10, 200]).unwrap();
        assert_eq!(
            color,
            Color {
                r: 10,
                g: 20,
                b: 30,
                a: 200
            }
        );
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Color::default(), Color::EMPTY);
        assert_eq!(Color::EMPTY.a, 0);
    }
}
