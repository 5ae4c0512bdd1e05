use crate::PDFError;

mod names;
pub use names::NAMED_COLOURS;

/// A colour, expressed in RGB or CMYK colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse an RGB colour from six hexadecimal digits, optionally prefixed with `#`,
    /// i.e. `"#ff8000"` or `"FF8000"`.
    pub fn from_hex(hex: &str) -> Result<Colour, PDFError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(PDFError::InvalidColour(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| PDFError::InvalidColour(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up one of the X11 / CSS named colours, ignoring case
    pub fn named(name: &str) -> Option<Colour> {
        NAMED_COLOURS
            .get(name.trim().to_lowercase().as_str())
            .and_then(|hex| Colour::from_hex(hex).ok())
    }

    /// Render an RGB colour as `#rrggbb`. CMYK and grey colours are converted
    /// to RGB first.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }

    /// Naive conversion into the RGB colour space
    pub fn to_rgb(&self) -> (f32, f32, f32) {
        match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::CMYK { c, m, y, k } => (
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            ),
            Colour::Grey { g } => (g, g, g),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    pub const CYAN: Colour = Colour::CMYK {
        c: 1.0,
        m: 0.0,
        y: 0.0,
        k: 0.0,
    };
    pub const MAGENTA: Colour = Colour::CMYK {
        c: 0.0,
        m: 1.0,
        y: 0.0,
        k: 0.0,
    };
    pub const YELLOW: Colour = Colour::CMYK {
        c: 0.0,
        m: 0.0,
        y: 1.0,
        k: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_and_without_hash() {
        let a = Colour::from_hex("#AABBCC").unwrap();
        let b = Colour::from_hex("aabbcc").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Colour::new_rgb_bytes(0xaa, 0xbb, 0xcc));
        assert_eq!(a.to_hex(), "#aabbcc");
    }

    #[test]
    fn bad_hex_is_rejected() {
        for bad in ["", "#", "#12345", "1234567", "gg0000", "#ff00zz"] {
            assert!(
                matches!(Colour::from_hex(bad), Err(PDFError::InvalidColour(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn named_colours_ignore_case() {
        assert_eq!(Colour::named("Red"), Some(colours::RED));
        assert_eq!(Colour::named("ALICEBLUE"), Colour::from_hex("F0F8FF").ok());
        assert_eq!(Colour::named("not-a-colour"), None);
    }

    #[test]
    fn every_named_colour_parses() {
        for (name, hex) in NAMED_COLOURS.iter() {
            assert!(Colour::from_hex(hex).is_ok(), "{name} => {hex}");
        }
    }
}
