/// RGBA color used by every paint in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const RED: Color = Color::new(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);
    pub const TRANSPARENT: Color = Color::from_rgba(0x00, 0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Parses `#RGB`, `#RRGGBB`, `#AARRGGBB` or a common color name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::named(value)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let packed = u32::from_str_radix(hex, 16).ok()?;
                let expand = |nibble: u32| ((nibble & 0xf) * 0x11) as u8;
                Some(Self::new(
                    expand(packed >> 8),
                    expand(packed >> 4),
                    expand(packed),
                ))
            }
            6 => {
                let packed = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::from_argb(0xff00_0000 | packed))
            }
            8 => u32::from_str_radix(hex, 16).ok().map(Self::from_argb),
            _ => None,
        }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" | "lime" => Self::GREEN,
            "blue" => Self::BLUE,
            "transparent" => Self::TRANSPARENT,
            "gray" | "grey" => Self::new(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Self::new(0xcc, 0xcc, 0xcc),
            "darkgray" | "darkgrey" => Self::new(0x44, 0x44, 0x44),
            "cyan" | "aqua" => Self::new(0x00, 0xff, 0xff),
            "magenta" | "fuchsia" => Self::new(0xff, 0x00, 0xff),
            "yellow" => Self::new(0xff, 0xff, 0x00),
            "maroon" => Self::new(0x80, 0x00, 0x00),
            "navy" => Self::new(0x00, 0x00, 0x80),
            "olive" => Self::new(0x80, 0x80, 0x00),
            "purple" => Self::new(0x80, 0x00, 0x80),
            "silver" => Self::new(0xc0, 0xc0, 0xc0),
            "teal" => Self::new(0x00, 0x80, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#00FF00"), Some(Color::GREEN));
        assert_eq!(
            Color::parse("#800000ff"),
            Some(Color::from_rgba(0x00, 0x00, 0xff, 0x80))
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Color::parse("Blue"), Some(Color::BLUE));
        assert_eq!(Color::parse(" white "), Some(Color::WHITE));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#gggggg"), None);
        assert_eq!(Color::parse("chartreuse-ish"), None);
    }
}
