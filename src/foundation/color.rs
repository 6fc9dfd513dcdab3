use crate::foundation::error::{ShowroomError, ShowroomResult};

/// RGB color with channels in `[0, 1]`.
///
/// Serializes as a `#RRGGBB` hex string, the only color format accepted from
/// catalog data and color-selection input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Parse a `#RRGGBB` string. Anything else is rejected.
    pub fn from_hex(s: &str) -> ShowroomResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ShowroomError::validation(format!("color '{s}' must start with '#'")))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ShowroomError::validation(format!(
                "color '{s}' must be #RRGGBB"
            )));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ShowroomError::validation(format!("invalid color '{s}': {e}")))
        };
        Ok(Self::from_u8(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    pub fn to_hex(self) -> String {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
