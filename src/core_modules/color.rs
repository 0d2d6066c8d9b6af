// THEORY:
// The `color` module is the most fundamental unit of the sorting engine. It is a
// "dumb" value type for a single RGB color plus the one heuristic the rest of the
// pipeline is built on: the hue angle. Anything that needs a second color
// (distances, ranking) belongs in higher modules like `metric` and `sorter`.
//
// Key architectural principles:
// 1.  **Range safety by construction**: Channels are `u8`, so a color that exists
//     cannot carry an out-of-range channel into the hue math. Float inputs (the
//     averaging reducer produces them) go through a clamping constructor instead
//     of being cast blindly.
// 2.  **Single-color scope**: The hue heuristic reads only this color. It never
//     reaches into a palette, a working set, or another image.
// 3.  **Boundary formatting lives here**: The CSS and hex renderings exist for
//     the export/preview boundary and nothing in the core depends on them.

/// A single 8-bit color channel (0-255).
pub type Channel = u8;
/// A hue angle on the color wheel, degrees in [0, 360).
pub type Hue = f32;

/// A "dumb" value type representing one RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// The red channel value (0-255).
    pub red: Channel,
    /// The green channel value (0-255).
    pub green: Channel,
    /// The blue channel value (0-255).
    pub blue: Channel,
}

impl RGBColor {
    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from float channel accumulators, rounding to the nearest
    /// integer and clamping into the 0-255 range. This is the path averaging
    /// math takes back into the typed color world.
    pub fn from_rounded(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: red.round().clamp(0.0, 255.0) as Channel,
            green: green.round().clamp(0.0, 255.0) as Channel,
            blue: blue.round().clamp(0.0, 255.0) as Channel,
        }
    }

    /// Hue angle in degrees [0, 360), via standard HSL extraction.
    ///
    /// - Normalizes channels to 0..1 and branches on the maximum channel.
    /// - Achromatic colors (max == min, i.e. grays) map to 0 by convention.
    /// - Negative sector values wrap up by 360 so the result stays in range.
    pub fn hue(&self) -> Hue {
        let red_normalized = self.red as f32 / 255.0;
        let green_normalized = self.green as f32 / 255.0;
        let blue_normalized = self.blue as f32 / 255.0;

        let maximum_channel = red_normalized.max(green_normalized.max(blue_normalized));
        let minimum_channel = red_normalized.min(green_normalized.min(blue_normalized));
        let delta = maximum_channel - minimum_channel;

        if delta <= f32::EPSILON {
            return 0.0;
        }

        let (base_difference, sector_offset) = if maximum_channel == red_normalized {
            (green_normalized - blue_normalized, 0.0)
        } else if maximum_channel == green_normalized {
            (blue_normalized - red_normalized, 2.0)
        } else {
            (red_normalized - green_normalized, 4.0)
        };

        let mut hue_degrees = (base_difference / delta + sector_offset) * 60.0;
        if hue_degrees < 0.0 {
            hue_degrees += 360.0;
        }
        hue_degrees
    }

    /// CSS functional notation, e.g. "rgb(255, 0, 0)". Used by preview/export
    /// collaborators that set background colors.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    /// Hex notation, e.g. "#FF0000".
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl From<[Channel; 3]> for RGBColor {
    fn from(channels: [Channel; 3]) -> Self {
        RGBColor::new(channels[0], channels[1], channels[2])
    }
}
