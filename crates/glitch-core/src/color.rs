//! Colour values used by the theme registry
//!
//! Themes are expressed in the same terms as CSS: opaque hex colours and
//! `rgba()` colours with a fractional alpha. Terminals have no alpha channel,
//! so translucent colours are flattened with [`Rgba::over`] against whatever
//! sits underneath them.

use std::fmt;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Linear interpolation towards `other`. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Multiply every channel by `factor` (clamped to `[0, 1]`).
    pub fn scale(self, factor: f32) -> Rgb {
        Rgb::BLACK.lerp(self, factor)
    }

    /// Relative luminance approximation in `[0, 1]`.
    pub fn luma(self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A colour with a fractional alpha channel, like CSS `rgba()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }

    /// A fully opaque colour from a packed `0xRRGGBB` value.
    pub const fn opaque(value: u32) -> Self {
        Self {
            rgb: Rgb::hex(value),
            alpha: 1.0,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Composite this colour over an opaque background.
    pub fn over(self, background: Rgb) -> Rgb {
        background.lerp(self.rgb, self.alpha)
    }

    /// Same colour with a different opacity.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            rgb: self.rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.rgb)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
            )
        }
    }
}

/// A two-stop radial gradient: `centre` at the middle fading to `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialGradient {
    pub centre: Rgb,
    pub edge: Rgb,
}

impl RadialGradient {
    pub const fn new(centre: u32, edge: u32) -> Self {
        Self {
            centre: Rgb::hex(centre),
            edge: Rgb::hex(edge),
        }
    }

    /// Colour at normalised distance `distance` from the centre
    /// (0 = centre, 1 = farthest corner).
    pub fn sample(&self, distance: f32) -> Rgb {
        self.centre.lerp(self.edge, distance)
    }
}
